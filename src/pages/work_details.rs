//! Work details page: one document with an editable list of work locations.
//!
//! Location add/delete only touch the local document; `Save` pushes the whole
//! document, there is no per-location endpoint.

use super::{require_non_blank, row_at, settle, Loadable, Notice};
use crate::client::WorkDetailsApi;
use crate::error::ActionResult;
use crate::models::{WorkDetails, WorkLocation};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationField {
    Place,
    Time,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkDetailsEvent {
    EditUnity(String),
    EditEmail(String),
    EditEscalate(String),
    EditDraftLocation(LocationField, String),
    AddLocation,
    EditLocation {
        index: usize,
        field: LocationField,
        value: String,
    },
    DeleteLocation(usize),
    Save,
    Reload,
}

pub struct WorkDetailsPage<S> {
    api: S,
    work_details: Loadable<WorkDetails>,
    new_location: WorkLocation,
    notice: Option<Notice>,
}

fn set_location_field(location: &mut WorkLocation, field: LocationField, value: String) {
    match field {
        LocationField::Place => location.place = value,
        LocationField::Time => location.time = value,
    }
}

impl<S: WorkDetailsApi> WorkDetailsPage<S> {
    pub fn new(api: S) -> Self {
        Self {
            api,
            work_details: Loadable::Loading,
            new_location: WorkLocation::default(),
            notice: None,
        }
    }

    pub fn work_details(&self) -> &Loadable<WorkDetails> {
        &self.work_details
    }

    pub fn new_location(&self) -> &WorkLocation {
        &self.new_location
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn api(&self) -> &S {
        &self.api
    }

    pub async fn init(&mut self) -> ActionResult {
        self.refresh().await
    }

    pub async fn refresh(&mut self) -> ActionResult {
        let fetched = self.api.get_work_details().await;
        let result = super::apply_fetch(&mut self.work_details, fetched);
        if result.is_ok() {
            self.notice = None;
        }
        settle(&mut self.notice, "load work details", result, None)
    }

    /// Push the whole local document. Local state is left as is.
    pub async fn save(&mut self) -> ActionResult {
        let result: ActionResult = match self.work_details.require("work details") {
            Ok(details) => self
                .api
                .update_work_details(details)
                .await
                .map(|_| ())
                .map_err(Into::into),
            Err(e) => Err(e),
        };
        settle(
            &mut self.notice,
            "update work details",
            result,
            Some("Work details updated successfully".into()),
        )
    }

    /// Append the draft location once both fields are non-blank, then reset it.
    pub fn add_location(&mut self) -> ActionResult {
        let result = self.try_add_location();
        settle(&mut self.notice, "add work location", result, None)
    }

    fn try_add_location(&mut self) -> ActionResult {
        let place = require_non_blank("place", &self.new_location.place)?.to_string();
        let time = require_non_blank("time", &self.new_location.time)?.to_string();
        let details = self.work_details.require_mut("work details")?;
        details.work_location.push(WorkLocation { place, time });
        self.new_location = WorkLocation::default();
        Ok(())
    }

    pub fn delete_location(&mut self, index: usize) -> ActionResult {
        let result = self.work_details.require_mut("work details").and_then(|details| {
            row_at(&mut details.work_location, index, "work location")?;
            details.work_location.remove(index);
            Ok(())
        });
        settle(&mut self.notice, "delete work location", result, None)
    }

    /// Apply one view event.
    pub async fn dispatch(&mut self, event: WorkDetailsEvent) -> ActionResult {
        match event {
            WorkDetailsEvent::EditUnity(v) => self.edit_document(|d| d.unity = v),
            WorkDetailsEvent::EditEmail(v) => self.edit_document(|d| d.email = v),
            WorkDetailsEvent::EditEscalate(v) => self.edit_document(|d| d.escalate = v),
            WorkDetailsEvent::EditDraftLocation(field, v) => {
                set_location_field(&mut self.new_location, field, v);
                Ok(())
            }
            WorkDetailsEvent::AddLocation => self.add_location(),
            WorkDetailsEvent::EditLocation { index, field, value } => {
                let result = self.work_details.require_mut("work details").and_then(|d| {
                    let location = row_at(&mut d.work_location, index, "work location")?;
                    set_location_field(location, field, value);
                    Ok(())
                });
                settle(&mut self.notice, "edit work location", result, None)
            }
            WorkDetailsEvent::DeleteLocation(index) => self.delete_location(index),
            WorkDetailsEvent::Save => self.save().await,
            WorkDetailsEvent::Reload => self.refresh().await,
        }
    }

    fn edit_document<F>(&mut self, edit: F) -> ActionResult
    where
        F: FnOnce(&mut WorkDetails),
    {
        let result = self.work_details.require_mut("work details").map(edit);
        settle(&mut self.notice, "edit work details", result, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fakes::FakeWorkDetailsApi;

    fn loaded_details() -> WorkDetails {
        WorkDetails {
            unity: "Payments".into(),
            email: "pay@example.com".into(),
            escalate: "oncall".into(),
            work_location: vec![
                WorkLocation::new("Pune", "9-5"),
                WorkLocation::new("Berlin", "10-6"),
                WorkLocation::new("Austin", "8-4"),
            ],
        }
    }

    async fn ready_page() -> (WorkDetailsPage<FakeWorkDetailsApi>, FakeWorkDetailsApi) {
        let api = FakeWorkDetailsApi::with(loaded_details());
        let mut page = WorkDetailsPage::new(api.clone());
        page.init().await.unwrap();
        (page, api)
    }

    #[tokio::test]
    async fn init_overwrites_document() {
        let (page, api) = ready_page().await;
        assert_eq!(page.work_details().get(), Some(&loaded_details()));
        assert_eq!(api.calls(), vec!["get_work_details"]);
    }

    #[tokio::test]
    async fn blank_location_is_not_added() {
        let (mut page, api) = ready_page().await;
        page.dispatch(WorkDetailsEvent::EditDraftLocation(LocationField::Place, "Lisbon".into()))
            .await
            .unwrap();
        page.dispatch(WorkDetailsEvent::EditDraftLocation(LocationField::Time, "   ".into()))
            .await
            .unwrap();

        let err = page.dispatch(WorkDetailsEvent::AddLocation).await;
        assert!(err.is_err());
        assert_eq!(page.work_details().get().unwrap().work_location.len(), 3);
        assert_eq!(page.new_location().place, "Lisbon");
        assert!(page.notice().unwrap().is_error());
        assert_eq!(api.calls(), vec!["get_work_details"]);
    }

    #[tokio::test]
    async fn add_location_appends_trimmed_and_resets_draft() {
        let (mut page, api) = ready_page().await;
        page.dispatch(WorkDetailsEvent::EditDraftLocation(LocationField::Place, " Lisbon ".into()))
            .await
            .unwrap();
        page.dispatch(WorkDetailsEvent::EditDraftLocation(LocationField::Time, "7-3".into()))
            .await
            .unwrap();
        page.dispatch(WorkDetailsEvent::AddLocation).await.unwrap();

        let locations = &page.work_details().get().unwrap().work_location;
        assert_eq!(locations.last(), Some(&WorkLocation::new("Lisbon", "7-3")));
        assert_eq!(page.new_location(), &WorkLocation::default());
        assert_eq!(api.calls(), vec!["get_work_details"]);
    }

    #[tokio::test]
    async fn delete_by_index_shifts_later_rows() {
        let (mut page, _api) = ready_page().await;
        page.dispatch(WorkDetailsEvent::DeleteLocation(1)).await.unwrap();
        let places: Vec<_> = page
            .work_details()
            .get()
            .unwrap()
            .work_location
            .iter()
            .map(|l| l.place.as_str())
            .collect();
        assert_eq!(places, vec!["Pune", "Austin"]);
    }

    #[tokio::test]
    async fn delete_out_of_range_is_rejected() {
        let (mut page, _api) = ready_page().await;
        assert!(page.dispatch(WorkDetailsEvent::DeleteLocation(9)).await.is_err());
        assert_eq!(page.work_details().get().unwrap().work_location.len(), 3);
    }

    #[tokio::test]
    async fn save_pushes_edited_document() {
        let (mut page, api) = ready_page().await;
        page.dispatch(WorkDetailsEvent::EditEscalate("team-lead".into()))
            .await
            .unwrap();
        page.dispatch(WorkDetailsEvent::EditLocation {
            index: 0,
            field: LocationField::Time,
            value: "8-4".into(),
        })
        .await
        .unwrap();
        page.dispatch(WorkDetailsEvent::Save).await.unwrap();

        let saved = api.stored();
        assert_eq!(saved.escalate, "team-lead");
        assert_eq!(saved.work_location[0].time, "8-4");
        assert_eq!(
            page.notice(),
            Some(&Notice::Success("Work details updated successfully".into()))
        );
    }

    #[tokio::test]
    async fn failed_save_surfaces_error() {
        let (mut page, api) = ready_page().await;
        api.fail_next();
        assert!(page.save().await.is_err());
        assert!(page.notice().unwrap().is_error());
        assert_eq!(page.work_details().get(), Some(&loaded_details()));
    }

    #[tokio::test]
    async fn good_reload_clears_load_error() {
        let api = FakeWorkDetailsApi::with(loaded_details());
        api.fail_next();
        let mut page = WorkDetailsPage::new(api.clone());
        assert!(page.init().await.is_err());
        assert!(page.notice().unwrap().is_error());

        page.dispatch(WorkDetailsEvent::Reload).await.unwrap();
        assert_eq!(page.notice(), None);
        assert_eq!(page.work_details().get(), Some(&loaded_details()));
    }

    #[tokio::test]
    async fn edits_before_load_are_rejected() {
        let api = FakeWorkDetailsApi::with(loaded_details());
        let mut page = WorkDetailsPage::new(api.clone());
        assert!(page.dispatch(WorkDetailsEvent::EditUnity("x".into())).await.is_err());
        assert!(page.save().await.is_err());
        assert!(api.calls().is_empty());
    }
}
