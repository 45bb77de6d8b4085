use super::{table_or_loading, Form, PageView, Render, Section};
use crate::client::WorkDetailsApi;
use crate::pages::WorkDetailsPage;

pub const DETAILS: &str = "Work Details";
pub const NEW_LOCATION: &str = "Add Location";
pub const LOCATIONS: &str = "Work Locations";

impl<S: WorkDetailsApi> Render for WorkDetailsPage<S> {
    fn render(&self) -> PageView {
        let view = PageView::new("Work Details", self.notice());
        let Some(details) = self.work_details().get() else {
            return view
                .push(Section::Loading(DETAILS.into()))
                .push(Section::Loading(LOCATIONS.into()));
        };
        let draft = self.new_location();
        view.push(Section::Form(Form::new(
            DETAILS,
            [
                ("Unity", details.unity.as_str()),
                ("Email", details.email.as_str()),
                ("Escalate", details.escalate.as_str()),
            ],
        )))
        .push(Section::Form(Form::new(
            NEW_LOCATION,
            [("Place", draft.place.as_str()), ("Time", draft.time.as_str())],
        )))
        .push(table_or_loading(
            LOCATIONS,
            &["#", "Place", "Time"],
            Some(&details.work_location),
            |i, l| vec![i.to_string(), l.place.clone(), l.time.clone()],
        ))
    }
}
