//! Team page: team details document plus bookmark and FAQ collections.

use super::{apply_fetch, find_by_id, settle, Loadable, Notice};
use crate::client::TeamApi;
use crate::error::{ActionError, ActionResult};
use crate::models::{Bookmark, BookmarkDraft, Faq, FaqDraft, RecordId, TeamDetails};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookmarkField {
    Title,
    Description,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaqField {
    Question,
    Answer,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TeamEvent {
    EditTeamName(String),
    EditProductFocus(String),
    SaveTeamDetails,

    EditDraftBookmark(BookmarkField, String),
    AddBookmark,
    EditBookmark {
        id: RecordId,
        field: BookmarkField,
        value: String,
    },
    SaveBookmark(RecordId),
    DeleteBookmark(RecordId),

    EditDraftFaq(FaqField, String),
    AddFaq,
    EditFaq {
        id: RecordId,
        field: FaqField,
        value: String,
    },
    SaveFaq(RecordId),
    DeleteFaq(RecordId),

    Reload,
}

pub struct TeamPage<S> {
    api: S,
    team_details: Loadable<TeamDetails>,
    bookmarks: Loadable<Vec<Bookmark>>,
    new_bookmark: BookmarkDraft,
    faqs: Loadable<Vec<Faq>>,
    new_faq: FaqDraft,
    notice: Option<Notice>,
}

fn set_bookmark_field(title: &mut String, description: &mut String, field: BookmarkField, value: String) {
    match field {
        BookmarkField::Title => *title = value,
        BookmarkField::Description => *description = value,
    }
}

fn set_faq_field(question: &mut String, answer: &mut String, field: FaqField, value: String) {
    match field {
        FaqField::Question => *question = value,
        FaqField::Answer => *answer = value,
    }
}

impl<S: TeamApi> TeamPage<S> {
    pub fn new(api: S) -> Self {
        Self {
            api,
            team_details: Loadable::Loading,
            bookmarks: Loadable::Loading,
            new_bookmark: BookmarkDraft::default(),
            faqs: Loadable::Loading,
            new_faq: FaqDraft::default(),
            notice: None,
        }
    }

    pub fn team_details(&self) -> &Loadable<TeamDetails> {
        &self.team_details
    }

    pub fn bookmarks(&self) -> &Loadable<Vec<Bookmark>> {
        &self.bookmarks
    }

    pub fn new_bookmark(&self) -> &BookmarkDraft {
        &self.new_bookmark
    }

    pub fn faqs(&self) -> &Loadable<Vec<Faq>> {
        &self.faqs
    }

    pub fn new_faq(&self) -> &FaqDraft {
        &self.new_faq
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn api(&self) -> &S {
        &self.api
    }

    /// Fetch all three sections concurrently; each success overwrites its
    /// section. Returns the first failure, if any.
    pub async fn init(&mut self) -> ActionResult {
        let (details, bookmarks, faqs) = tokio::join!(
            self.api.get_team_details(),
            self.api.get_bookmarks(),
            self.api.get_faqs()
        );
        let results = [
            settle(
                &mut self.notice,
                "load team details",
                apply_fetch(&mut self.team_details, details),
                None,
            ),
            settle(
                &mut self.notice,
                "load bookmarks",
                apply_fetch(&mut self.bookmarks, bookmarks),
                None,
            ),
            settle(&mut self.notice, "load faqs", apply_fetch(&mut self.faqs, faqs), None),
        ];
        let outcome: ActionResult = results.into_iter().collect();
        if outcome.is_ok() {
            self.notice = None;
        }
        outcome
    }

    pub async fn refresh_bookmarks(&mut self) -> ActionResult {
        let fetched = self.api.get_bookmarks().await;
        apply_fetch(&mut self.bookmarks, fetched)
    }

    pub async fn refresh_faqs(&mut self) -> ActionResult {
        let fetched = self.api.get_faqs().await;
        apply_fetch(&mut self.faqs, fetched)
    }

    pub async fn update_team_details(&mut self) -> ActionResult {
        let result: ActionResult = match self.team_details.require("team details") {
            Ok(details) => self
                .api
                .update_team_details(details)
                .await
                .map(|_| ())
                .map_err(Into::into),
            Err(e) => Err(e),
        };
        settle(
            &mut self.notice,
            "update team details",
            result,
            Some("Team details updated successfully".into()),
        )
    }

    /// Create the draft bookmark, then refetch the list and reset the draft.
    pub async fn add_bookmark(&mut self) -> ActionResult {
        let sent = self.api.add_bookmark(&self.new_bookmark).await;
        let result = match sent {
            Ok(_) => {
                self.new_bookmark = BookmarkDraft::default();
                self.refresh_bookmarks().await
            }
            Err(e) => Err(e.into()),
        };
        settle(&mut self.notice, "add bookmark", result, Some("Bookmark added".into()))
    }

    /// Push the local copy of bookmark `id`.
    pub async fn update_bookmark(&mut self, id: RecordId) -> ActionResult {
        let result: ActionResult = match self.bookmark_snapshot(id) {
            Ok(bookmark) => self
                .api
                .update_bookmark(id, &bookmark)
                .await
                .map(|_| ())
                .map_err(Into::into),
            Err(e) => Err(e),
        };
        settle(
            &mut self.notice,
            "update bookmark",
            result,
            Some("Bookmark updated successfully".into()),
        )
    }

    pub async fn delete_bookmark(&mut self, id: RecordId) -> ActionResult {
        let sent = self.api.delete_bookmark(id).await;
        let result = match sent {
            Ok(()) => self.refresh_bookmarks().await,
            Err(e) => Err(e.into()),
        };
        settle(&mut self.notice, "delete bookmark", result, Some("Bookmark deleted".into()))
    }

    pub async fn add_faq(&mut self) -> ActionResult {
        let sent = self.api.add_faq(&self.new_faq).await;
        let result = match sent {
            Ok(_) => {
                self.new_faq = FaqDraft::default();
                self.refresh_faqs().await
            }
            Err(e) => Err(e.into()),
        };
        settle(&mut self.notice, "add faq", result, Some("FAQ added".into()))
    }

    pub async fn update_faq(&mut self, id: RecordId) -> ActionResult {
        let result: ActionResult = match self.faq_snapshot(id) {
            Ok(faq) => self
                .api
                .update_faq(id, &faq)
                .await
                .map(|_| ())
                .map_err(Into::into),
            Err(e) => Err(e),
        };
        settle(&mut self.notice, "update faq", result, Some("FAQ updated successfully".into()))
    }

    pub async fn delete_faq(&mut self, id: RecordId) -> ActionResult {
        let sent = self.api.delete_faq(id).await;
        let result = match sent {
            Ok(()) => self.refresh_faqs().await,
            Err(e) => Err(e.into()),
        };
        settle(&mut self.notice, "delete faq", result, Some("FAQ deleted".into()))
    }

    fn bookmark_snapshot(&mut self, id: RecordId) -> Result<Bookmark, ActionError> {
        let rows = self.bookmarks.require_mut("bookmarks")?;
        find_by_id(rows, id, "bookmark").map(|b| b.clone())
    }

    fn faq_snapshot(&mut self, id: RecordId) -> Result<Faq, ActionError> {
        let rows = self.faqs.require_mut("faqs")?;
        find_by_id(rows, id, "faq").map(|f| f.clone())
    }

    pub async fn dispatch(&mut self, event: TeamEvent) -> ActionResult {
        match event {
            TeamEvent::EditTeamName(v) => self.edit_details(|d| d.team_name = v),
            TeamEvent::EditProductFocus(v) => self.edit_details(|d| d.product_focus = v),
            TeamEvent::SaveTeamDetails => self.update_team_details().await,

            TeamEvent::EditDraftBookmark(field, v) => {
                let draft = &mut self.new_bookmark;
                set_bookmark_field(&mut draft.title, &mut draft.description, field, v);
                Ok(())
            }
            TeamEvent::AddBookmark => self.add_bookmark().await,
            TeamEvent::EditBookmark { id, field, value } => {
                let result = self.bookmarks.require_mut("bookmarks").and_then(|rows| {
                    let row = find_by_id(rows, id, "bookmark")?;
                    set_bookmark_field(&mut row.title, &mut row.description, field, value);
                    Ok(())
                });
                settle(&mut self.notice, "edit bookmark", result, None)
            }
            TeamEvent::SaveBookmark(id) => self.update_bookmark(id).await,
            TeamEvent::DeleteBookmark(id) => self.delete_bookmark(id).await,

            TeamEvent::EditDraftFaq(field, v) => {
                let draft = &mut self.new_faq;
                set_faq_field(&mut draft.question, &mut draft.answer, field, v);
                Ok(())
            }
            TeamEvent::AddFaq => self.add_faq().await,
            TeamEvent::EditFaq { id, field, value } => {
                let result = self.faqs.require_mut("faqs").and_then(|rows| {
                    let row = find_by_id(rows, id, "faq")?;
                    set_faq_field(&mut row.question, &mut row.answer, field, value);
                    Ok(())
                });
                settle(&mut self.notice, "edit faq", result, None)
            }
            TeamEvent::SaveFaq(id) => self.update_faq(id).await,
            TeamEvent::DeleteFaq(id) => self.delete_faq(id).await,

            TeamEvent::Reload => self.init().await,
        }
    }

    fn edit_details<F>(&mut self, edit: F) -> ActionResult
    where
        F: FnOnce(&mut TeamDetails),
    {
        let result = self.team_details.require_mut("team details").map(edit);
        settle(&mut self.notice, "edit team details", result, None)
    }
}
