use super::{id_cell, table_or_loading, Form, PageView, Render, Section};
use crate::client::TeamApi;
use crate::pages::TeamPage;

pub const DETAILS: &str = "Team Details";
pub const NEW_BOOKMARK: &str = "Add Bookmark";
pub const BOOKMARKS: &str = "Bookmarks";
pub const NEW_FAQ: &str = "Add FAQ";
pub const FAQS: &str = "FAQs";

impl<S: TeamApi> Render for TeamPage<S> {
    fn render(&self) -> PageView {
        let details = match self.team_details().get() {
            Some(d) => Section::Form(Form::new(
                DETAILS,
                [
                    ("Team Name", d.team_name.as_str()),
                    ("Product Focus", d.product_focus.as_str()),
                ],
            )),
            None => Section::Loading(DETAILS.into()),
        };
        let new_bookmark = self.new_bookmark();
        let new_faq = self.new_faq();

        PageView::new("Team", self.notice())
            .push(details)
            .push(Section::Form(Form::new(
                NEW_BOOKMARK,
                [
                    ("Title", new_bookmark.title.as_str()),
                    ("Description", new_bookmark.description.as_str()),
                ],
            )))
            .push(table_or_loading(
                BOOKMARKS,
                &["id", "Title", "Description"],
                self.bookmarks().get(),
                |_, b| vec![id_cell(b.id), b.title.clone(), b.description.clone()],
            ))
            .push(Section::Form(Form::new(
                NEW_FAQ,
                [
                    ("Question", new_faq.question.as_str()),
                    ("Answer", new_faq.answer.as_str()),
                ],
            )))
            .push(table_or_loading(
                FAQS,
                &["id", "Question", "Answer"],
                self.faqs().get(),
                |_, f| vec![id_cell(f.id), f.question.clone(), f.answer.clone()],
            ))
    }
}
