use super::{id_cell, table_or_loading, Form, PageView, Render, Section};
use crate::client::ProjectApi;
use crate::pages::ProjectPage;

pub const NEW_TECH: &str = "Add Tech";
pub const TECH_STACK: &str = "Tech Stack";
pub const NEW_PROJECT: &str = "Add Project";
pub const PROJECTS: &str = "Projects";
pub const DEPENDENCIES: &str = "Dependencies";

impl<S: ProjectApi> Render for ProjectPage<S> {
    fn render(&self) -> PageView {
        let draft = self.new_project();
        PageView::new("Projects", self.notice())
            .push(Section::Form(Form::new(NEW_TECH, [("Tech", self.new_tech())])))
            .push(table_or_loading(
                TECH_STACK,
                &["#", "Technology"],
                self.tech_stack().get(),
                |i, t| vec![i.to_string(), t.clone()],
            ))
            .push(Section::Form(Form::new(
                NEW_PROJECT,
                [
                    ("Title", draft.title.as_str()),
                    ("URL", draft.url.as_str()),
                    ("Description", draft.description.as_str()),
                ],
            )))
            .push(table_or_loading(
                PROJECTS,
                &["id", "Title", "URL", "Description"],
                self.projects().get(),
                |_, p| vec![id_cell(p.id), p.title.clone(), p.url.clone(), p.description.clone()],
            ))
            .push(table_or_loading(
                DEPENDENCIES,
                &["#", "Team Dependencies", "Tech Team Dependencies"],
                self.dependencies().get(),
                |i, d| {
                    vec![
                        i.to_string(),
                        d.team_dependency.join(", "),
                        d.tech_team_dependency.join(", "),
                    ]
                },
            ))
    }
}
