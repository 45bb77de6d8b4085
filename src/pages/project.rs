//! Project page: tech stack list, project collection and dependency rows.
//!
//! The tech stack has no per-entry endpoint: add and delete build the next
//! list, PUT it whole, then refetch.

use super::{apply_fetch, find_by_id, require_non_blank, row_at, settle, split_list, Loadable, Notice};
use crate::client::ProjectApi;
use crate::error::{ActionError, ActionResult};
use crate::models::{Dependency, Project, ProjectDraft, RecordId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Url,
    Description,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DependencyField {
    Team,
    TechTeam,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectEvent {
    EditDraftTech(String),
    AddTech,
    DeleteTech(usize),
    SaveTechStack,

    EditDraftProject(ProjectField, String),
    AddProject,
    EditProject {
        id: RecordId,
        field: ProjectField,
        value: String,
    },
    SaveProject(RecordId),
    DeleteProject(RecordId),

    /// `value` is the comma separated list as typed.
    EditDependency {
        index: usize,
        field: DependencyField,
        value: String,
    },
    SaveDependencies,

    Reload,
}

pub struct ProjectPage<S> {
    api: S,
    tech_stack: Loadable<Vec<String>>,
    new_tech: String,
    projects: Loadable<Vec<Project>>,
    new_project: ProjectDraft,
    dependencies: Loadable<Vec<Dependency>>,
    notice: Option<Notice>,
}

fn set_project_field(title: &mut String, url: &mut String, description: &mut String, field: ProjectField, value: String) {
    match field {
        ProjectField::Title => *title = value,
        ProjectField::Url => *url = value,
        ProjectField::Description => *description = value,
    }
}

impl<S: ProjectApi> ProjectPage<S> {
    pub fn new(api: S) -> Self {
        Self {
            api,
            tech_stack: Loadable::Loading,
            new_tech: String::new(),
            projects: Loadable::Loading,
            new_project: ProjectDraft::default(),
            dependencies: Loadable::Loading,
            notice: None,
        }
    }

    pub fn tech_stack(&self) -> &Loadable<Vec<String>> {
        &self.tech_stack
    }

    pub fn new_tech(&self) -> &str {
        &self.new_tech
    }

    pub fn projects(&self) -> &Loadable<Vec<Project>> {
        &self.projects
    }

    pub fn new_project(&self) -> &ProjectDraft {
        &self.new_project
    }

    pub fn dependencies(&self) -> &Loadable<Vec<Dependency>> {
        &self.dependencies
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn api(&self) -> &S {
        &self.api
    }

    pub async fn init(&mut self) -> ActionResult {
        let (tech_stack, projects, dependencies) = tokio::join!(
            self.api.get_tech_stack(),
            self.api.get_projects(),
            self.api.get_dependencies()
        );
        let results = [
            settle(
                &mut self.notice,
                "load tech stack",
                apply_fetch(&mut self.tech_stack, tech_stack),
                None,
            ),
            settle(
                &mut self.notice,
                "load projects",
                apply_fetch(&mut self.projects, projects),
                None,
            ),
            settle(
                &mut self.notice,
                "load dependencies",
                apply_fetch(&mut self.dependencies, dependencies),
                None,
            ),
        ];
        let outcome: ActionResult = results.into_iter().collect();
        if outcome.is_ok() {
            self.notice = None;
        }
        outcome
    }

    pub async fn refresh_tech_stack(&mut self) -> ActionResult {
        let fetched = self.api.get_tech_stack().await;
        apply_fetch(&mut self.tech_stack, fetched)
    }

    pub async fn refresh_projects(&mut self) -> ActionResult {
        let fetched = self.api.get_projects().await;
        apply_fetch(&mut self.projects, fetched)
    }

    /// PUT `next` as the whole tech stack, then refetch it.
    async fn replace_tech_stack(&mut self, next: Vec<String>) -> ActionResult {
        self.api.update_tech_stack(&next).await?;
        self.refresh_tech_stack().await
    }

    /// Add the trimmed draft entry. Blank input never reaches the backend.
    pub async fn add_tech(&mut self) -> ActionResult {
        let result = match self.next_stack_with_draft() {
            Ok(next) => {
                let sent = self.replace_tech_stack(next).await;
                if sent.is_ok() {
                    self.new_tech.clear();
                }
                sent
            }
            Err(e) => Err(e),
        };
        settle(&mut self.notice, "add tech", result, Some("Tech stack updated successfully".into()))
    }

    fn next_stack_with_draft(&self) -> Result<Vec<String>, ActionError> {
        let entry = require_non_blank("tech", &self.new_tech)?;
        let mut next = self.tech_stack.require("tech stack")?.clone();
        next.push(entry.to_string());
        Ok(next)
    }

    /// Remove the entry at `index`; later entries shift down by one.
    pub async fn delete_tech(&mut self, index: usize) -> ActionResult {
        let next = self.tech_stack.require("tech stack").and_then(|current| {
            if index >= current.len() {
                return Err(ActionError::no_row("tech", index));
            }
            let mut next = current.clone();
            next.remove(index);
            Ok(next)
        });
        let result = match next {
            Ok(next) => self.replace_tech_stack(next).await,
            Err(e) => Err(e),
        };
        settle(&mut self.notice, "delete tech", result, Some("Tech stack updated successfully".into()))
    }

    pub async fn save_tech_stack(&mut self) -> ActionResult {
        let result = match self.tech_stack.require("tech stack") {
            Ok(current) => {
                let current = current.clone();
                self.replace_tech_stack(current).await
            }
            Err(e) => Err(e),
        };
        settle(&mut self.notice, "update tech stack", result, Some("Tech stack updated successfully".into()))
    }

    pub async fn add_project(&mut self) -> ActionResult {
        let sent = self.api.add_project(&self.new_project).await;
        let result = match sent {
            Ok(_) => {
                self.new_project = ProjectDraft::default();
                self.refresh_projects().await
            }
            Err(e) => Err(e.into()),
        };
        settle(&mut self.notice, "add project", result, Some("Project added".into()))
    }

    pub async fn update_project(&mut self, id: RecordId) -> ActionResult {
        let snapshot = self
            .projects
            .require_mut("projects")
            .and_then(|rows| find_by_id(rows, id, "project").map(|p| p.clone()));
        let result: ActionResult = match snapshot {
            Ok(project) => self
                .api
                .update_project(id, &project)
                .await
                .map(|_| ())
                .map_err(Into::into),
            Err(e) => Err(e),
        };
        settle(&mut self.notice, "update project", result, Some("Project updated successfully".into()))
    }

    pub async fn delete_project(&mut self, id: RecordId) -> ActionResult {
        let sent = self.api.delete_project(id).await;
        let result = match sent {
            Ok(()) => self.refresh_projects().await,
            Err(e) => Err(e.into()),
        };
        settle(&mut self.notice, "delete project", result, Some("Project deleted".into()))
    }

    /// Push every dependency row as one document.
    pub async fn update_dependencies(&mut self) -> ActionResult {
        let result: ActionResult = match self.dependencies.require("dependencies") {
            Ok(rows) => self
                .api
                .update_dependencies(rows)
                .await
                .map(|_| ())
                .map_err(Into::into),
            Err(e) => Err(e),
        };
        settle(
            &mut self.notice,
            "update dependencies",
            result,
            Some("Dependencies updated successfully".into()),
        )
    }

    pub async fn dispatch(&mut self, event: ProjectEvent) -> ActionResult {
        match event {
            ProjectEvent::EditDraftTech(v) => {
                self.new_tech = v;
                Ok(())
            }
            ProjectEvent::AddTech => self.add_tech().await,
            ProjectEvent::DeleteTech(index) => self.delete_tech(index).await,
            ProjectEvent::SaveTechStack => self.save_tech_stack().await,

            ProjectEvent::EditDraftProject(field, v) => {
                let d = &mut self.new_project;
                set_project_field(&mut d.title, &mut d.url, &mut d.description, field, v);
                Ok(())
            }
            ProjectEvent::AddProject => self.add_project().await,
            ProjectEvent::EditProject { id, field, value } => {
                let result = self.projects.require_mut("projects").and_then(|rows| {
                    let p = find_by_id(rows, id, "project")?;
                    set_project_field(&mut p.title, &mut p.url, &mut p.description, field, value);
                    Ok(())
                });
                settle(&mut self.notice, "edit project", result, None)
            }
            ProjectEvent::SaveProject(id) => self.update_project(id).await,
            ProjectEvent::DeleteProject(id) => self.delete_project(id).await,

            ProjectEvent::EditDependency { index, field, value } => {
                let result = self.dependencies.require_mut("dependencies").and_then(|rows| {
                    let row = row_at(rows, index, "dependency")?;
                    let list = split_list(&value);
                    match field {
                        DependencyField::Team => row.team_dependency = list,
                        DependencyField::TechTeam => row.tech_team_dependency = list,
                    }
                    Ok(())
                });
                settle(&mut self.notice, "edit dependency", result, None)
            }
            ProjectEvent::SaveDependencies => self.update_dependencies().await,

            ProjectEvent::Reload => self.init().await,
        }
    }
}
