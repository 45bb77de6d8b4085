//! In-memory service doubles that record every call.

use crate::client::{ProjectApi, TeamApi, WorkDetailsApi};
use crate::error::ClientError;
use crate::models::{
    Bookmark, BookmarkDraft, Dependency, Faq, FaqDraft, Project, ProjectDraft, RecordId,
    TeamDetails, WorkDetails,
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
    fail_next: bool,
}

impl Recorder {
    /// Log the call; fails with a 500 if a failure was queued.
    fn record(&mut self, call: impl Into<String>) -> Result<(), ClientError> {
        self.calls.push(call.into());
        if std::mem::take(&mut self.fail_next) {
            return Err(ClientError::api(500, "injected failure"));
        }
        Ok(())
    }
}

fn next_id<T>(rows: &[T], id: impl Fn(&T) -> Option<RecordId>) -> RecordId {
    rows.iter().filter_map(id).max().unwrap_or(0) + 1
}

fn not_found(id: RecordId) -> ClientError {
    ClientError::api(404, format!("no record {}", id))
}

#[derive(Default)]
struct WorkState {
    rec: Recorder,
    details: WorkDetails,
}

#[derive(Clone, Default)]
pub struct FakeWorkDetailsApi {
    state: Arc<Mutex<WorkState>>,
}

impl FakeWorkDetailsApi {
    pub fn with(details: WorkDetails) -> Self {
        let fake = Self::default();
        fake.state.lock().unwrap().details = details;
        fake
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().rec.calls.clone()
    }

    pub fn fail_next(&self) {
        self.state.lock().unwrap().rec.fail_next = true;
    }

    pub fn stored(&self) -> WorkDetails {
        self.state.lock().unwrap().details.clone()
    }
}

#[async_trait]
impl WorkDetailsApi for FakeWorkDetailsApi {
    async fn get_work_details(&self) -> Result<WorkDetails, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record("get_work_details")?;
        Ok(s.details.clone())
    }

    async fn update_work_details(&self, details: &WorkDetails) -> Result<Value, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record("update_work_details")?;
        s.details = details.clone();
        Ok(serde_json::to_value(&s.details)?)
    }
}

#[derive(Default)]
struct TeamState {
    rec: Recorder,
    details: TeamDetails,
    bookmarks: Vec<Bookmark>,
    faqs: Vec<Faq>,
}

#[derive(Clone, Default)]
pub struct FakeTeamApi {
    state: Arc<Mutex<TeamState>>,
}

impl FakeTeamApi {
    pub fn with(details: TeamDetails, bookmarks: Vec<Bookmark>, faqs: Vec<Faq>) -> Self {
        let fake = Self::default();
        {
            let mut s = fake.state.lock().unwrap();
            s.details = details;
            s.bookmarks = bookmarks;
            s.faqs = faqs;
        }
        fake
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().rec.calls.clone()
    }

    pub fn fail_next(&self) {
        self.state.lock().unwrap().rec.fail_next = true;
    }

    pub fn details(&self) -> TeamDetails {
        self.state.lock().unwrap().details.clone()
    }

    pub fn bookmarks(&self) -> Vec<Bookmark> {
        self.state.lock().unwrap().bookmarks.clone()
    }

    pub fn faqs(&self) -> Vec<Faq> {
        self.state.lock().unwrap().faqs.clone()
    }
}

#[async_trait]
impl TeamApi for FakeTeamApi {
    async fn get_team_details(&self) -> Result<TeamDetails, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record("get_team_details")?;
        Ok(s.details.clone())
    }

    async fn update_team_details(&self, details: &TeamDetails) -> Result<Value, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record("update_team_details")?;
        s.details = details.clone();
        Ok(serde_json::to_value(&s.details)?)
    }

    async fn get_bookmarks(&self) -> Result<Vec<Bookmark>, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record("get_bookmarks")?;
        Ok(s.bookmarks.clone())
    }

    async fn get_bookmark(&self, id: RecordId) -> Result<Bookmark, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record(format!("get_bookmark {}", id))?;
        s.bookmarks
            .iter()
            .find(|b| b.id == Some(id))
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn add_bookmark(&self, draft: &BookmarkDraft) -> Result<Value, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record("add_bookmark")?;
        let created = Bookmark {
            id: Some(next_id(&s.bookmarks, |b| b.id)),
            title: draft.title.clone(),
            description: draft.description.clone(),
        };
        s.bookmarks.push(created.clone());
        Ok(serde_json::to_value(&created)?)
    }

    async fn update_bookmark(&self, id: RecordId, bookmark: &Bookmark) -> Result<Value, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record(format!("update_bookmark {}", id))?;
        let row = s
            .bookmarks
            .iter_mut()
            .find(|b| b.id == Some(id))
            .ok_or_else(|| not_found(id))?;
        *row = bookmark.clone();
        row.id = Some(id);
        Ok(serde_json::to_value(&*row)?)
    }

    async fn delete_bookmark(&self, id: RecordId) -> Result<(), ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record(format!("delete_bookmark {}", id))?;
        s.bookmarks.retain(|b| b.id != Some(id));
        Ok(())
    }

    async fn get_faqs(&self) -> Result<Vec<Faq>, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record("get_faqs")?;
        Ok(s.faqs.clone())
    }

    async fn get_faq(&self, id: RecordId) -> Result<Faq, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record(format!("get_faq {}", id))?;
        s.faqs
            .iter()
            .find(|f| f.id == Some(id))
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn add_faq(&self, draft: &FaqDraft) -> Result<Value, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record("add_faq")?;
        let created = Faq {
            id: Some(next_id(&s.faqs, |f| f.id)),
            question: draft.question.clone(),
            answer: draft.answer.clone(),
        };
        s.faqs.push(created.clone());
        Ok(serde_json::to_value(&created)?)
    }

    async fn update_faq(&self, id: RecordId, faq: &Faq) -> Result<Value, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record(format!("update_faq {}", id))?;
        let row = s
            .faqs
            .iter_mut()
            .find(|f| f.id == Some(id))
            .ok_or_else(|| not_found(id))?;
        *row = faq.clone();
        row.id = Some(id);
        Ok(serde_json::to_value(&*row)?)
    }

    async fn delete_faq(&self, id: RecordId) -> Result<(), ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record(format!("delete_faq {}", id))?;
        s.faqs.retain(|f| f.id != Some(id));
        Ok(())
    }
}

#[derive(Default)]
struct ProjectState {
    rec: Recorder,
    tech_stack: Vec<String>,
    /// Every list sent to `update_tech_stack`, in order.
    tech_stack_puts: Vec<Vec<String>>,
    projects: Vec<Project>,
    dependencies: Vec<Dependency>,
}

#[derive(Clone, Default)]
pub struct FakeProjectApi {
    state: Arc<Mutex<ProjectState>>,
}

impl FakeProjectApi {
    pub fn with(tech_stack: Vec<String>, projects: Vec<Project>, dependencies: Vec<Dependency>) -> Self {
        let fake = Self::default();
        {
            let mut s = fake.state.lock().unwrap();
            s.tech_stack = tech_stack;
            s.projects = projects;
            s.dependencies = dependencies;
        }
        fake
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().rec.calls.clone()
    }

    pub fn fail_next(&self) {
        self.state.lock().unwrap().rec.fail_next = true;
    }

    pub fn tech_stack_puts(&self) -> Vec<Vec<String>> {
        self.state.lock().unwrap().tech_stack_puts.clone()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.state.lock().unwrap().projects.clone()
    }

    pub fn dependencies(&self) -> Vec<Dependency> {
        self.state.lock().unwrap().dependencies.clone()
    }
}

#[async_trait]
impl ProjectApi for FakeProjectApi {
    async fn get_tech_stack(&self) -> Result<Vec<String>, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record("get_tech_stack")?;
        Ok(s.tech_stack.clone())
    }

    async fn update_tech_stack(&self, tech_stack: &[String]) -> Result<Value, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record("update_tech_stack")?;
        s.tech_stack = tech_stack.to_vec();
        s.tech_stack_puts.push(tech_stack.to_vec());
        Ok(Value::Null)
    }

    async fn get_projects(&self) -> Result<Vec<Project>, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record("get_projects")?;
        Ok(s.projects.clone())
    }

    async fn get_project(&self, id: RecordId) -> Result<Project, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record(format!("get_project {}", id))?;
        s.projects
            .iter()
            .find(|p| p.id == Some(id))
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn add_project(&self, draft: &ProjectDraft) -> Result<Value, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record("add_project")?;
        let created = Project {
            id: Some(next_id(&s.projects, |p| p.id)),
            title: draft.title.clone(),
            url: draft.url.clone(),
            description: draft.description.clone(),
        };
        s.projects.push(created.clone());
        Ok(serde_json::to_value(&created)?)
    }

    async fn update_project(&self, id: RecordId, project: &Project) -> Result<Value, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record(format!("update_project {}", id))?;
        let row = s
            .projects
            .iter_mut()
            .find(|p| p.id == Some(id))
            .ok_or_else(|| not_found(id))?;
        *row = project.clone();
        row.id = Some(id);
        Ok(serde_json::to_value(&*row)?)
    }

    async fn delete_project(&self, id: RecordId) -> Result<(), ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record(format!("delete_project {}", id))?;
        s.projects.retain(|p| p.id != Some(id));
        Ok(())
    }

    async fn get_dependencies(&self) -> Result<Vec<Dependency>, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record("get_dependencies")?;
        Ok(s.dependencies.clone())
    }

    async fn update_dependencies(&self, dependencies: &[Dependency]) -> Result<Value, ClientError> {
        let mut s = self.state.lock().unwrap();
        s.rec.record("update_dependencies")?;
        s.dependencies = dependencies.to_vec();
        Ok(Value::Null)
    }
}
