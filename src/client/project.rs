use super::HttpClient;
use crate::error::ClientError;
use crate::models::{Dependency, Project, ProjectDraft, RecordId, TechStackBody};
use crate::resource::Resource;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait ProjectApi: Send + Sync {
    async fn get_tech_stack(&self) -> Result<Vec<String>, ClientError>;
    /// Replaces the whole list. The response shape is backend-defined.
    async fn update_tech_stack(&self, tech_stack: &[String]) -> Result<Value, ClientError>;

    async fn get_projects(&self) -> Result<Vec<Project>, ClientError>;
    async fn get_project(&self, id: RecordId) -> Result<Project, ClientError>;
    async fn add_project(&self, draft: &ProjectDraft) -> Result<Value, ClientError>;
    async fn update_project(&self, id: RecordId, project: &Project) -> Result<Value, ClientError>;
    async fn delete_project(&self, id: RecordId) -> Result<(), ClientError>;

    async fn get_dependencies(&self) -> Result<Vec<Dependency>, ClientError>;
    async fn update_dependencies(&self, dependencies: &[Dependency]) -> Result<Value, ClientError>;
}

#[derive(Clone, Debug)]
pub struct ProjectService {
    http: HttpClient,
}

impl ProjectService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ProjectApi for ProjectService {
    async fn get_tech_stack(&self) -> Result<Vec<String>, ClientError> {
        self.http.get(&Resource::TechStack.path()).await
    }

    async fn update_tech_stack(&self, tech_stack: &[String]) -> Result<Value, ClientError> {
        let body = TechStackBody { tech_stack };
        self.http.put(&Resource::TechStack.path(), &body).await
    }

    async fn get_projects(&self) -> Result<Vec<Project>, ClientError> {
        self.http.get(&Resource::Projects.path()).await
    }

    async fn get_project(&self, id: RecordId) -> Result<Project, ClientError> {
        self.http.get(&Resource::Projects.item_path(id)).await
    }

    async fn add_project(&self, draft: &ProjectDraft) -> Result<Value, ClientError> {
        self.http.post(&Resource::Projects.path(), draft).await
    }

    async fn update_project(&self, id: RecordId, project: &Project) -> Result<Value, ClientError> {
        self.http.put(&Resource::Projects.item_path(id), project).await
    }

    async fn delete_project(&self, id: RecordId) -> Result<(), ClientError> {
        self.http.delete(&Resource::Projects.item_path(id)).await
    }

    async fn get_dependencies(&self) -> Result<Vec<Dependency>, ClientError> {
        self.http.get(&Resource::Dependencies.path()).await
    }

    async fn update_dependencies(&self, dependencies: &[Dependency]) -> Result<Value, ClientError> {
        self.http.put(&Resource::Dependencies.path(), dependencies).await
    }
}
