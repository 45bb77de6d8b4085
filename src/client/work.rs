use super::HttpClient;
use crate::error::ClientError;
use crate::models::WorkDetails;
use crate::resource::Resource;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait WorkDetailsApi: Send + Sync {
    async fn get_work_details(&self) -> Result<WorkDetails, ClientError>;
    async fn update_work_details(&self, details: &WorkDetails) -> Result<Value, ClientError>;
}

#[derive(Clone, Debug)]
pub struct WorkDetailsService {
    http: HttpClient,
}

impl WorkDetailsService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl WorkDetailsApi for WorkDetailsService {
    async fn get_work_details(&self) -> Result<WorkDetails, ClientError> {
        self.http.get(&Resource::WorkDetails.path()).await
    }

    async fn update_work_details(&self, details: &WorkDetails) -> Result<Value, ClientError> {
        self.http.put(&Resource::WorkDetails.path(), details).await
    }
}
