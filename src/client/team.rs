use super::HttpClient;
use crate::error::ClientError;
use crate::models::{Bookmark, BookmarkDraft, Faq, FaqDraft, RecordId, TeamDetails};
use crate::resource::Resource;
use async_trait::async_trait;
use serde_json::Value;

/// Writes hand back the raw response body; backends may answer with an
/// empty 2xx, which reads as `Value::Null`.
#[async_trait]
pub trait TeamApi: Send + Sync {
    async fn get_team_details(&self) -> Result<TeamDetails, ClientError>;
    async fn update_team_details(&self, details: &TeamDetails) -> Result<Value, ClientError>;

    async fn get_bookmarks(&self) -> Result<Vec<Bookmark>, ClientError>;
    async fn get_bookmark(&self, id: RecordId) -> Result<Bookmark, ClientError>;
    async fn add_bookmark(&self, draft: &BookmarkDraft) -> Result<Value, ClientError>;
    async fn update_bookmark(&self, id: RecordId, bookmark: &Bookmark) -> Result<Value, ClientError>;
    async fn delete_bookmark(&self, id: RecordId) -> Result<(), ClientError>;

    async fn get_faqs(&self) -> Result<Vec<Faq>, ClientError>;
    async fn get_faq(&self, id: RecordId) -> Result<Faq, ClientError>;
    async fn add_faq(&self, draft: &FaqDraft) -> Result<Value, ClientError>;
    async fn update_faq(&self, id: RecordId, faq: &Faq) -> Result<Value, ClientError>;
    async fn delete_faq(&self, id: RecordId) -> Result<(), ClientError>;
}

#[derive(Clone, Debug)]
pub struct TeamService {
    http: HttpClient,
}

impl TeamService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl TeamApi for TeamService {
    async fn get_team_details(&self) -> Result<TeamDetails, ClientError> {
        self.http.get(&Resource::TeamDetails.path()).await
    }

    async fn update_team_details(&self, details: &TeamDetails) -> Result<Value, ClientError> {
        self.http.put(&Resource::TeamDetails.path(), details).await
    }

    async fn get_bookmarks(&self) -> Result<Vec<Bookmark>, ClientError> {
        self.http.get(&Resource::Bookmarks.path()).await
    }

    async fn get_bookmark(&self, id: RecordId) -> Result<Bookmark, ClientError> {
        self.http.get(&Resource::Bookmarks.item_path(id)).await
    }

    async fn add_bookmark(&self, draft: &BookmarkDraft) -> Result<Value, ClientError> {
        self.http.post(&Resource::Bookmarks.path(), draft).await
    }

    async fn update_bookmark(&self, id: RecordId, bookmark: &Bookmark) -> Result<Value, ClientError> {
        self.http.put(&Resource::Bookmarks.item_path(id), bookmark).await
    }

    async fn delete_bookmark(&self, id: RecordId) -> Result<(), ClientError> {
        self.http.delete(&Resource::Bookmarks.item_path(id)).await
    }

    async fn get_faqs(&self) -> Result<Vec<Faq>, ClientError> {
        self.http.get(&Resource::Faqs.path()).await
    }

    async fn get_faq(&self, id: RecordId) -> Result<Faq, ClientError> {
        self.http.get(&Resource::Faqs.item_path(id)).await
    }

    async fn add_faq(&self, draft: &FaqDraft) -> Result<Value, ClientError> {
        self.http.post(&Resource::Faqs.path(), draft).await
    }

    async fn update_faq(&self, id: RecordId, faq: &Faq) -> Result<Value, ClientError> {
        self.http.put(&Resource::Faqs.item_path(id), faq).await
    }

    async fn delete_faq(&self, id: RecordId) -> Result<(), ClientError> {
        self.http.delete(&Resource::Faqs.item_path(id)).await
    }
}
