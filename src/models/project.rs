use super::{Identified, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub url: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    #[serde(default)]
    pub team_dependency: Vec<String>,
    #[serde(default)]
    pub tech_team_dependency: Vec<String>,
}

/// PUT body for `/techstack`; the list travels wrapped.
#[derive(Debug, Serialize, Deserialize)]
pub struct TechStackBody<T> {
    #[serde(rename = "techStack")]
    pub tech_stack: T,
}

impl Identified for Project {
    fn id(&self) -> Option<RecordId> {
        self.id
    }
}
