use serde::{Deserialize, Serialize};

/// The single work-details document. Field names follow the backend's
/// capitalised keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDetails {
    #[serde(default)]
    pub unity: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Escalate", default)]
    pub escalate: String,
    #[serde(rename = "WorkLocation", default)]
    pub work_location: Vec<WorkLocation>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLocation {
    #[serde(default)]
    pub place: String,
    #[serde(default)]
    pub time: String,
}

impl WorkLocation {
    pub fn new(place: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            place: place.into(),
            time: time.into(),
        }
    }
}
