//! The fixed REST surface: one path segment per resource.

use serde_json::{json, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    WorkDetails,
    TeamDetails,
    Bookmarks,
    Faqs,
    TechStack,
    Projects,
    Dependencies,
}

/// How a resource is addressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    /// Single document: GET returns it, PUT replaces it.
    Document,
    /// Id-keyed list: list/create on the root, read/update/delete by id.
    Collection,
}

impl Resource {
    pub const ALL: [Resource; 7] = [
        Resource::WorkDetails,
        Resource::TeamDetails,
        Resource::Bookmarks,
        Resource::Faqs,
        Resource::TechStack,
        Resource::Projects,
        Resource::Dependencies,
    ];

    pub fn path_segment(self) -> &'static str {
        match self {
            Resource::WorkDetails => "work-details",
            Resource::TeamDetails => "team-details",
            Resource::Bookmarks => "bookmarks",
            Resource::Faqs => "faqs",
            Resource::TechStack => "techstack",
            Resource::Projects => "projects",
            Resource::Dependencies => "dependencies",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path_segment() == segment)
    }

    pub fn kind(self) -> ResourceKind {
        match self {
            Resource::Bookmarks | Resource::Faqs | Resource::Projects => ResourceKind::Collection,
            _ => ResourceKind::Document,
        }
    }

    /// Key the PUT body is wrapped under, if any.
    pub fn put_wrapper(self) -> Option<&'static str> {
        match self {
            Resource::TechStack => Some("techStack"),
            _ => None,
        }
    }

    /// Document content before anything has been saved.
    pub fn empty_document(self) -> Value {
        match self {
            Resource::WorkDetails => json!({
                "unity": "",
                "Email": "",
                "Escalate": "",
                "WorkLocation": []
            }),
            Resource::TeamDetails => json!({"teamName": "", "productFocus": ""}),
            _ => json!([]),
        }
    }

    /// `/segment`
    pub fn path(self) -> String {
        format!("/{}", self.path_segment())
    }

    /// `/segment/{id}`
    pub fn item_path(self, id: crate::models::RecordId) -> String {
        format!("/{}/{}", self.path_segment(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_round_trip() {
        for r in Resource::ALL {
            assert_eq!(Resource::from_segment(r.path_segment()), Some(r));
        }
        assert_eq!(Resource::from_segment("users"), None);
    }

    #[test]
    fn only_id_keyed_resources_are_collections() {
        let collections: Vec<_> = Resource::ALL
            .into_iter()
            .filter(|r| r.kind() == ResourceKind::Collection)
            .collect();
        assert_eq!(
            collections,
            vec![Resource::Bookmarks, Resource::Faqs, Resource::Projects]
        );
    }

    #[test]
    fn item_path_includes_id() {
        assert_eq!(Resource::Faqs.item_path(7), "/faqs/7");
        assert_eq!(Resource::WorkDetails.path(), "/work-details");
    }
}
