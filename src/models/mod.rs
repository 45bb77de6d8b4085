//! Wire records exchanged with the backend.

mod project;
mod team;
mod work;

pub use project::{Dependency, Project, ProjectDraft, TechStackBody};
pub use team::{Bookmark, BookmarkDraft, Faq, FaqDraft, TeamDetails};
pub use work::{WorkDetails, WorkLocation};

/// Backend-assigned record id.
pub type RecordId = u64;

/// Records that carry a backend id once created.
pub trait Identified {
    fn id(&self) -> Option<RecordId>;
}
