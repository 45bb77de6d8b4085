//! HTTP handlers for the dev backend.

pub mod resource;
pub use resource::*;
