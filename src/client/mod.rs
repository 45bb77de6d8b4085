//! Data services: one trait per page, backed by [`HttpClient`].

mod http;
mod project;
mod team;
mod work;

pub use http::HttpClient;
pub use project::{ProjectApi, ProjectService};
pub use team::{TeamApi, TeamService};
pub use work::{WorkDetailsApi, WorkDetailsService};
