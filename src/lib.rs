//! Team portal: admin pages for work details, team details and project
//! records, backed by a REST API, plus an in-memory dev backend for that API.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod pages;
pub mod resource;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;
pub mod view;

pub use client::{
    HttpClient, ProjectApi, ProjectService, TeamApi, TeamService, WorkDetailsApi, WorkDetailsService,
};
pub use config::{ClientConfig, ServerConfig};
pub use error::{ActionError, ActionResult, AppError, ClientError, ConfigError};
pub use logging::init_tracing;
pub use pages::{Loadable, Notice, ProjectPage, TeamPage, WorkDetailsPage};
pub use resource::Resource;
pub use routes::{app_router, common_routes, resource_routes};
pub use server::{build_state, serve};
pub use state::AppState;
pub use store::MemoryStore;
pub use view::{PageView, Render};
