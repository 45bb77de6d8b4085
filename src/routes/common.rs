//! Common routes: health, version, and the resource directory.

use crate::resource::{Resource, ResourceKind};
use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ResourceEntry {
    path: String,
    kind: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn resources() -> Json<Vec<ResourceEntry>> {
    let entries = Resource::ALL
        .into_iter()
        .map(|r| ResourceEntry {
            path: r.path(),
            kind: match r.kind() {
                ResourceKind::Document => "document",
                ResourceKind::Collection => "collection",
            },
        })
        .collect();
    Json(entries)
}

/// GET /health, GET /version, GET /resources.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/resources", get(resources))
}
