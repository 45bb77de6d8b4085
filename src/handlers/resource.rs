//! Resource handlers: documents (GET/PUT on the root) and collections
//! (list/create on the root, read/update/delete by id).

use crate::error::AppError;
use crate::models::RecordId;
use crate::resource::{Resource, ResourceKind};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    Json,
};
use serde_json::Value;
use tracing::debug;

fn resolve(segment: &str) -> Result<Resource, AppError> {
    Resource::from_segment(segment).ok_or_else(|| AppError::NotFound(segment.to_string()))
}

fn resolve_collection(segment: &str, verb: &str) -> Result<Resource, AppError> {
    let resource = resolve(segment)?;
    if resource.kind() != ResourceKind::Collection {
        return Err(AppError::MethodNotAllowed(format!("{} /{}/:id", verb, segment)));
    }
    Ok(resource)
}

fn parse_id(id_str: &str) -> Result<RecordId, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

/// GET /:segment: the document, or the whole collection.
pub async fn read_root(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> Result<Json<Value>, AppError> {
    let resource = resolve(&segment)?;
    let store = state.read_store()?;
    let body = match resource.kind() {
        ResourceKind::Document => store.document(resource)?,
        ResourceKind::Collection => Value::Array(store.list(resource)?),
    };
    Ok(Json(body))
}

/// POST /:segment (collections only).
pub async fn create(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let resource = resolve(&segment)?;
    if resource.kind() != ResourceKind::Collection {
        return Err(AppError::MethodNotAllowed(format!("POST /{}", segment)));
    }
    let created = state.write_store()?.create(resource, body)?;
    debug!(resource = %segment, id = ?created.get("id"), "created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /:segment replaces a whole document.
pub async fn replace_root(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let resource = resolve(&segment)?;
    if resource.kind() != ResourceKind::Document {
        return Err(AppError::MethodNotAllowed(format!("PUT /{}", segment)));
    }
    let stored = state.write_store()?.replace_document(resource, body)?;
    debug!(resource = %segment, "replaced document");
    Ok(Json(stored))
}

pub async fn read_item(
    State(state): State<AppState>,
    Path((segment, id_str)): Path<(String, String)>,
) -> Result<Json<Value>, AppError> {
    let resource = resolve_collection(&segment, "GET")?;
    let id = parse_id(&id_str)?;
    let row = state.read_store()?.get(resource, id)?;
    Ok(Json(row))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path((segment, id_str)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let resource = resolve_collection(&segment, "PUT")?;
    let id = parse_id(&id_str)?;
    let row = state.write_store()?.update(resource, id, body)?;
    debug!(resource = %segment, id, "updated");
    Ok(Json(row))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path((segment, id_str)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let resource = resolve_collection(&segment, "DELETE")?;
    let id = parse_id(&id_str)?;
    state.write_store()?.delete(resource, id)?;
    debug!(resource = %segment, id, "deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Any verb a resource path does not route.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{} {}", method, uri.path()))
}
