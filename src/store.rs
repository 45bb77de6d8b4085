//! In-memory JSON store behind the dev backend. Documents are single JSON
//! values; collections are id-keyed lists of JSON objects.

use crate::error::AppError;
use crate::models::RecordId;
use crate::resource::{Resource, ResourceKind};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

#[derive(Clone, Debug)]
pub struct MemoryStore {
    documents: HashMap<Resource, Value>,
    collections: HashMap<Resource, Vec<Value>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        let mut documents = HashMap::new();
        let mut collections = HashMap::new();
        for r in Resource::ALL {
            match r.kind() {
                ResourceKind::Document => {
                    documents.insert(r, r.empty_document());
                }
                ResourceKind::Collection => {
                    collections.insert(r, Vec::new());
                }
            }
        }
        Self {
            documents,
            collections,
        }
    }
}

fn record_id(value: &Value) -> Option<RecordId> {
    value.get("id").and_then(Value::as_u64)
}

fn into_object(body: Value, what: &str) -> Result<Map<String, Value>, AppError> {
    match body {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest(format!("{} body must be a JSON object", what))),
    }
}

impl MemoryStore {
    /// Build from a seed object whose keys are resource path segments.
    /// Unknown keys are skipped; seeded records without an id get one.
    pub fn from_seed(seed: Value) -> Result<Self, AppError> {
        let seed = match seed {
            Value::Object(m) => m,
            _ => return Err(AppError::Seed("seed must be a JSON object".into())),
        };
        let mut store = Self::default();
        for (key, value) in seed {
            let Some(resource) = Resource::from_segment(&key) else {
                warn!(key = %key, "skipping unknown seed key");
                continue;
            };
            match resource.kind() {
                ResourceKind::Document => {
                    store.documents.insert(resource, value);
                }
                ResourceKind::Collection => {
                    let Value::Array(items) = value else {
                        return Err(AppError::Seed(format!("{} must be an array", key)));
                    };
                    for item in items {
                        let mut obj = into_object(item, &key).map_err(|e| AppError::Seed(e.to_string()))?;
                        let rows = store.rows_mut(resource)?;
                        let id = match obj.get("id").and_then(Value::as_u64) {
                            Some(id) => id,
                            None => next_id(resource, rows).map_err(|e| AppError::Seed(e.to_string()))?,
                        };
                        obj.insert("id".into(), Value::from(id));
                        rows.push(Value::Object(obj));
                    }
                }
            }
        }
        Ok(store)
    }

    pub async fn load_seed(path: &Path) -> Result<Self, AppError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::Seed(format!("{}: {}", path.display(), e)))?;
        let seed: Value = serde_json::from_str(&text)
            .map_err(|e| AppError::Seed(format!("{}: {}", path.display(), e)))?;
        let store = Self::from_seed(seed)?;
        info!(path = %path.display(), "loaded seed data");
        Ok(store)
    }

    pub fn document(&self, resource: Resource) -> Result<Value, AppError> {
        self.documents
            .get(&resource)
            .cloned()
            .ok_or_else(|| AppError::NotFound(resource.path_segment().into()))
    }

    /// Replace a whole document, unwrapping the body where the resource
    /// expects a wrapper key. Returns the stored value.
    pub fn replace_document(&mut self, resource: Resource, body: Value) -> Result<Value, AppError> {
        let value = match resource.put_wrapper() {
            Some(key) => {
                let mut obj = into_object(body, resource.path_segment())?;
                obj.remove(key)
                    .ok_or_else(|| AppError::BadRequest(format!("body must contain '{}'", key)))?
            }
            None => body,
        };
        let expected_shape_ok = match resource.empty_document() {
            Value::Array(_) => value.is_array(),
            Value::Object(_) => value.is_object(),
            _ => true,
        };
        if !expected_shape_ok {
            return Err(AppError::BadRequest(format!(
                "{} has the wrong JSON shape",
                resource.path_segment()
            )));
        }
        let slot = self
            .documents
            .get_mut(&resource)
            .ok_or_else(|| AppError::NotFound(resource.path_segment().into()))?;
        *slot = value.clone();
        Ok(value)
    }

    pub fn list(&self, resource: Resource) -> Result<Vec<Value>, AppError> {
        self.collections
            .get(&resource)
            .cloned()
            .ok_or_else(|| AppError::NotFound(resource.path_segment().into()))
    }

    pub fn get(&self, resource: Resource, id: RecordId) -> Result<Value, AppError> {
        self.collections
            .get(&resource)
            .and_then(|rows| rows.iter().find(|r| record_id(r) == Some(id)))
            .cloned()
            .ok_or_else(|| not_found(resource, id))
    }

    /// Insert with a fresh id; any client-sent id is replaced.
    pub fn create(&mut self, resource: Resource, body: Value) -> Result<Value, AppError> {
        let mut obj = into_object(body, resource.path_segment())?;
        let rows = self.rows_mut(resource)?;
        obj.insert("id".into(), Value::from(next_id(resource, rows)?));
        let created = Value::Object(obj);
        rows.push(created.clone());
        Ok(created)
    }

    /// Replace the record with `id`, keeping the id.
    pub fn update(&mut self, resource: Resource, id: RecordId, body: Value) -> Result<Value, AppError> {
        let mut obj = into_object(body, resource.path_segment())?;
        obj.insert("id".into(), Value::from(id));
        let row = self
            .rows_mut(resource)?
            .iter_mut()
            .find(|r| record_id(r) == Some(id))
            .ok_or_else(|| not_found(resource, id))?;
        *row = Value::Object(obj);
        Ok(row.clone())
    }

    pub fn delete(&mut self, resource: Resource, id: RecordId) -> Result<Value, AppError> {
        let rows = self.rows_mut(resource)?;
        let pos = rows
            .iter()
            .position(|r| record_id(r) == Some(id))
            .ok_or_else(|| not_found(resource, id))?;
        Ok(rows.remove(pos))
    }

    fn rows_mut(&mut self, resource: Resource) -> Result<&mut Vec<Value>, AppError> {
        self.collections
            .get_mut(&resource)
            .ok_or_else(|| AppError::NotFound(resource.path_segment().into()))
    }
}

/// One past the highest id in use; an exhausted id space is refused.
fn next_id(resource: Resource, rows: &[Value]) -> Result<RecordId, AppError> {
    rows.iter()
        .filter_map(record_id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| AppError::BadRequest(format!("{} has no ids left", resource.path_segment())))
}

fn not_found(resource: Resource, id: RecordId) -> AppError {
    AppError::NotFound(format!("{}/{}", resource.path_segment(), id))
}
