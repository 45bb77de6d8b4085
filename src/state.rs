//! Shared state for the dev backend routes.

use crate::error::AppError;
use crate::store::MemoryStore;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<RwLock<MemoryStore>>,
}

impl AppState {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn read_store(&self) -> Result<RwLockReadGuard<'_, MemoryStore>, AppError> {
        self.store
            .read()
            .map_err(|_| AppError::Internal("store lock poisoned".into()))
    }

    pub fn write_store(&self) -> Result<RwLockWriteGuard<'_, MemoryStore>, AppError> {
        self.store
            .write()
            .map_err(|_| AppError::Internal("store lock poisoned".into()))
    }
}
