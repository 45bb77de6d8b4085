//! Dev backend runner: seed the store, bind, serve.

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::routes::app_router;
use crate::state::AppState;
use crate::store::MemoryStore;
use tokio::net::TcpListener;

/// Fresh state, seeded from `config.seed_path` when set.
pub async fn build_state(config: &ServerConfig) -> Result<AppState, AppError> {
    let store = match &config.seed_path {
        Some(path) => MemoryStore::load_seed(path).await?,
        None => MemoryStore::default(),
    };
    Ok(AppState::new(store))
}

pub async fn serve(config: &ServerConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let state = build_state(config).await?;
    let app = app_router(state, config.body_limit);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
