#![allow(dead_code)]

use axum::Router;
use std::net::Ipv4Addr;
use team_portal::config::DEFAULT_BODY_LIMIT;
use team_portal::{app_router, AppState, HttpClient, MemoryStore};
use tokio::net::TcpListener;

/// Serve `store` on an ephemeral localhost port; returns the base URL.
pub async fn start_backend(store: MemoryStore) -> String {
    serve_router(app_router(AppState::new(store), DEFAULT_BODY_LIMIT)).await
}

/// Serve any router on an ephemeral localhost port; returns the base URL.
pub async fn serve_router(app: Router) -> String {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("dev backend error: {e}");
        }
    });
    format!("http://{}:{}", addr.ip(), addr.port())
}

pub async fn client_for(store: MemoryStore) -> HttpClient {
    let base = start_backend(store).await;
    HttpClient::with_base_url(&base).expect("client")
}

/// A base URL with nothing listening behind it.
pub async fn dead_base_url() -> String {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}:{}", addr.ip(), addr.port())
}
