//! Resource routes. Parameterized paths; handlers resolve the resource by segment.

use crate::handlers::resource::{
    create, delete_item, method_not_allowed, read_item, read_root, replace_root, update_item,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/:segment",
            get(read_root)
                .post(create)
                .put(replace_root)
                .fallback(method_not_allowed),
        )
        .route(
            "/:segment/:id",
            get(read_item)
                .put(update_item)
                .delete(delete_item)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}
