use axum::{Router, routing::get, routing::post};

use crate::state::AppState;

use super::handlers;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_events))
        .route("/:id", get(handlers::get_event))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/", post(handlers::record_event))
}
