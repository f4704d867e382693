use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::handlers;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_participants))
        .route("/live", get(handlers::live_participants))
        .route("/:id/history", get(handlers::participant_history))
}

/// Mutating routes, mounted under the API-key-guarded admin scope.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_participant))
        .route("/:id", delete(handlers::delete_participant))
        .route("/:id/results", post(handlers::record_match_result))
        .route("/:id/adjustments", post(handlers::adjust_points))
        .route("/:id/deactivate", post(handlers::deactivate_participant))
        .route("/:id/reactivate", post(handlers::reactivate_participant))
}
