use axum::{Router, routing::get};

use crate::state::AppState;

use super::handlers;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::list_history))
}
