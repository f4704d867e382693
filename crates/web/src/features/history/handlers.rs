use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{Database, dto::history::HistoryQuery, models::PointHistoryRecord};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/history",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Most recent point history entries", body = Vec<PointHistoryRecord>)
    ),
    tag = "history"
)]
pub async fn list_history(
    State(db): State<Database>,
    Query(query): Query<HistoryQuery>,
) -> Result<Response, WebError> {
    let records = services::list_recent(db.pool(), query.limit()).await?;

    Ok(Json(records).into_response())
}
