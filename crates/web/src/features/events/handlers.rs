use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::tournament::{EventParticipantUpdate, RecordEventRequest},
    models::Tournament,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/admin/events",
    request_body = RecordEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Event recorded atomically; entries for unknown participants are skipped", body = Vec<EventParticipantUpdate>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "events"
)]
pub async fn record_event(
    State(db): State<Database>,
    Json(req): Json<RecordEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let updates = services::record_event_results(
        db.pool(),
        &req.results,
        req.event_name.as_deref(),
        &req.admin_id,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(updates)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "Recorded tournament events, newest first", body = Vec<Tournament>)
    ),
    tag = "events"
)]
pub async fn list_events(State(db): State<Database>) -> Result<Response, WebError> {
    let events = services::list_events(db.pool()).await?;

    Ok(Json(events).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Tournament event id")
    ),
    responses(
        (status = 200, description = "Tournament event found", body = Tournament),
        (status = 404, description = "Tournament event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let event = services::get_event(db.pool(), id).await?;

    Ok(Json(event).into_response())
}
