use std::convert::Infallible;
use std::time::Duration;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use storage::{
    Database,
    dto::{
        history::HistoryQuery,
        participant::{
            AdjustOutcome, AdjustPointsRequest, CreateParticipantRequest, MatchOutcome,
            ParticipantListQuery, ParticipantResponse, RecordMatchRequest,
        },
    },
    models::PointHistoryRecord,
    services::live_feed,
};
use tokio_stream::{Stream, StreamExt, wrappers::WatchStream};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/participants",
    params(ParticipantListQuery),
    responses(
        (status = 200, description = "Ranked participant list (empty on store failure)", body = Vec<ParticipantResponse>)
    ),
    tag = "participants"
)]
pub async fn list_participants(
    State(db): State<Database>,
    Query(query): Query<ParticipantListQuery>,
) -> Json<Vec<ParticipantResponse>> {
    let participants = services::list_participants(db.pool(), query.search.as_deref()).await;

    Json(participants)
}

#[utoipa::path(
    get,
    path = "/api/participants/live",
    responses(
        (status = 200, description = "Server-sent event stream of ranked participant snapshots"),
        (status = 500, description = "Subscription could not be opened")
    ),
    tag = "participants"
)]
pub async fn live_participants(
    State(db): State<Database>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, WebError> {
    let feed = live_feed::subscribe_to_participants(&db).await?;

    let stream = WatchStream::new(feed.receiver()).map(move |snapshot| {
        // The feed moves into the stream so the subscription lives exactly
        // as long as the client connection.
        let _ = &feed;
        let payload = serde_json::to_string(&snapshot).unwrap_or_else(|_| "[]".to_string());
        Ok(Event::default().event("participants").data(payload))
    });

    Ok(Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    ))
}

#[utoipa::path(
    get,
    path = "/api/participants/{id}/history",
    params(
        ("id" = Uuid, Path, description = "Participant id"),
        HistoryQuery
    ),
    responses(
        (status = 200, description = "Point history for the participant, newest first; answers even after the participant was deleted", body = Vec<PointHistoryRecord>)
    ),
    tag = "participants"
)]
pub async fn participant_history(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Query(query): Query<HistoryQuery>,
) -> Result<Response, WebError> {
    let records = services::participant_history(db.pool(), id, query.limit()).await?;

    Ok(Json(records).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/participants",
    request_body = CreateParticipantRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Participant created successfully", body = ParticipantResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "participants"
)]
pub async fn create_participant(
    State(db): State<Database>,
    Json(req): Json<CreateParticipantRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let participant = services::create_participant(db.pool(), &req.name).await?;

    Ok((StatusCode::CREATED, Json(ParticipantResponse::from(participant))).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/participants/{id}/results",
    params(
        ("id" = Uuid, Path, description = "Participant id")
    ),
    request_body = RecordMatchRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Match result recorded", body = MatchOutcome),
        (status = 400, description = "Invalid result type"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn record_match_result(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<RecordMatchRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let outcome =
        services::record_match_result(db.pool(), id, &req.result, &req.admin_id).await?;

    Ok(Json(outcome).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/participants/{id}/adjustments",
    params(
        ("id" = Uuid, Path, description = "Participant id")
    ),
    request_body = AdjustPointsRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Points adjusted; totals are clamped at zero", body = AdjustOutcome),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn adjust_points(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<AdjustPointsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let outcome =
        services::adjust_points(db.pool(), id, req.delta, &req.reason, &req.admin_id).await?;

    Ok(Json(outcome).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/participants/{id}/deactivate",
    params(
        ("id" = Uuid, Path, description = "Participant id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Participant deactivated"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn deactivate_participant(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::set_active(db.pool(), id, false).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/participants/{id}/reactivate",
    params(
        ("id" = Uuid, Path, description = "Participant id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Participant reactivated"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn reactivate_participant(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::set_active(db.pool(), id, true).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/participants/{id}",
    params(
        ("id" = Uuid, Path, description = "Participant id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Participant permanently deleted; history is retained"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn delete_participant(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_participant(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
