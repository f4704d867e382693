use sqlx::PgPool;
use storage::{
    dto::participant::{AdjustOutcome, MatchOutcome, ParticipantResponse},
    error::Result,
    models::{Participant, PointHistoryRecord},
    repository::{history::HistoryRepository, participant::ParticipantRepository},
    services::ranking::assign_ranks,
};
use uuid::Uuid;

/// One-shot ranked list. Store failures are logged and swallowed; the
/// caller gets an empty list instead of an error.
pub async fn list_participants(pool: &PgPool, search: Option<&str>) -> Vec<ParticipantResponse> {
    let repo = ParticipantRepository::new(pool);
    match repo.list(search).await {
        Ok(participants) => assign_ranks(participants),
        Err(err) => {
            tracing::error!("Error fetching participants: {err}");
            Vec::new()
        }
    }
}

/// Register a new participant
pub async fn create_participant(pool: &PgPool, name: &str) -> Result<Participant> {
    let repo = ParticipantRepository::new(pool);
    repo.create(name).await
}

/// Record a single competitive match result
pub async fn record_match_result(
    pool: &PgPool,
    id: Uuid,
    result_type: &str,
    admin_id: &str,
) -> Result<MatchOutcome> {
    let repo = ParticipantRepository::new(pool);
    repo.record_match_result(id, result_type, admin_id).await
}

/// Apply a manual point adjustment
pub async fn adjust_points(
    pool: &PgPool,
    id: Uuid,
    delta: i32,
    reason: &str,
    admin_id: &str,
) -> Result<AdjustOutcome> {
    let repo = ParticipantRepository::new(pool);
    repo.adjust_points(id, delta, reason, admin_id).await
}

/// Toggle a participant's active flag
pub async fn set_active(pool: &PgPool, id: Uuid, active: bool) -> Result<()> {
    let repo = ParticipantRepository::new(pool);
    repo.set_active(id, active).await
}

/// Permanently delete a participant; their history stays behind
pub async fn delete_participant(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = ParticipantRepository::new(pool);
    repo.delete(id).await
}

/// Point history for one participant, newest first
pub async fn participant_history(
    pool: &PgPool,
    id: Uuid,
    limit: i64,
) -> Result<Vec<PointHistoryRecord>> {
    let repo = HistoryRepository::new(pool);
    repo.list_for_participant(id, limit).await
}
