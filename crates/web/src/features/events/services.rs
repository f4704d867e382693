use sqlx::PgPool;
use storage::{
    dto::tournament::{EventParticipantUpdate, EventResultEntry},
    error::Result,
    models::Tournament,
    repository::tournament::TournamentRepository,
};
use uuid::Uuid;

/// Record a batch of event results in one atomic commit
pub async fn record_event_results(
    pool: &PgPool,
    results: &[EventResultEntry],
    event_name: Option<&str>,
    admin_id: &str,
) -> Result<Vec<EventParticipantUpdate>> {
    let repo = TournamentRepository::new(pool);
    repo.record_event_results(results, event_name, admin_id).await
}

/// List recorded tournament events, newest first
pub async fn list_events(pool: &PgPool) -> Result<Vec<Tournament>> {
    let repo = TournamentRepository::new(pool);
    repo.list().await
}

/// Fetch one recorded tournament event
pub async fn get_event(pool: &PgPool, id: Uuid) -> Result<Tournament> {
    let repo = TournamentRepository::new(pool);
    repo.find_by_id(id).await
}
