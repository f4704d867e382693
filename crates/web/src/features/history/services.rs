use sqlx::PgPool;
use storage::{
    error::Result, models::PointHistoryRecord, repository::history::HistoryRepository,
};

/// Most recent point history across all participants
pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<PointHistoryRecord>> {
    let repo = HistoryRepository::new(pool);
    repo.list_recent(limit).await
}
