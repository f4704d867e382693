use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{PointHistoryRecord, PointSource};

const SELECT_COLUMNS: &str = "history_id, participant_id, participant_name, point_source, \
     match_result, points_changed, previous_points, new_points, previous_category, \
     new_category, event_id, event_name, note, admin_id, recorded_at";

/// A history row about to be appended. `recorded_at` is assigned by the
/// store.
#[derive(Debug, Clone)]
pub struct NewHistoryEntry {
    pub participant_id: Uuid,
    pub participant_name: String,
    pub point_source: PointSource,
    pub match_result: Option<String>,
    pub points_changed: i32,
    pub previous_points: i32,
    pub new_points: i32,
    pub previous_category: String,
    pub new_category: String,
    pub event_id: Option<Uuid>,
    pub event_name: Option<String>,
    pub note: Option<String>,
    pub admin_id: String,
}

/// Appends one audit row. Generic over the executor so the same insert
/// serves both direct pool writes and the event batch transaction.
pub(crate) async fn append_history<'e, E>(executor: E, entry: &NewHistoryEntry) -> Result<()>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query(
        r#"
        INSERT INTO point_history (
            participant_id, participant_name, point_source, match_result,
            points_changed, previous_points, new_points, previous_category,
            new_category, event_id, event_name, note, admin_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        "#,
    )
    .bind(entry.participant_id)
    .bind(&entry.participant_name)
    .bind(entry.point_source.as_str())
    .bind(&entry.match_result)
    .bind(entry.points_changed)
    .bind(entry.previous_points)
    .bind(entry.new_points)
    .bind(&entry.previous_category)
    .bind(&entry.new_category)
    .bind(entry.event_id)
    .bind(&entry.event_name)
    .bind(&entry.note)
    .bind(&entry.admin_id)
    .execute(executor)
    .await?;

    Ok(())
}

pub struct HistoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> HistoryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Audit trail for one participant, newest first. Still answers after
    /// the participant itself has been deleted.
    pub async fn list_for_participant(
        &self,
        participant_id: Uuid,
        limit: i64,
    ) -> Result<Vec<PointHistoryRecord>> {
        let records = sqlx::query_as::<_, PointHistoryRecord>(&format!(
            "SELECT {SELECT_COLUMNS} FROM point_history \
             WHERE participant_id = $1 ORDER BY recorded_at DESC LIMIT $2"
        ))
        .bind(participant_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }

    /// Most recent entries across all participants.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<PointHistoryRecord>> {
        let records = sqlx::query_as::<_, PointHistoryRecord>(&format!(
            "SELECT {SELECT_COLUMNS} FROM point_history ORDER BY recorded_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }
}
