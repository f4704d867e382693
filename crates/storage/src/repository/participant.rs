use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::participant::{AdjustOutcome, MatchOutcome};
use crate::error::{Result, StorageError};
use crate::models::{MatchResult, Participant, PointSource};
use crate::repository::history::{NewHistoryEntry, append_history};
use crate::services::scoring;

const SELECT_COLUMNS: &str = "participant_id, name, search_name, total_points, category, \
     wins, losses, draws, active, created_at, last_updated";

pub struct ParticipantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All participants ordered by total points descending, optionally
    /// filtered by name prefix. Ranks are derived by the caller.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Participant>> {
        let mut query =
            QueryBuilder::new(format!("SELECT {SELECT_COLUMNS} FROM participants WHERE 1=1"));

        if let Some(term) = search {
            query.push(" AND search_name LIKE ");
            query.push_bind(format!("{}%", term.to_lowercase()));
        }

        query.push(" ORDER BY total_points DESC");

        let participants: Vec<Participant> = query.build_query_as().fetch_all(self.pool).await?;

        Ok(participants)
    }

    pub async fn find_optional(&self, id: Uuid) -> Result<Option<Participant>> {
        let participant = sqlx::query_as::<_, Participant>(&format!(
            "SELECT {SELECT_COLUMNS} FROM participants WHERE participant_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(participant)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Participant> {
        self.find_optional(id).await?.ok_or(StorageError::NotFound)
    }

    /// Creates a participant with zero points in the floor tier. Identity
    /// and timestamps are assigned by the store.
    pub async fn create(&self, name: &str) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(&format!(
            "INSERT INTO participants (name, search_name) VALUES ($1, $2) \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(name)
        .bind(name.to_lowercase())
        .fetch_one(self.pool)
        .await?;

        Ok(participant)
    }

    /// Records one competitive match result. The result type is validated
    /// before any store access. The participant update and the history
    /// append are two separate writes; a concurrent call against the same
    /// participant can race (lost update), which the store model accepts.
    pub async fn record_match_result(
        &self,
        id: Uuid,
        result_type: &str,
        admin_id: &str,
    ) -> Result<MatchOutcome> {
        let result: MatchResult = result_type.parse()?;
        let participant = self.find_by_id(id).await?;

        let update = scoring::score_match(&participant, result.as_str());
        self.apply_scored_update(self.pool, id, &update).await?;

        append_history(
            self.pool,
            &NewHistoryEntry {
                participant_id: id,
                participant_name: participant.name.clone(),
                point_source: PointSource::CompetitiveMatch,
                match_result: Some(result.as_str().to_string()),
                points_changed: update.points_added,
                previous_points: participant.total_points,
                new_points: update.new_points,
                previous_category: participant.category.clone(),
                new_category: update.new_category.to_string(),
                event_id: None,
                event_name: None,
                note: None,
                admin_id: admin_id.to_string(),
            },
        )
        .await?;

        Ok(MatchOutcome {
            previous_points: participant.total_points,
            new_points: update.new_points,
            previous_category: participant.category,
            new_category: update.new_category.to_string(),
            points_added: update.points_added,
        })
    }

    /// Manual, reason-annotated adjustment. The resulting total is clamped
    /// at zero. Read and write are separate calls, same accepted race as
    /// `record_match_result`.
    pub async fn adjust_points(
        &self,
        id: Uuid,
        delta: i32,
        reason: &str,
        admin_id: &str,
    ) -> Result<AdjustOutcome> {
        let participant = self.find_by_id(id).await?;

        let update = scoring::score_adjustment(&participant, delta);
        sqlx::query(
            "UPDATE participants SET total_points = $2, category = $3, last_updated = now() \
             WHERE participant_id = $1",
        )
        .bind(id)
        .bind(update.new_points)
        .bind(update.new_category)
        .execute(self.pool)
        .await?;

        append_history(
            self.pool,
            &NewHistoryEntry {
                participant_id: id,
                participant_name: participant.name.clone(),
                point_source: PointSource::Adjustment,
                match_result: None,
                points_changed: delta,
                previous_points: participant.total_points,
                new_points: update.new_points,
                previous_category: participant.category.clone(),
                new_category: update.new_category.to_string(),
                event_id: None,
                event_name: None,
                note: Some(reason.to_string()),
                admin_id: admin_id.to_string(),
            },
        )
        .await?;

        Ok(AdjustOutcome {
            previous_points: participant.total_points,
            new_points: update.new_points,
            previous_category: participant.category,
            new_category: update.new_category.to_string(),
        })
    }

    /// Toggles the active flag without touching points, counters, or
    /// history.
    pub async fn set_active(&self, id: Uuid, active: bool) -> Result<()> {
        let result = sqlx::query(
            "UPDATE participants SET active = $2, last_updated = now() \
             WHERE participant_id = $1",
        )
        .bind(id)
        .bind(active)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Removes the participant record outright. Associated history rows
    /// are intentionally left behind as an orphaned audit trail.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM participants WHERE participant_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub(crate) async fn apply_scored_update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        update: &scoring::ScoredUpdate,
    ) -> Result<()>
    where
        E: sqlx::PgExecutor<'e>,
    {
        sqlx::query(
            "UPDATE participants SET total_points = $2, category = $3, wins = $4, \
             losses = $5, draws = $6, last_updated = now() WHERE participant_id = $1",
        )
        .bind(id)
        .bind(update.new_points)
        .bind(update.new_category)
        .bind(update.wins)
        .bind(update.losses)
        .bind(update.draws)
        .execute(executor)
        .await?;

        Ok(())
    }
}
