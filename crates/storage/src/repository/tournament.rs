use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::dto::tournament::{EventParticipantUpdate, EventResultEntry};
use crate::error::{Result, StorageError};
use crate::models::{EventResultLine, PointSource, Tournament};
use crate::repository::history::{NewHistoryEntry, append_history};
use crate::repository::participant::ParticipantRepository;
use crate::services::scoring;

const SELECT_COLUMNS: &str =
    "tournament_id, name, event_date, results, admin_id, created_at";

const DEFAULT_EVENT_NAME: &str = "Competitive Event";

pub struct TournamentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TournamentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Tournament>> {
        let tournaments = sqlx::query_as::<_, Tournament>(&format!(
            "SELECT {SELECT_COLUMNS} FROM tournaments ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(tournaments)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(&format!(
            "SELECT {SELECT_COLUMNS} FROM tournaments WHERE tournament_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(tournament)
    }

    /// Records a batch of match results as one event. Each entry's current
    /// state is read up front (without locking); entries referencing a
    /// nonexistent participant are silently skipped. All staged participant
    /// updates, their history rows, and the event record itself commit in a
    /// single transaction: either the whole batch applies or none of it.
    pub async fn record_event_results(
        &self,
        results: &[EventResultEntry],
        event_name: Option<&str>,
        admin_id: &str,
    ) -> Result<Vec<EventParticipantUpdate>> {
        // The event id exists before the batch so history rows can carry it.
        let event_id = Uuid::new_v4();
        let participant_repo = ParticipantRepository::new(self.pool);

        let mut staged = Vec::new();
        let mut updates = Vec::new();

        for entry in results {
            let Some(participant) = participant_repo.find_optional(entry.participant_id).await?
            else {
                continue;
            };

            let update = scoring::score_match(&participant, &entry.result);

            staged.push((
                entry.participant_id,
                update.clone(),
                NewHistoryEntry {
                    participant_id: entry.participant_id,
                    participant_name: participant.name.clone(),
                    point_source: PointSource::CompetitiveEvent,
                    match_result: Some(entry.result.clone()),
                    points_changed: update.points_added,
                    previous_points: participant.total_points,
                    new_points: update.new_points,
                    previous_category: participant.category.clone(),
                    new_category: update.new_category.to_string(),
                    event_id: Some(event_id),
                    event_name: event_name.map(str::to_string),
                    note: None,
                    admin_id: admin_id.to_string(),
                },
            ));

            updates.push(EventParticipantUpdate {
                participant_id: entry.participant_id,
                name: participant.name,
                result: entry.result.clone(),
                points_added: update.points_added,
                previous_points: participant.total_points,
                new_points: update.new_points,
                previous_category: participant.category,
                new_category: update.new_category.to_string(),
            });
        }

        let mut tx = self.pool.begin().await?;

        for (participant_id, update, history) in &staged {
            participant_repo
                .apply_scored_update(&mut *tx, *participant_id, update)
                .await?;
            append_history(&mut *tx, history).await?;
        }

        // The event record carries the submission as received, skipped
        // entries included.
        let lines: Vec<EventResultLine> = results
            .iter()
            .map(|entry| EventResultLine {
                participant_id: entry.participant_id,
                participant_name: entry.participant_name.clone(),
                result: entry.result.clone(),
            })
            .collect();

        sqlx::query(
            "INSERT INTO tournaments (tournament_id, name, results, admin_id) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(event_id)
        .bind(event_name.unwrap_or(DEFAULT_EVENT_NAME))
        .bind(Json(lines))
        .bind(admin_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(updates)
    }
}
