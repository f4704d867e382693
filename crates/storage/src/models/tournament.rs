use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A recorded batch submission of match results. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Tournament {
    pub tournament_id: Uuid,
    pub name: String,
    pub event_date: NaiveDateTime,
    #[schema(value_type = Vec<EventResultLine>)]
    pub results: sqlx::types::Json<Vec<EventResultLine>>,
    pub admin_id: String,
    pub created_at: NaiveDateTime,
}

/// One line of a tournament submission, stored verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResultLine {
    pub participant_id: Uuid,
    pub participant_name: Option<String>,
    pub result: String,
}
