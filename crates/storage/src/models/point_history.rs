use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Append-only audit entry for a point-changing operation. Never mutated
/// or deleted, and kept even after its participant is removed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PointHistoryRecord {
    pub history_id: Uuid,
    pub participant_id: Uuid,
    pub participant_name: String,
    pub point_source: String,
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
    pub recorded_at: NaiveDateTime,
}

/// Where a point change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PointSource {
    CompetitiveMatch,
    CompetitiveEvent,
    Adjustment,
}

impl PointSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompetitiveMatch => "competitive-match",
            Self::CompetitiveEvent => "competitive-event",
            Self::Adjustment => "adjustment",
        }
    }
}
