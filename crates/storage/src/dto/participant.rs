use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::tier::color_for_tier;

/// Participant as served to clients, with the derived rank attached.
/// Rank is only populated by ranked-list reads; point reads carry `None`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantResponse {
    pub participant_id: Uuid,
    pub name: String,
    pub total_points: i32,
    pub category: String,
    pub category_color: String,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub active: bool,
    pub rank: Option<i32>,
    pub created_at: NaiveDateTime,
    pub last_updated: NaiveDateTime,
}

impl From<crate::models::Participant> for ParticipantResponse {
    fn from(participant: crate::models::Participant) -> Self {
        let category_color = color_for_tier(&participant.category).to_string();
        Self {
            participant_id: participant.participant_id,
            name: participant.name,
            total_points: participant.total_points,
            category: participant.category,
            category_color,
            wins: participant.wins,
            losses: participant.losses,
            draws: participant.draws,
            active: participant.active,
            rank: None,
            created_at: participant.created_at,
            last_updated: participant.last_updated,
        }
    }
}

/// Request payload for registering a new participant
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateParticipantRequest {
    #[validate(length(min = 1, max = 120, message = "Name must be between 1 and 120 characters"))]
    pub name: String,
}

/// Request payload for recording a single competitive match result
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordMatchRequest {
    /// One of `win`, `loss`, `draw`.
    pub result: String,

    #[validate(length(min = 1, max = 120, message = "Admin id is required"))]
    pub admin_id: String,
}

/// Before/after summary of a recorded match result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchOutcome {
    pub previous_points: i32,
    pub new_points: i32,
    pub previous_category: String,
    pub new_category: String,
    pub points_added: i32,
}

/// Request payload for a manual, reason-annotated point adjustment
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AdjustPointsRequest {
    /// Signed point delta; the resulting total is clamped at zero.
    pub delta: i32,

    #[validate(length(min = 1, max = 500, message = "Reason must be between 1 and 500 characters"))]
    pub reason: String,

    #[validate(length(min = 1, max = 120, message = "Admin id is required"))]
    pub admin_id: String,
}

/// Before/after summary of a manual adjustment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdjustOutcome {
    pub previous_points: i32,
    pub new_points: i32,
    pub previous_category: String,
    pub new_category: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ParticipantListQuery {
    /// Case-insensitive name prefix filter.
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let req = CreateParticipantRequest { name: String::new() };
        assert!(req.validate().is_err());
    }

    #[test]
    fn reasonable_name_passes_validation() {
        let req = CreateParticipantRequest { name: "Marta".to_string() };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn adjustment_requires_a_reason_and_admin() {
        let req = AdjustPointsRequest {
            delta: -5,
            reason: String::new(),
            admin_id: "admin-1".to_string(),
        };
        assert!(req.validate().is_err());

        let req = AdjustPointsRequest {
            delta: -5,
            reason: "score correction".to_string(),
            admin_id: String::new(),
        };
        assert!(req.validate().is_err());
    }
}
