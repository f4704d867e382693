use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// One submitted result within a batched event.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResultEntry {
    pub participant_id: Uuid,
    pub participant_name: Option<String>,
    /// Free-form result string; only `win`/`loss`/`draw` award points.
    pub result: String,
}

/// Request payload for recording a batch of event results atomically
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordEventRequest {
    #[validate(length(max = 200))]
    pub event_name: Option<String>,

    pub results: Vec<EventResultEntry>,

    #[validate(length(min = 1, max = 120, message = "Admin id is required"))]
    pub admin_id: String,
}

/// Applied update for one participant within a batched event. Entries
/// whose participant did not exist are skipped and never appear here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventParticipantUpdate {
    pub participant_id: Uuid,
    pub name: String,
    pub result: String,
    pub points_added: i32,
    pub previous_points: i32,
    pub new_points: i32,
    pub previous_category: String,
    pub new_category: String,
}
