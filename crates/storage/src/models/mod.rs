pub mod participant;
pub mod point_history;
pub mod tier;
pub mod tournament;

pub use participant::{MatchResult, Participant};
pub use point_history::{PointHistoryRecord, PointSource};
pub use tier::{TIER_THRESHOLDS, Tier};
pub use tournament::{EventResultLine, Tournament};
