use crate::models::tier::tier_from_points;
use crate::models::{MatchResult, Participant};

/// Points awarded for a competitive match result. Total over arbitrary
/// strings: anything outside win/loss/draw awards nothing.
pub fn points_for_result(result: &str) -> i32 {
    match result {
        "win" => 3,
        "draw" => 1,
        "loss" => 0,
        _ => 0,
    }
}

/// The participant-side effect of one match result: new total and category
/// plus the three counters with exactly the matching one incremented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredUpdate {
    pub points_added: i32,
    pub new_points: i32,
    pub new_category: &'static str,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
}

/// Lenient on the result string so batched submissions behave like the
/// single-match path for valid results and award nothing otherwise; the
/// single-match path validates the string before calling this.
pub fn score_match(participant: &Participant, result: &str) -> ScoredUpdate {
    let points_added = points_for_result(result);
    let new_points = participant.total_points + points_added;

    let mut wins = participant.wins;
    let mut losses = participant.losses;
    let mut draws = participant.draws;
    match result.parse::<MatchResult>() {
        Ok(MatchResult::Win) => wins += 1,
        Ok(MatchResult::Loss) => losses += 1,
        Ok(MatchResult::Draw) => draws += 1,
        Err(_) => {}
    }

    ScoredUpdate {
        points_added,
        new_points,
        new_category: tier_from_points(new_points).label,
        wins,
        losses,
        draws,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustedUpdate {
    pub new_points: i32,
    pub new_category: &'static str,
}

/// Manual adjustment; the only path that clamps, so a negative delta can
/// never push a total below zero.
pub fn score_adjustment(participant: &Participant, delta: i32) -> AdjustedUpdate {
    let new_points = (participant.total_points + delta).max(0);
    AdjustedUpdate {
        new_points,
        new_category: tier_from_points(new_points).label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn participant(total_points: i32) -> Participant {
        let ts = NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Participant {
            participant_id: Uuid::new_v4(),
            name: "Ana".to_string(),
            search_name: "ana".to_string(),
            total_points,
            category: tier_from_points(total_points).label.to_string(),
            wins: 4,
            losses: 2,
            draws: 1,
            active: true,
            created_at: ts,
            last_updated: ts,
        }
    }

    #[test]
    fn points_for_result_is_total() {
        assert_eq!(points_for_result("win"), 3);
        assert_eq!(points_for_result("draw"), 1);
        assert_eq!(points_for_result("loss"), 0);
        assert_eq!(points_for_result("banana"), 0);
        assert_eq!(points_for_result(""), 0);
        assert_eq!(points_for_result("WIN"), 0);
    }

    #[test]
    fn win_increments_only_the_win_counter() {
        let p = participant(10);
        let update = score_match(&p, "win");
        assert_eq!(update.points_added, 3);
        assert_eq!(update.new_points, 13);
        assert_eq!((update.wins, update.losses, update.draws), (5, 2, 1));
    }

    #[test]
    fn loss_increments_only_the_loss_counter() {
        let p = participant(10);
        let update = score_match(&p, "loss");
        assert_eq!(update.points_added, 0);
        assert_eq!(update.new_points, 10);
        assert_eq!((update.wins, update.losses, update.draws), (4, 3, 1));
    }

    #[test]
    fn draw_increments_only_the_draw_counter() {
        let p = participant(10);
        let update = score_match(&p, "draw");
        assert_eq!(update.points_added, 1);
        assert_eq!(update.new_points, 11);
        assert_eq!((update.wins, update.losses, update.draws), (4, 2, 2));
    }

    #[test]
    fn unknown_result_awards_nothing_and_bumps_no_counter() {
        let p = participant(10);
        let update = score_match(&p, "forfeit");
        assert_eq!(update.points_added, 0);
        assert_eq!(update.new_points, 10);
        assert_eq!((update.wins, update.losses, update.draws), (4, 2, 1));
    }

    #[test]
    fn a_win_can_promote_the_category() {
        let p = participant(84);
        let update = score_match(&p, "win");
        assert_eq!(update.new_points, 87);
        assert_eq!(update.new_category, "B");
    }

    #[test]
    fn adjustment_clamps_at_zero() {
        let p = participant(5);
        let update = score_adjustment(&p, -10_000);
        assert_eq!(update.new_points, 0);
        assert_eq!(update.new_category, "F");
    }

    #[test]
    fn positive_adjustment_moves_points_and_category() {
        let p = participant(100);
        let update = score_adjustment(&p, 60);
        assert_eq!(update.new_points, 160);
        assert_eq!(update.new_category, "S");
    }

    #[test]
    fn zero_delta_keeps_the_total() {
        let p = participant(42);
        let update = score_adjustment(&p, 0);
        assert_eq!(update.new_points, 42);
        assert_eq!(update.new_category, "D");
    }
}
