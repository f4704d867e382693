use crate::dto::participant::ParticipantResponse;
use crate::models::Participant;

/// Derives ranks over a list in store order (descending total points).
/// Active participants get 1..N; inactive ones get no rank and do not
/// consume a slot.
pub fn assign_ranks(participants: Vec<Participant>) -> Vec<ParticipantResponse> {
    let mut next_rank = 1;
    participants
        .into_iter()
        .map(|participant| {
            let mut response = ParticipantResponse::from(participant);
            if response.active {
                response.rank = Some(next_rank);
                next_rank += 1;
            }
            response
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tier::tier_from_points;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn participant(total_points: i32, active: bool) -> Participant {
        let ts = NaiveDate::from_ymd_opt(2026, 2, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        Participant {
            participant_id: Uuid::new_v4(),
            name: "P".to_string(),
            search_name: "p".to_string(),
            total_points,
            category: tier_from_points(total_points).label.to_string(),
            wins: 0,
            losses: 0,
            draws: 0,
            active,
            created_at: ts,
            last_updated: ts,
        }
    }

    #[test]
    fn active_participants_rank_in_store_order() {
        let ranked = assign_ranks(vec![
            participant(50, true),
            participant(30, true),
            participant(30, true),
            participant(10, true),
        ]);
        let ranks: Vec<_> = ranked.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![Some(1), Some(2), Some(3), Some(4)]);
    }

    #[test]
    fn inactive_participants_get_no_rank_and_consume_no_slot() {
        let ranked = assign_ranks(vec![
            participant(50, true),
            participant(40, false),
            participant(30, true),
            participant(10, true),
        ]);
        let ranks: Vec<_> = ranked.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![Some(1), None, Some(2), Some(3)]);
    }

    #[test]
    fn empty_list_ranks_to_empty() {
        assert!(assign_ranks(Vec::new()).is_empty());
    }

    #[test]
    fn all_inactive_means_no_ranks() {
        let ranked = assign_ranks(vec![participant(50, false), participant(10, false)]);
        assert!(ranked.iter().all(|p| p.rank.is_none()));
    }
}
