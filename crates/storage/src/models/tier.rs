/// A labeled band of point totals with a display color. The table is
/// compiled in; tiers are never created or destroyed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub label: &'static str,
    pub min_points: i32,
    pub color: &'static str,
}

pub const DEFAULT_TIER_COLOR: &str = "#6b7280";

/// Thresholds in strictly descending order, terminating at the floor tier
/// with min_points = 0.
pub const TIER_THRESHOLDS: [Tier; 6] = [
    Tier { label: "S", min_points: 150, color: "#dc2626" },
    Tier { label: "A", min_points: 120, color: "#ea580c" },
    Tier { label: "B", min_points: 85, color: "#f59e0b" },
    Tier { label: "C", min_points: 50, color: "#84cc16" },
    Tier { label: "D", min_points: 25, color: "#06b6d4" },
    Tier { label: "F", min_points: 0, color: "#6b7280" },
];

/// First threshold (scanning from highest) whose min_points fits. Total:
/// the floor tier catches everything that remains.
pub fn tier_from_points(points: i32) -> &'static Tier {
    for tier in &TIER_THRESHOLDS {
        if points >= tier.min_points {
            return tier;
        }
    }
    &TIER_THRESHOLDS[TIER_THRESHOLDS.len() - 1]
}

/// Configured color for a tier label, or a neutral default for an
/// unrecognized label. The fallback is deliberate, not an error.
pub fn color_for_tier(label: &str) -> &'static str {
    TIER_THRESHOLDS
        .iter()
        .find(|t| t.label == label)
        .map(|t| t.color)
        .unwrap_or(DEFAULT_TIER_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_points_map_to_expected_tiers() {
        let cases = [
            (0, "F"),
            (24, "F"),
            (25, "D"),
            (49, "D"),
            (50, "C"),
            (84, "C"),
            (85, "B"),
            (119, "B"),
            (120, "A"),
            (149, "A"),
            (150, "S"),
            (5000, "S"),
        ];
        for (points, expected) in cases {
            assert_eq!(tier_from_points(points).label, expected, "points={points}");
        }
    }

    #[test]
    fn tier_lookup_is_tight() {
        // The returned tier's threshold fits, and no tier with a higher
        // threshold also fits.
        for points in 0..=300 {
            let tier = tier_from_points(points);
            assert!(tier.min_points <= points);
            for other in &TIER_THRESHOLDS {
                if other.min_points > tier.min_points {
                    assert!(points < other.min_points);
                }
            }
        }
    }

    #[test]
    fn thresholds_are_strictly_descending_to_zero() {
        for pair in TIER_THRESHOLDS.windows(2) {
            assert!(pair[0].min_points > pair[1].min_points);
        }
        assert_eq!(TIER_THRESHOLDS.last().unwrap().min_points, 0);
    }

    #[test]
    fn known_tier_colors_resolve() {
        assert_eq!(color_for_tier("S"), "#dc2626");
        assert_eq!(color_for_tier("F"), "#6b7280");
    }

    #[test]
    fn unknown_tier_label_falls_back_to_neutral() {
        assert_eq!(color_for_tier("Z"), DEFAULT_TIER_COLOR);
        assert_eq!(color_for_tier(""), DEFAULT_TIER_COLOR);
    }
}
