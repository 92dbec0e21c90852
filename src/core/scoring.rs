use crate::models::{Teacher, MatchCriteria, ScoringWeights, ScoreBand};
use crate::models::domain::MAX_SCORE;
use crate::core::filters::{matched_locations, matched_availability};

/// Per-component outcome of scoring one teacher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub score: u8,
    pub matched_locations: Vec<String>,
    pub matched_availability: Vec<String>,
    pub active_bonus: bool,
}

/// Calculate a match score (0-100) for a teacher against the criteria
///
/// Scoring formula (additive, each component fires at most once):
/// score = min(100,
///     location_weight      if any preferred location was requested
///   + availability_weight  if any available day was requested
///   + active_weight        if the teacher is Active
/// )
pub fn calculate_match_score(
    teacher: &Teacher,
    criteria: &MatchCriteria,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let locations = matched_locations(teacher, criteria);
    let availability = matched_availability(teacher, criteria);
    let active_bonus = teacher.is_active();

    let mut total: u32 = 0;
    if !locations.is_empty() {
        total = total.saturating_add(weights.location);
    }
    if !availability.is_empty() {
        total = total.saturating_add(weights.availability);
    }
    if active_bonus {
        total = total.saturating_add(weights.active);
    }

    ScoreBreakdown {
        score: total.min(MAX_SCORE as u32) as u8,
        matched_locations: locations,
        matched_availability: availability,
        active_bonus,
    }
}

/// Build the human-readable explanation for a breakdown
///
/// Matched axes are phrased as clauses following "because they ...", e.g.
/// "because they match the requested locations (East) and are available
/// on the requested days (Weekends)."
pub fn build_reasoning(teacher_name: &str, breakdown: &ScoreBreakdown) -> String {
    let mut reasons: Vec<String> = Vec::with_capacity(2);
    if !breakdown.matched_locations.is_empty() {
        reasons.push(format!(
            "match the requested locations ({})",
            breakdown.matched_locations.join(", ")
        ));
    }
    if !breakdown.matched_availability.is_empty() {
        reasons.push(format!(
            "are available on the requested days ({})",
            breakdown.matched_availability.join(", ")
        ));
    }
    let because = if reasons.is_empty() {
        String::new()
    } else {
        format!(" because they {}", reasons.join(" and "))
    };

    match ScoreBand::from_score(breakdown.score) {
        ScoreBand::Excellent => format!(
            "Excellent match! {} is a strong candidate{}.",
            teacher_name, because
        ),
        ScoreBand::Good => format!(
            "Good potential match. {} is a possible candidate{}.",
            teacher_name, because
        ),
        ScoreBand::Low => format!(
            "Low match probability. {} does not align well with the requested criteria.",
            teacher_name
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeacherStatus;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn create_test_teacher(status: TeacherStatus) -> Teacher {
        Teacher::new(
            "t1",
            "Ustaz Hafiz",
            status,
            tags(&["East", "Central"]),
            tags(&["Weekends"]),
        )
    }

    #[test]
    fn test_full_overlap_active() {
        let teacher = create_test_teacher(TeacherStatus::Active);
        let criteria = MatchCriteria::new(tags(&["East"]), tags(&["Weekends", "Evenings"]));

        let breakdown = calculate_match_score(&teacher, &criteria, &ScoringWeights::default());

        assert_eq!(breakdown.score, 90);
        assert_eq!(breakdown.matched_locations, tags(&["East"]));
        assert_eq!(breakdown.matched_availability, tags(&["Weekends"]));
        assert!(breakdown.active_bonus);
    }

    #[test]
    fn test_location_only_inactive() {
        let teacher = create_test_teacher(TeacherStatus::Inactive);
        let criteria = MatchCriteria::new(tags(&["Central"]), tags(&["Weekdays"]));

        let breakdown = calculate_match_score(&teacher, &criteria, &ScoringWeights::default());

        assert_eq!(breakdown.score, 40);
        assert!(breakdown.matched_availability.is_empty());
    }

    #[test]
    fn test_no_overlap_inactive_is_zero() {
        let teacher = create_test_teacher(TeacherStatus::Inactive);
        let criteria = MatchCriteria::new(tags(&["West"]), tags(&["Weekdays"]));

        let breakdown = calculate_match_score(&teacher, &criteria, &ScoringWeights::default());

        assert_eq!(breakdown.score, 0);
    }

    #[test]
    fn test_score_clamped_with_heavy_weights() {
        let teacher = create_test_teacher(TeacherStatus::Active);
        let criteria = MatchCriteria::new(tags(&["East"]), tags(&["Weekends"]));
        let weights = ScoringWeights {
            location: 70,
            availability: 70,
            active: u32::MAX,
        };

        let breakdown = calculate_match_score(&teacher, &criteria, &weights);

        assert_eq!(breakdown.score, 100);
    }

    #[test]
    fn test_reasoning_bands() {
        let teacher = create_test_teacher(TeacherStatus::Active);
        let weights = ScoringWeights::default();

        let excellent = calculate_match_score(
            &teacher,
            &MatchCriteria::new(tags(&["East"]), tags(&["Weekends"])),
            &weights,
        );
        let text = build_reasoning(&teacher.name, &excellent);
        assert!(text.starts_with("Excellent match! Ustaz Hafiz"));
        assert!(text.contains("East") && text.contains("Weekends"));

        let good = calculate_match_score(
            &teacher,
            &MatchCriteria::new(tags(&["East"]), tags(&["Weekdays"])),
            &weights,
        );
        assert_eq!(good.score, 50);
        assert_eq!(
            build_reasoning(&teacher.name, &good),
            "Good potential match. Ustaz Hafiz is a possible candidate because they match the requested locations (East)."
        );

        let low = calculate_match_score(&teacher, &MatchCriteria::default(), &weights);
        assert_eq!(
            build_reasoning(&teacher.name, &low),
            "Low match probability. Ustaz Hafiz does not align well with the requested criteria."
        );
    }

    #[test]
    fn test_reasoning_without_reasons_in_high_band() {
        let breakdown = ScoreBreakdown {
            score: 85,
            matched_locations: vec![],
            matched_availability: vec![],
            active_bonus: true,
        };
        assert_eq!(
            build_reasoning("Ustazah Aisyah", &breakdown),
            "Excellent match! Ustazah Aisyah is a strong candidate."
        );
    }
}
