use crate::models::{Teacher, MatchCriteria, MatchResult, ScoringWeights};
use crate::core::{
    contract::RankingStrategy,
    scoring::{build_reasoning, calculate_match_score},
};

/// Deterministic teacher ranker
///
/// Scores every candidate against the criteria and orders them by score.
/// Candidates are never filtered out; rank is the only signal.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score one teacher
    pub fn score_teacher(&self, teacher: &Teacher, criteria: &MatchCriteria) -> MatchResult {
        let breakdown = calculate_match_score(teacher, criteria, &self.weights);
        let reasoning = build_reasoning(&teacher.name, &breakdown);

        MatchResult {
            teacher_id: teacher.id.clone(),
            score: breakdown.score,
            reasoning,
            matched_locations: breakdown.matched_locations,
            matched_availability: breakdown.matched_availability,
        }
    }

    /// Rank all teachers against the criteria
    ///
    /// # Returns
    /// One result per teacher, sorted by score descending. Equal scores
    /// keep the order the teachers were supplied in.
    pub fn rank(&self, teachers: &[Teacher], criteria: &MatchCriteria) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = teachers
            .iter()
            .map(|teacher| self.score_teacher(teacher, criteria))
            .collect();

        // sort_by is stable, which gives the input-order tie-break
        results.sort_by(|a, b| b.score.cmp(&a.score));

        results
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

impl RankingStrategy for Matcher {
    fn name(&self) -> &'static str {
        "deterministic"
    }

    fn rank(&self, teachers: &[Teacher], criteria: &MatchCriteria) -> Vec<MatchResult> {
        Matcher::rank(self, teachers, criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contract::verify_ranking;
    use crate::models::TeacherStatus;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn create_candidate(id: &str, status: TeacherStatus, locations: &[&str], days: &[&str]) -> Teacher {
        Teacher::new(id, format!("Teacher {}", id), status, tags(locations), tags(days))
    }

    #[test]
    fn test_rank_orders_by_score() {
        let matcher = Matcher::with_default_weights();
        let criteria = MatchCriteria::new(tags(&["East"]), tags(&["Weekends"]));

        let candidates = vec![
            create_candidate("1", TeacherStatus::Inactive, &["West"], &["Weekdays"]), // 0
            create_candidate("2", TeacherStatus::Active, &["East"], &["Weekends"]),   // 90
            create_candidate("3", TeacherStatus::Active, &["East"], &[]),             // 50
        ];

        let results = matcher.rank(&candidates, &criteria);

        let ids: Vec<&str> = results.iter().map(|r| r.teacher_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
        assert_eq!(results.iter().map(|r| r.score).collect::<Vec<_>>(), vec![90, 50, 0]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let matcher = Matcher::with_default_weights();
        let criteria = MatchCriteria::new(tags(&["East"]), vec![]);

        let candidates = vec![
            create_candidate("c", TeacherStatus::Active, &["East"], &[]),
            create_candidate("a", TeacherStatus::Active, &["East"], &[]),
            create_candidate("b", TeacherStatus::Active, &["East"], &[]),
        ];

        let results = matcher.rank(&candidates, &criteria);

        let ids: Vec<&str> = results.iter().map(|r| r.teacher_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_custom_weights_are_used() {
        let weights = ScoringWeights { location: 25, availability: 60, active: 5 };
        let matcher = Matcher::new(weights);
        assert_eq!(matcher.weights(), &weights);

        let teacher = create_candidate("1", TeacherStatus::Active, &["East"], &["Weekends"]);
        let result = matcher.score_teacher(&teacher, &MatchCriteria::new(vec![], tags(&["Weekends"])));
        assert_eq!(result.score, 65);

        assert_eq!(Matcher::default().weights(), &ScoringWeights::default());
    }

    #[test]
    fn test_rank_empty_pool() {
        let matcher = Matcher::default();
        let results = matcher.rank(&[], &MatchCriteria::new(tags(&["East"]), tags(&["Weekends"])));
        assert!(results.is_empty());
    }

    #[test]
    fn test_strategy_output_satisfies_contract() {
        let matcher = Matcher::default();
        let strategy: &dyn RankingStrategy = &matcher;
        let criteria = MatchCriteria::new(tags(&["North", "East"]), tags(&["Evenings"]));

        let candidates: Vec<Teacher> = (0..12)
            .map(|i| {
                let status = if i % 3 == 0 { TeacherStatus::Inactive } else { TeacherStatus::Active };
                let locations: &[&str] = if i % 2 == 0 { &["East"] } else { &["West"] };
                let days: &[&str] = if i % 4 == 0 { &["Evenings"] } else { &[] };
                create_candidate(&i.to_string(), status, locations, days)
            })
            .collect();

        let results = strategy.rank(&candidates, &criteria);

        assert_eq!(strategy.name(), "deterministic");
        assert_eq!(verify_ranking(&candidates, &results), Ok(()));
    }
}
