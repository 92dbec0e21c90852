//! Contract shared by every ranking implementation.
//!
//! The deterministic [`Matcher`](crate::core::Matcher) is one strategy; a host
//! application may plug in others (for example a generative-model ranker)
//! as long as their output passes [`verify_ranking`].

use crate::models::{Teacher, MatchCriteria, MatchResult};
use crate::models::domain::MAX_SCORE;
use std::collections::HashSet;
use thiserror::Error;

/// Ranks a pool of teachers against a criteria set.
///
/// Implementations must return exactly one result per teacher, with
/// scores in `0..=100`, sorted by score descending. They must not fail:
/// missing data lowers a score instead of producing an error.
pub trait RankingStrategy: Send + Sync {
    /// Short identifier reported alongside results
    fn name(&self) -> &'static str;

    fn rank(&self, teachers: &[Teacher], criteria: &MatchCriteria) -> Vec<MatchResult>;
}

/// Ways a ranking can break the contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("Expected {expected} results, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Score {score} for teacher {teacher_id} exceeds 100")]
    ScoreOutOfRange { teacher_id: String, score: u8 },

    #[error("Result references unknown teacher {0}")]
    UnknownTeacher(String),

    #[error("Teacher {0} appears more than once")]
    DuplicateTeacher(String),

    #[error("Results not sorted by score at position {position}")]
    NotSorted { position: usize },
}

/// Check a ranking against the teachers it was computed from
pub fn verify_ranking(teachers: &[Teacher], results: &[MatchResult]) -> Result<(), ContractViolation> {
    if teachers.len() != results.len() {
        return Err(ContractViolation::LengthMismatch {
            expected: teachers.len(),
            actual: results.len(),
        });
    }

    let known: HashSet<&str> = teachers.iter().map(|t| t.id.as_str()).collect();
    let mut seen: HashSet<&str> = HashSet::with_capacity(results.len());

    for (position, result) in results.iter().enumerate() {
        if result.score > MAX_SCORE {
            return Err(ContractViolation::ScoreOutOfRange {
                teacher_id: result.teacher_id.clone(),
                score: result.score,
            });
        }
        if !known.contains(result.teacher_id.as_str()) {
            return Err(ContractViolation::UnknownTeacher(result.teacher_id.clone()));
        }
        if !seen.insert(result.teacher_id.as_str()) {
            return Err(ContractViolation::DuplicateTeacher(result.teacher_id.clone()));
        }
        if position > 0 && results[position - 1].score < result.score {
            return Err(ContractViolation::NotSorted { position });
        }
    }

    Ok(())
}
