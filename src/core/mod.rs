// Core algorithm exports
pub mod contract;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use contract::{RankingStrategy, ContractViolation, verify_ranking};
pub use filters::{matched_tags, matched_locations, matched_availability};
pub use matcher::Matcher;
pub use scoring::{calculate_match_score, build_reasoning, ScoreBreakdown};
