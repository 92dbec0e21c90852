//! Asatizah Match - teacher matching for the Ihsan education portal
//!
//! Ranks teacher candidates against an admin's location and availability
//! criteria. Scoring is a pure function of its inputs; the HTTP layer in
//! `routes` only hosts it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, RankingStrategy, ContractViolation, verify_ranking};
pub use models::{Teacher, TeacherStatus, MatchCriteria, MatchResult, ScoringWeights, Group};
pub use services::{TeacherRecord, normalize_teachers};
