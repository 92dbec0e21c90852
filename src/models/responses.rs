use serde::{Deserialize, Serialize};
use crate::models::domain::MatchResult;
use crate::services::directory::SkippedRecord;

/// Response for the score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreTeachersResponse {
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
    pub skipped: Vec<SkippedRecord>,
    pub strategy: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
