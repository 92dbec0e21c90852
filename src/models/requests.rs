use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::MatchCriteria;
use crate::services::directory::TeacherRecord;

/// Criteria as sent by clients; either axis may be missing or null
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CriteriaPayload {
    #[serde(default)]
    pub location: Option<Vec<String>>,
    #[serde(default)]
    pub availability: Option<Vec<String>>,
}

impl From<CriteriaPayload> for MatchCriteria {
    fn from(payload: CriteriaPayload) -> Self {
        MatchCriteria::new(
            payload.location.unwrap_or_default(),
            payload.availability.unwrap_or_default(),
        )
    }
}

/// Request to score a pool of teachers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreTeachersRequest {
    #[serde(default)]
    pub teachers: Vec<TeacherRecord>,
    #[serde(default)]
    pub criteria: Option<CriteriaPayload>,
}

/// Request to turn an admin's selection into a group draft
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmMatchRequest {
    #[validate(length(min = 1), custom(function = "not_blank"))]
    #[serde(alias = "teacher_id")]
    pub teacher_id: String,
    #[validate(length(min = 1), custom(function = "has_student"))]
    #[serde(alias = "student_ids")]
    pub student_ids: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Ids are trimmed before use, so whitespace-only values count as missing
fn not_blank<T: AsRef<str> + ?Sized>(value: &T) -> Result<(), ValidationError> {
    if value.as_ref().trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn has_student(student_ids: &[String]) -> Result<(), ValidationError> {
    if student_ids.iter().all(|id| id.trim().is_empty()) {
        return Err(ValidationError::new("no_students"));
    }
    Ok(())
}
