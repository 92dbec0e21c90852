use crate::models::domain::{normalize_tags, Gender, Teacher, TeacherStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Role value that marks a directory user as a teacher
const TEACHER_ROLE: &str = "teacher";

/// Errors raised while normalizing directory records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid gender: {0}")]
    InvalidGender(String),

    #[error("Record has role {0}, expected teacher")]
    NotATeacher(String),

    #[error("Duplicate teacher id: {0}")]
    DuplicateId(String),
}

/// A teacher document as it comes out of the user directory
///
/// Every field is optional here; `Teacher::try_from` decides what is
/// required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub preferred_locations: Option<Vec<String>>,
    #[serde(default)]
    pub available_days: Option<Vec<String>>,
    #[serde(default)]
    pub preferred_timeslots: Option<Vec<String>>,
    #[serde(default)]
    pub preferred_syllabus: Option<Vec<String>>,
    #[serde(default)]
    pub preferred_audience: Option<Vec<String>>,
}

/// A record that was dropped during normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRecord {
    pub index: usize,
    pub id: Option<String>,
    pub reason: String,
}

/// Output of `normalize_teachers`
#[derive(Debug, Clone, Default)]
pub struct NormalizedTeachers {
    pub teachers: Vec<Teacher>,
    pub skipped: Vec<SkippedRecord>,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, DirectoryError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(DirectoryError::MissingField(field))
}

impl TryFrom<TeacherRecord> for Teacher {
    type Error = DirectoryError;

    fn try_from(record: TeacherRecord) -> Result<Self, Self::Error> {
        if let Some(role) = record.role.as_deref() {
            if !role.trim().eq_ignore_ascii_case(TEACHER_ROLE) {
                return Err(DirectoryError::NotATeacher(role.to_string()));
            }
        }

        let id = required(record.id, "id")?;
        let name = required(record.name, "name")?;

        let raw_status = required(record.status, "status")?;
        let status = TeacherStatus::parse(&raw_status)
            .ok_or(DirectoryError::InvalidStatus(raw_status))?;

        let gender = match record.gender.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                Gender::parse(raw).ok_or_else(|| DirectoryError::InvalidGender(raw.to_string()))?,
            ),
        };

        Ok(Teacher {
            id,
            name,
            status,
            preferred_locations: normalize_tags(record.preferred_locations.unwrap_or_default()),
            available_days: normalize_tags(record.available_days.unwrap_or_default()),
            gender,
            preferred_timeslots: normalize_tags(record.preferred_timeslots.unwrap_or_default()),
            preferred_syllabus: normalize_tags(record.preferred_syllabus.unwrap_or_default()),
            preferred_audience: normalize_tags(record.preferred_audience.unwrap_or_default()),
        })
    }
}

/// Normalize a batch of directory records into teachers
///
/// Records that fail validation are reported in `skipped` instead of
/// failing the whole batch. The first record with a given id wins; later
/// ones are skipped as duplicates.
pub fn normalize_teachers(records: Vec<TeacherRecord>) -> NormalizedTeachers {
    let mut out = NormalizedTeachers {
        teachers: Vec::with_capacity(records.len()),
        skipped: Vec::new(),
    };
    let mut accepted: HashSet<String> = HashSet::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let id = record.id.clone();
        let normalized = Teacher::try_from(record).and_then(|teacher| {
            if accepted.insert(teacher.id.clone()) {
                Ok(teacher)
            } else {
                Err(DirectoryError::DuplicateId(teacher.id))
            }
        });

        match normalized {
            Ok(teacher) => out.teachers.push(teacher),
            Err(e) => {
                tracing::warn!("Skipping directory record {} (id: {:?}): {}", index, id, e);
                out.skipped.push(SkippedRecord {
                    index,
                    id,
                    reason: e.to_string(),
                });
            }
        }
    }

    out
}
