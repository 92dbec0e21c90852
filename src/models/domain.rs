use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the "Excellent match" band
pub const EXCELLENT_THRESHOLD: u8 = 80;

/// Lower bound (inclusive) of the "Good potential match" band
pub const GOOD_THRESHOLD: u8 = 50;

/// Upper bound of every score
pub const MAX_SCORE: u8 = 100;

/// Eligibility status of a teacher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeacherStatus {
    Active,
    Inactive,
}

impl TeacherStatus {
    /// Parse a directory status value, ignoring case and surrounding whitespace
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }
}

/// A fully normalized teacher candidate
///
/// Tag collections are deduplicated and trimmed at the directory boundary,
/// so the matcher never has to deal with missing or partial data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub status: TeacherStatus,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    #[serde(default)]
    pub available_days: Vec<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub preferred_timeslots: Vec<String>,
    #[serde(default)]
    pub preferred_syllabus: Vec<String>,
    #[serde(default)]
    pub preferred_audience: Vec<String>,
}

impl Teacher {
    /// Build a teacher with only the fields the scorer reads
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        status: TeacherStatus,
        preferred_locations: Vec<String>,
        available_days: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
            preferred_locations: normalize_tags(preferred_locations),
            available_days: normalize_tags(available_days),
            gender: None,
            preferred_timeslots: vec![],
            preferred_syllabus: vec![],
            preferred_audience: vec![],
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == TeacherStatus::Active
    }
}

/// Location and availability preferences supplied by an admin for a group
///
/// An empty axis means "no preference" and contributes nothing to a score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCriteria {
    #[serde(default)]
    pub location: Vec<String>,
    #[serde(default)]
    pub availability: Vec<String>,
}

impl MatchCriteria {
    pub fn new(location: Vec<String>, availability: Vec<String>) -> Self {
        Self {
            location: normalize_tags(location),
            availability: normalize_tags(availability),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.location.is_empty() && self.availability.is_empty()
    }
}

/// Scored result for one teacher against one criteria set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub teacher_id: String,
    pub score: u8,
    pub reasoning: String,
    pub matched_locations: Vec<String>,
    pub matched_availability: Vec<String>,
}

/// Reasoning tier selected from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Excellent,
    Good,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if score >= GOOD_THRESHOLD {
            Self::Good
        } else {
            Self::Low
        }
    }
}

/// Points awarded by each scoring component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub location: u32,
    pub availability: u32,
    pub active: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            location: 40,
            availability: 40,
            active: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupStatus {
    Active,
    Inactive,
}

/// Group record derived from a confirmed match
///
/// Built here, persisted by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub location: String,
    pub teacher_id: String,
    pub student_ids: Vec<String>,
    pub status: GroupStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Group {
    /// Build a fresh group draft for a confirmed teacher and student selection
    pub fn from_selection(
        teacher_id: &str,
        student_ids: &[String],
        location: Option<&str>,
        name: Option<&str>,
    ) -> Self {
        let location = location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(UNASSIGNED_LOCATION)
            .to_string();

        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Ulumi Group ({})", location));

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            location,
            teacher_id: teacher_id.trim().to_string(),
            student_ids: normalize_tags(student_ids.to_vec()),
            status: GroupStatus::Active,
            created_at: chrono::Utc::now(),
        }
    }
}

pub const UNASSIGNED_LOCATION: &str = "Unassigned";

/// Trim, drop blanks and deduplicate while keeping first-seen order
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || out.iter().any(|t| t == tag) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}
