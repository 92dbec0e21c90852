// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Teacher, TeacherStatus, Gender, MatchCriteria, MatchResult, ScoreBand, ScoringWeights, Group, GroupStatus};
pub use requests::{CriteriaPayload, ScoreTeachersRequest, ConfirmMatchRequest};
pub use responses::{ScoreTeachersResponse, HealthResponse, ErrorResponse};
