use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    ConfirmMatchRequest, ErrorResponse, Group, HealthResponse, MatchCriteria,
    ScoreTeachersRequest, ScoreTeachersResponse,
};
use crate::core::{verify_ranking, RankingStrategy};
use crate::services::normalize_teachers;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub strategy: Arc<dyn RankingStrategy>,
    pub max_candidates: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_teachers))
        .route("/matches/confirm", web::post().to(confirm_match));
}

fn error_response(status_code: u16, error: &str, message: String) -> ErrorResponse {
    ErrorResponse {
        error: error.to_string(),
        message,
        status_code,
    }
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score teachers endpoint
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "teachers": [{"id": "t1", "name": "string", "status": "Active",
///                 "preferredLocations": ["East"], "availableDays": ["Weekends"]}],
///   "criteria": {"location": ["East"], "availability": ["Weekends"]}
/// }
/// ```
async fn score_teachers(
    state: web::Data<AppState>,
    req: web::Json<ScoreTeachersRequest>,
) -> impl Responder {
    let req = req.into_inner();

    if req.teachers.len() > state.max_candidates {
        tracing::info!(
            "Rejecting score request with {} teachers (max {})",
            req.teachers.len(),
            state.max_candidates
        );
        return HttpResponse::BadRequest().json(error_response(
            400,
            "Too many candidates",
            format!("At most {} teachers can be scored per request", state.max_candidates),
        ));
    }

    let total_candidates = req.teachers.len();
    let normalized = normalize_teachers(req.teachers);
    let criteria: MatchCriteria = req.criteria.unwrap_or_default().into();

    if criteria.is_empty() {
        tracing::debug!("No location or availability criteria supplied, ranking by status only");
    }

    tracing::debug!(
        "Scoring {} teachers ({} skipped) against criteria {:?}",
        normalized.teachers.len(),
        normalized.skipped.len(),
        criteria
    );

    let matches = state.strategy.rank(&normalized.teachers, &criteria);

    if let Err(violation) = verify_ranking(&normalized.teachers, &matches) {
        tracing::error!(
            "Ranking strategy {} broke the ranking contract: {}",
            state.strategy.name(),
            violation
        );
        return HttpResponse::InternalServerError().json(error_response(
            500,
            "Ranking failed",
            violation.to_string(),
        ));
    }

    tracing::info!(
        "Returning {} ranked teachers (from {} candidates, top score {})",
        matches.len(),
        total_candidates,
        matches.first().map(|m| m.score).unwrap_or(0)
    );

    HttpResponse::Ok().json(ScoreTeachersResponse {
        matches,
        total_candidates,
        skipped: normalized.skipped,
        strategy: state.strategy.name().to_string(),
    })
}

/// Confirm match endpoint
///
/// POST /api/v1/matches/confirm
///
/// Request body:
/// ```json
/// {
///   "teacherId": "string",
///   "studentIds": ["string"],
///   "location": "East",
///   "name": "optional group name"
/// }
/// ```
///
/// Returns the group record to be persisted by the caller.
async fn confirm_match(req: web::Json<ConfirmMatchRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for confirm_match request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(error_response(
            400,
            "Validation failed",
            errors.to_string(),
        ));
    }

    let group = Group::from_selection(
        &req.teacher_id,
        &req.student_ids,
        req.location.as_deref(),
        req.name.as_deref(),
    );

    tracing::info!(
        "Drafted group {} for teacher {} with {} students",
        group.id,
        group.teacher_id,
        group.student_ids.len()
    );

    HttpResponse::Ok().json(group)
}
