use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{Matcher, MentorFilter};
use crate::error::InvalidInputError;
use crate::models::{
    ErrorResponse, FilterParams, HealthResponse, MentorListResponse, MentorProfile, RankRequest,
    RankResponse, ScoreRequest,
};
use crate::services::MentorCatalog;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub catalog: Arc<MentorCatalog>,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_mentor))
        .route("/matches/rank", web::post().to(rank_mentors))
        .route("/mentors", web::get().to(list_mentors));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

fn invalid_input(err: InvalidInputError) -> HttpResponse {
    tracing::info!("Rejected invalid input: {}", err);
    bad_request("Invalid input", err.to_string())
}

/// Turn wire-level filter params into a checked filter
fn build_filter(params: Option<&FilterParams>) -> Result<MentorFilter, HttpResponse> {
    let Some(params) = params else {
        return Ok(MentorFilter::new());
    };

    if let Err(errors) = params.validate() {
        return Err(bad_request("Validation failed", errors.to_string()));
    }

    MentorFilter::try_from(params).map_err(invalid_input)
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        mentors: state.catalog.len(),
    })
}

/// Score one mentor against a student
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "mentor": { "id": "...", "name": "...", "subjects": ["Physics"], "rating": 4.9, "hourlyRate": 1500, ... },
///   "student": { "subjects": ["Physics"], "grade": 10, "preferredSessionDuration": "1 hour", "budget": 2000, ... }
/// }
/// ```
async fn score_mentor(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    match state.matcher.score_breakdown(&req.mentor, &req.student) {
        Ok(breakdown) => {
            tracing::debug!("Scored mentor {}: {}", req.mentor.id, breakdown.score);
            HttpResponse::Ok().json(breakdown)
        }
        Err(e) => invalid_input(e),
    }
}

/// Rank mentors for a student
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "student": { ... },
///   "mentors": [ ... ],
///   "filter": { "search": "phys", "subject": "Physics", "maxRate": 1000 },
///   "limit": 20
/// }
/// ```
///
/// Without `mentors` the catalog is ranked.
async fn rank_mentors(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let filter = match build_filter(req.filter.as_ref()) {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    let mentors: &[MentorProfile] = match &req.mentors {
        Some(mentors) => mentors,
        None => state.catalog.mentors(),
    };

    // Cap limit to keep responses bounded
    let limit = req
        .limit
        .map(usize::from)
        .unwrap_or_else(|| state.matching.default_limit())
        .min(state.matching.max_limit());

    tracing::info!("Ranking {} mentors, limit: {}", mentors.len(), limit);

    match state.matcher.find_matches(&req.student, mentors, &filter, limit) {
        Ok(outcome) => {
            let response = RankResponse {
                matches: outcome.matches,
                total_candidates: outcome.total_candidates,
            };

            tracing::info!(
                "Returning {} matches (from {} candidates)",
                response.matches.len(),
                response.total_candidates
            );

            HttpResponse::Ok().json(response)
        }
        Err(e) => invalid_input(e),
    }
}

/// List catalog mentors
///
/// GET /api/v1/mentors?search={term}&subject={subject}&maxRate={rate}
async fn list_mentors(
    state: web::Data<AppState>,
    query: web::Query<FilterParams>,
) -> impl Responder {
    let filter = match build_filter(Some(&*query)) {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    let mentors = state.catalog.search(&filter);

    HttpResponse::Ok().json(MentorListResponse {
        count: mentors.len(),
        mentors,
    })
}
