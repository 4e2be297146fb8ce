use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::catalog::Catalog;
use crate::core::{profile_progress, Matcher};
use crate::models::{
    BatchMatchRequest, BatchMatchResponse, CatalogResponse, ErrorResponse, HealthResponse,
    MatchCareersRequest, MatchCareersResponse, ProfileProgressRequest,
};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: Matcher,
    pub max_batch_size: usize,
}

impl AppState {
    pub fn new(catalog: Catalog, matcher: Matcher, max_batch_size: usize) -> Self {
        Self {
            catalog: Arc::new(catalog),
            matcher,
            max_batch_size,
        }
    }
}

/// Configure all career-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/careers", web::get().to(list_careers))
        .route("/careers/{id}", web::get().to(get_career))
        .route("/matches", web::post().to(match_careers))
        .route("/matches/batch", web::post().to(match_careers_batch))
        .route("/profiles/progress", web::post().to(compute_progress));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        catalog_size: state.catalog.len(),
    })
}

/// List the catalog
///
/// GET /api/v1/careers
async fn list_careers(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(CatalogResponse {
        careers: state.catalog.careers(),
        total: state.catalog.len(),
    })
}

/// Fetch a single career
///
/// GET /api/v1/careers/{id}
async fn get_career(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.get(&id) {
        Some(career) => HttpResponse::Ok().json(career),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Career not found".to_string(),
            message: format!("No career with id {}", id),
            status_code: 404,
        }),
    }
}

/// Match a profile against the catalog
///
/// POST /api/v1/matches
///
/// Request body:
/// ```json
/// {
///   "profile": {
///     "hardSkills": ["string"],
///     "interests": ["string"],
///     "careerGoal": "string",
///     "bio": "string",
///     "educationLevel": "string"
///   }
/// }
/// ```
///
/// An empty `matches` list is a normal answer meaning no confident match.
async fn match_careers(
    state: web::Data<AppState>,
    req: web::Json<MatchCareersRequest>,
) -> impl Responder {
    let matches = state.matcher.find_matches(&req.profile, state.catalog.careers());

    tracing::info!(
        "Returning {} career matches (from {} careers)",
        matches.len(),
        state.catalog.len()
    );

    HttpResponse::Ok().json(MatchCareersResponse {
        matches,
        total_careers: state.catalog.len(),
        generated_at: chrono::Utc::now(),
    })
}

/// Match several profiles in one call
///
/// POST /api/v1/matches/batch
///
/// Request body:
/// ```json
/// { "profiles": [ { "careerGoal": "string" } ] }
/// ```
async fn match_careers_batch(
    state: web::Data<AppState>,
    req: web::Json<BatchMatchRequest>,
) -> impl Responder {
    if req.validate().is_err() {
        tracing::warn!("Rejected empty batch match request");
        return bad_request(
            "Validation failed",
            "profiles must contain at least 1 entry".to_string(),
        );
    }

    if req.profiles.len() > state.max_batch_size {
        tracing::warn!(
            "Rejected batch of {} profiles (limit {})",
            req.profiles.len(),
            state.max_batch_size
        );
        return bad_request(
            "Batch too large",
            format!("At most {} profiles per request", state.max_batch_size),
        );
    }

    let results = state
        .matcher
        .find_matches_batch(&req.profiles, state.catalog.careers());

    tracing::info!("Matched batch of {} profiles", results.len());

    HttpResponse::Ok().json(BatchMatchResponse {
        results,
        total_careers: state.catalog.len(),
        generated_at: chrono::Utc::now(),
    })
}

/// Report how complete a profile is for matching
///
/// POST /api/v1/profiles/progress
async fn compute_progress(req: web::Json<ProfileProgressRequest>) -> impl Responder {
    let progress = profile_progress(&req.profile);

    tracing::debug!("Profile progress: {}%", progress.percent);

    HttpResponse::Ok().json(progress)
}
