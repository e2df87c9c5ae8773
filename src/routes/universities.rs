use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::models::{
    ErrorResponse, FilterCriteria, HealthResponse, RecommendationsRequest, SearchQuery,
};
use crate::services::{DocumentStoreClient, QueryService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<QueryService<DocumentStoreClient>>,
    /// Search result count when the caller does not supply one
    pub default_search_limit: usize,
    /// Upper bound on requested search result counts
    pub max_search_limit: usize,
}

/// Resolve the effective search limit from the request and configured caps
fn effective_limit(requested: Option<usize>, default: usize, max: usize) -> usize {
    requested.unwrap_or(default).min(max)
}

/// Configure all university routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/universities", web::get().to(get_universities))
        .route("/universities/search", web::get().to(search_universities))
        .route("/universities/statistics", web::get().to(get_statistics))
        .route(
            "/universities/recommendations",
            web::post().to(get_recommendations),
        )
        .route("/universities/{id}", web::get().to(get_university_by_id));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.service.store_healthy().await;
    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List universities with optional filters
///
/// GET /api/v1/universities?location=...&program=...&maxTuition=...&minRanking=...
async fn get_universities(
    state: web::Data<AppState>,
    query: web::Query<FilterCriteria>,
) -> impl Responder {
    let criteria = query.into_inner();
    tracing::info!("Listing universities, filters: {:?}", criteria);

    let response = state.service.get_all_universities(criteria).await;
    if response.success {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::InternalServerError().json(response)
    }
}

/// Free-text search
///
/// GET /api/v1/universities/search?q=...&limit=...
async fn search_universities(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = effective_limit(
        query.limit,
        state.default_search_limit,
        state.max_search_limit,
    );

    tracing::info!("Searching universities: q={:?}, limit={}", query.q, limit);

    let response = state.service.search_universities(&query.q, limit).await;
    if response.success {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::InternalServerError().json(response)
    }
}

/// Aggregate statistics over the active collection
///
/// GET /api/v1/universities/statistics
async fn get_statistics(state: web::Data<AppState>) -> impl Responder {
    let response = state.service.get_statistics().await;
    if response.success {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::InternalServerError().json(response)
    }
}

/// Single-record lookup
///
/// GET /api/v1/universities/{id}
async fn get_university_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    let response = state.service.get_university_by_id(&id).await;

    if response.success {
        HttpResponse::Ok().json(response)
    } else if response.error.as_deref() == Some("University not found") {
        HttpResponse::NotFound().json(response)
    } else {
        HttpResponse::InternalServerError().json(response)
    }
}

/// Ranked recommendations for a student profile
///
/// POST /api/v1/universities/recommendations
///
/// Request body:
/// ```json
/// {
///   "percentage": "92%",
///   "locationPreference": "Cambridge, Boston",
///   "budget": "above-20-lakh",
///   "preferredField": "engineering"
/// }
/// ```
async fn get_recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendationsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendations request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = req.into_inner().into();
    let response = state.service.get_recommendations(profile).await;

    if response.success {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::InternalServerError().json(response)
    }
}
