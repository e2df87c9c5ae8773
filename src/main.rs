mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use config::Settings;
use core::Matcher;
use models::ScoringWeights;
use routes::universities::AppState;
use services::{
    reference_universities, DocumentStoreClient, FallbackPolicy, QueryService,
    DEFAULT_SEARCH_LIMIT,
};
use std::sync::Arc;
use tracing::{error, info};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string()))
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting UniSphere matching service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the document store client
    let store = DocumentStoreClient::new(
        settings.store.endpoint,
        settings.store.api_key,
        settings.store.project_id,
        settings.store.database_id,
        settings.store.collection_id,
    )
    .unwrap_or_else(|e| {
        error!("Failed to initialize store client: {}", e);
        panic!("Store client error: {}", e);
    });

    info!("Document store client initialized");

    // Initialize matcher with configured weights
    let weights = ScoringWeights {
        academic: settings.scoring.weights.academic,
        location: settings.scoring.weights.location,
        budget: settings.scoring.weights.budget,
        field: settings.scoring.weights.field,
        quality: settings.scoring.weights.quality,
    };

    let matcher = Matcher::new(weights);

    info!("Matcher initialized with weights: {:?}", weights);

    // Empty-primary fallback policy
    let fallback = if settings.fallback.use_reference_on_empty {
        FallbackPolicy::UseReferenceDataset
    } else {
        FallbackPolicy::Disabled
    };

    info!("Fallback policy: {:?}", fallback);

    // Build the query service with injected store and reference dataset
    let service = Arc::new(QueryService::new(
        store,
        reference_universities(),
        fallback,
        matcher,
    ));

    // Search limits from the matching settings
    let default_search_limit = settings.matching.default_limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let max_search_limit = settings.matching.max_limit.unwrap_or(100);

    info!(
        "Search limits: default {}, max {}",
        default_search_limit, max_search_limit
    );

    let app_state = AppState {
        service,
        default_search_limit,
        max_search_limit,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
