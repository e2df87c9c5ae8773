use serde::{Deserialize, Serialize};

use crate::models::domain::{
    FilterCriteria, MatchResult, StudentProfile, UniversityRecord, UniversityStatistics,
};

/// Uniform envelope for collection queries: `GET /universities`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniversityListResponse {
    pub success: bool,
    pub data: Vec<UniversityRecord>,
    pub total: usize,
    pub filters: FilterCriteria,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Envelope for free-text search: `GET /universities/search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub data: Vec<UniversityRecord>,
    pub total: usize,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Envelope for single-record lookup: `GET /universities/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniversityResponse {
    pub success: bool,
    pub data: Option<UniversityRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Envelope for recommendations: `POST /universities/recommendations`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub success: bool,
    pub data: Vec<MatchResult>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<StudentProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Envelope for aggregate statistics: `GET /universities/statistics`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsResponse {
    pub success: bool,
    pub data: Option<UniversityStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response for the HTTP boundary (payload/validation errors)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
