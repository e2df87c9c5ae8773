//! UniSphere Match - university matching and recommendation service
//!
//! This library implements the UniSphere matching engine: a weighted
//! compatibility scorer between student profiles and university records,
//! plus the filter/search/statistics query layer with an explicit
//! empty-primary fallback to a bundled reference dataset.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{calculate_match_score, Matcher};
pub use models::{
    FilterCriteria, MatchResult, ScoringWeights, StudentProfile, UniversityRecord,
    UniversityStatistics,
};
pub use services::{reference_universities, FallbackPolicy, QueryService};
