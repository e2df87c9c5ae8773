// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BudgetBracket, CampusStatistics, Coordinates, ExamScore, FilterCriteria, Location,
    MatchResult, Program, ProgramCount, ProgramLevel, Ranking, Scholarship, ScoringWeights,
    StudentProfile, StudentType, Tuition, TuitionByLevel, UniversityRecord, UniversityStatistics,
};
pub use requests::{RecommendationsRequest, SearchQuery};
pub use responses::{
    ErrorResponse, HealthResponse, RecommendationsResponse, SearchResponse, StatisticsResponse,
    UniversityListResponse, UniversityResponse,
};
