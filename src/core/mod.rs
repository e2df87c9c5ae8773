// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod parse;
pub mod scoring;
pub mod stats;

pub use filters::{filter_by_criteria, matches_criteria, matches_search, search};
pub use matcher::{Matcher, RankingOutcome};
pub use parse::AcademicScore;
pub use scoring::calculate_match_score;
pub use stats::compute_statistics;
