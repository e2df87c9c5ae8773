use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{ExamScore, StudentProfile};

/// Query parameters for `GET /universities/search`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchQuery {
    #[validate(length(min = 1))]
    pub q: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Request body for `POST /universities/recommendations`.
///
/// Mirrors [`StudentProfile`] with length limits so free-form fields are
/// validated once here, at the boundary, instead of defensively in the
/// scoring code.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationsRequest {
    #[validate(length(max = 16))]
    #[serde(default)]
    pub percentage: Option<String>,
    #[validate(length(max = 64))]
    #[serde(default)]
    pub stream: Option<String>,
    #[validate(length(max = 256))]
    #[serde(rename = "locationPreference", alias = "location_preference", default)]
    pub location_preference: Option<String>,
    #[validate(length(max = 32))]
    #[serde(default)]
    pub budget: Option<String>,
    #[validate(length(max = 64))]
    #[serde(rename = "preferredField", alias = "preferred_field", default)]
    pub preferred_field: Option<String>,
    #[serde(rename = "examScores", alias = "exam_scores", default)]
    pub exam_scores: Vec<ExamScore>,
}

impl From<RecommendationsRequest> for StudentProfile {
    fn from(req: RecommendationsRequest) -> Self {
        StudentProfile {
            percentage: req.percentage,
            stream: req.stream,
            location_preference: req.location_preference,
            budget: req.budget,
            preferred_field: req.preferred_field,
            exam_scores: req.exam_scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendations_request_accepts_both_casings() {
        let camel: RecommendationsRequest = serde_json::from_str(
            r#"{ "percentage": "85%", "locationPreference": "Boston" }"#,
        )
        .unwrap();
        let snake: RecommendationsRequest = serde_json::from_str(
            r#"{ "percentage": "85%", "location_preference": "Boston" }"#,
        )
        .unwrap();

        assert_eq!(camel.location_preference, snake.location_preference);
    }

    #[test]
    fn test_search_query_requires_nonempty_q() {
        let query = SearchQuery {
            q: "".to_string(),
            limit: None,
        };
        assert!(query.validate().is_err());
    }
}
