use crate::core::scoring::calculate_match_score;
use crate::models::{MatchResult, ScoringWeights, StudentProfile, UniversityRecord};

/// Result of ranking a candidate collection for one student
#[derive(Debug)]
pub struct RankingOutcome {
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
}

/// Matching orchestrator: scores each candidate against the student profile
/// and ranks the collection by score descending.
///
/// Stateless apart from the configured weights; concurrent calls are
/// independent.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Score one student/university pair
    pub fn score(&self, university: &UniversityRecord, profile: &StudentProfile) -> u8 {
        calculate_match_score(university, profile, &self.weights)
    }

    /// Score and rank a candidate collection for a student profile.
    ///
    /// Inactive records are skipped. The sort is stable and descending by
    /// score, so ties keep their original collection order. An empty
    /// candidate set produces an empty result, not an error.
    pub fn rank(
        &self,
        profile: &StudentProfile,
        candidates: Vec<UniversityRecord>,
        limit: usize,
    ) -> RankingOutcome {
        let total_candidates = candidates.len();

        let mut matches: Vec<MatchResult> = candidates
            .into_iter()
            .filter(|university| university.is_active)
            .map(|university| {
                let match_score = self.score(&university, profile);
                MatchResult {
                    university,
                    match_score,
                }
            })
            .collect();

        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        matches.truncate(limit);

        RankingOutcome {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::reference::reference_universities;

    fn create_profile(percentage: &str, location: &str) -> StudentProfile {
        StudentProfile {
            percentage: Some(percentage.to_string()),
            stream: None,
            location_preference: Some(location.to_string()),
            budget: Some("above-20-lakh".to_string()),
            preferred_field: Some("engineering".to_string()),
            exam_scores: vec![],
        }
    }

    #[test]
    fn test_rank_sorted_descending() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile("92%", "Cambridge");

        let outcome = matcher.rank(&profile, reference_universities(), 10);

        assert_eq!(outcome.total_candidates, 8);
        for pair in outcome.matches.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn test_rank_respects_limit() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile("75%", "");

        let outcome = matcher.rank(&profile, reference_universities(), 5);

        assert_eq!(outcome.matches.len(), 5);
        assert_eq!(outcome.total_candidates, 8);
    }

    #[test]
    fn test_rank_skips_inactive() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile("75%", "");

        let mut candidates = reference_universities();
        candidates[2].is_active = false;
        let inactive_id = candidates[2].id.clone();

        let outcome = matcher.rank(&profile, candidates, 10);

        assert!(outcome.matches.iter().all(|m| m.university.id != inactive_id));
    }

    #[test]
    fn test_rank_empty_collection() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile("75%", "");

        let outcome = matcher.rank(&profile, vec![], 10);

        assert!(outcome.matches.is_empty());
        assert_eq!(outcome.total_candidates, 0);
    }

    #[test]
    fn test_ties_keep_collection_order() {
        let matcher = Matcher::with_default_weights();
        // A profile with no preferences scores many records identically
        let profile = StudentProfile::default();

        let candidates = reference_universities();
        let order: Vec<String> = candidates.iter().map(|u| u.id.clone()).collect();

        let outcome = matcher.rank(&profile, candidates, 10);

        // Among equal scores, the earlier record must come first
        for pair in outcome.matches.windows(2) {
            if pair[0].match_score == pair[1].match_score {
                let first = order.iter().position(|id| *id == pair[0].university.id);
                let second = order.iter().position(|id| *id == pair[1].university.id);
                assert!(first < second, "stable sort violated");
            }
        }
    }
}
