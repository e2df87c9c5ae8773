use crate::core::{filters, stats, Matcher};
use crate::models::{
    FilterCriteria, RecommendationsResponse, SearchResponse, StatisticsResponse, StudentProfile,
    UniversityListResponse, UniversityRecord, UniversityResponse,
};
use crate::services::reference::FallbackPolicy;
use crate::services::store::UniversityStore;

/// Cap on rows fetched from the primary store per query
const QUERY_LIMIT: usize = 100;

/// Default number of search results when the caller does not specify one
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Recommendations are capped at the top five matches
const RECOMMENDATION_COUNT: usize = 5;

/// Page size used when draining the active collection for statistics
const STATS_PAGE_SIZE: usize = 100;

/// University query service: primary-store queries with an explicit
/// empty-primary fallback to the bundled reference dataset.
///
/// Every operation catches store failures at this boundary, logs them, and
/// returns a `success=false` envelope; nothing propagates as an error to
/// the HTTP layer. The store handle, reference dataset, fallback policy and
/// matcher are all injected at construction so the service carries no
/// global state.
pub struct QueryService<S> {
    store: S,
    reference: Vec<UniversityRecord>,
    fallback: FallbackPolicy,
    matcher: Matcher,
}

impl<S: UniversityStore> QueryService<S> {
    pub fn new(
        store: S,
        reference: Vec<UniversityRecord>,
        fallback: FallbackPolicy,
        matcher: Matcher,
    ) -> Self {
        Self {
            store,
            reference,
            fallback,
            matcher,
        }
    }

    fn fallback_enabled(&self) -> bool {
        self.fallback == FallbackPolicy::UseReferenceDataset
    }

    /// Get all universities matching the optional filter criteria.
    ///
    /// Zero rows from the primary store re-runs the same filter against the
    /// reference dataset when the fallback policy allows it; a non-empty
    /// primary result is never replaced.
    pub async fn get_all_universities(&self, criteria: FilterCriteria) -> UniversityListResponse {
        match self.store.find(&criteria, QUERY_LIMIT).await {
            Ok(records) if !records.is_empty() => {
                let total = records.len();
                UniversityListResponse {
                    success: true,
                    data: records,
                    total,
                    filters: criteria,
                    error: None,
                }
            }
            Ok(_) => {
                let data: Vec<UniversityRecord> = if self.fallback_enabled() {
                    tracing::warn!("No universities in primary store, using reference dataset");
                    filters::filter_by_criteria(&self.reference, &criteria)
                        .into_iter()
                        .cloned()
                        .collect()
                } else {
                    vec![]
                };
                let total = data.len();
                UniversityListResponse {
                    success: true,
                    data,
                    total,
                    filters: criteria,
                    error: None,
                }
            }
            Err(e) => {
                tracing::error!("Failed to query universities: {}", e);
                UniversityListResponse {
                    success: false,
                    data: vec![],
                    total: 0,
                    filters: criteria,
                    error: Some("Failed to retrieve universities".to_string()),
                }
            }
        }
    }

    /// Free-text search over the collection, capped at `limit` results
    pub async fn search_universities(&self, query: &str, limit: usize) -> SearchResponse {
        match self.store.search(query, limit).await {
            Ok(records) if !records.is_empty() => {
                let total = records.len();
                SearchResponse {
                    success: true,
                    data: records,
                    total,
                    query: query.to_string(),
                    error: None,
                }
            }
            Ok(_) => {
                let data: Vec<UniversityRecord> = if self.fallback_enabled() {
                    tracing::warn!("No search results in primary store, using reference dataset");
                    filters::search(&self.reference, query, limit)
                        .into_iter()
                        .cloned()
                        .collect()
                } else {
                    vec![]
                };
                let total = data.len();
                SearchResponse {
                    success: true,
                    data,
                    total,
                    query: query.to_string(),
                    error: None,
                }
            }
            Err(e) => {
                tracing::error!("Failed to search universities: {}", e);
                SearchResponse {
                    success: false,
                    data: vec![],
                    total: 0,
                    query: query.to_string(),
                    error: Some("Failed to search universities".to_string()),
                }
            }
        }
    }

    /// Look up a single record, checking the reference dataset before
    /// reporting not-found
    pub async fn get_university_by_id(&self, id: &str) -> UniversityResponse {
        match self.store.get_by_id(id).await {
            Ok(Some(record)) => UniversityResponse {
                success: true,
                data: Some(record),
                error: None,
            },
            Ok(None) => {
                let fallback_record = if self.fallback_enabled() {
                    tracing::warn!("University {} not in primary store, checking reference", id);
                    self.reference.iter().find(|r| r.id == id).cloned()
                } else {
                    None
                };

                match fallback_record {
                    Some(record) => UniversityResponse {
                        success: true,
                        data: Some(record),
                        error: None,
                    },
                    None => UniversityResponse {
                        success: false,
                        data: None,
                        error: Some("University not found".to_string()),
                    },
                }
            }
            Err(e) => {
                tracing::error!("Failed to fetch university {}: {}", id, e);
                UniversityResponse {
                    success: false,
                    data: None,
                    error: Some("Failed to retrieve university".to_string()),
                }
            }
        }
    }

    /// Score the candidate collection against the student profile and
    /// return the top five matches, ranked descending
    pub async fn get_recommendations(&self, profile: StudentProfile) -> RecommendationsResponse {
        let candidates = match self.store.list_active(QUERY_LIMIT, 0).await {
            Ok(records) if !records.is_empty() => records,
            Ok(_) => {
                if self.fallback_enabled() {
                    tracing::warn!("No candidates in primary store, using reference dataset");
                    self.reference.clone()
                } else {
                    vec![]
                }
            }
            Err(e) => {
                tracing::error!("Failed to load recommendation candidates: {}", e);
                return RecommendationsResponse {
                    success: false,
                    data: vec![],
                    total: 0,
                    profile: None,
                    error: Some("Failed to generate recommendations".to_string()),
                };
            }
        };

        let outcome = self
            .matcher
            .rank(&profile, candidates, RECOMMENDATION_COUNT);

        tracing::info!(
            "Ranked {} candidates, returning {} recommendations",
            outcome.total_candidates,
            outcome.matches.len()
        );

        let total = outcome.matches.len();
        RecommendationsResponse {
            success: true,
            data: outcome.matches,
            total,
            profile: Some(profile),
            error: None,
        }
    }

    /// Aggregate statistics over the active collection.
    ///
    /// Statistics must cover every active record, so the store is paged
    /// until exhaustion rather than capped at a single fetch.
    pub async fn get_statistics(&self) -> StatisticsResponse {
        let mut records: Vec<UniversityRecord> = Vec::new();
        let mut offset = 0;
        loop {
            let page = match self.store.list_active(STATS_PAGE_SIZE, offset).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::error!("Failed to load statistics input: {}", e);
                    return StatisticsResponse {
                        success: false,
                        data: None,
                        error: Some("Failed to retrieve statistics".to_string()),
                    };
                }
            };

            let fetched = page.len();
            records.extend(page);
            if fetched < STATS_PAGE_SIZE {
                break;
            }
            offset += fetched;
        }

        if records.is_empty() && self.fallback_enabled() {
            tracing::warn!("No statistics input in primary store, using reference dataset");
            records = self.reference.clone();
        }

        StatisticsResponse {
            success: true,
            data: Some(stats::compute_statistics(&records)),
            error: None,
        }
    }

    /// Probe the primary store for the health endpoint
    pub async fn store_healthy(&self) -> bool {
        self.store.health_check().await.unwrap_or(false)
    }
}
