use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::core::filters::{matches_criteria, matches_search};
use crate::models::{FilterCriteria, UniversityRecord};

/// Errors that can occur when talking to the hosted document store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key or project")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Async interface over the primary university collection.
///
/// The production implementation is [`DocumentStoreClient`]; tests inject an
/// in-memory implementation so the query service can be exercised
/// deterministically.
#[allow(async_fn_in_trait)]
pub trait UniversityStore {
    /// Fetch active records matching the filter criteria
    async fn find(
        &self,
        criteria: &FilterCriteria,
        limit: usize,
    ) -> Result<Vec<UniversityRecord>, StoreError>;

    /// Free-text search over active records
    async fn search(&self, query: &str, limit: usize)
        -> Result<Vec<UniversityRecord>, StoreError>;

    /// Look up a single record by identifier
    async fn get_by_id(&self, id: &str) -> Result<Option<UniversityRecord>, StoreError>;

    /// Fetch a page of active records without filtering (recommendation
    /// candidates, statistics input)
    async fn list_active(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<UniversityRecord>, StoreError>;

    /// Connectivity probe for the health endpoint
    async fn health_check(&self) -> Result<bool, StoreError>;
}

/// HTTP client for the hosted document database holding the university
/// collection.
///
/// Filter expressions are passed as an encoded JSON array of query strings;
/// responses carry a `documents` array plus a `total` count. Responses are
/// re-checked against the engine's own predicates so the service-level
/// invariants (active-only, ceilings, limits) hold even when the remote
/// index is stale.
pub struct DocumentStoreClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    collection_id: String,
    client: Client,
}

impl DocumentStoreClient {
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        collection_id: String,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            project_id,
            database_id,
            collection_id,
            client,
        })
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            self.collection_id
        )
    }

    /// Run a query expression list against the collection and decode the
    /// returned documents
    async fn query_documents(
        &self,
        queries: &[String],
    ) -> Result<Vec<UniversityRecord>, StoreError> {
        let queries_json = serde_json::to_string(queries)
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;
        let encoded = urlencoding::encode(&queries_json);
        let url = format!("{}?query={}", self.documents_url(), encoded);

        tracing::debug!("Querying university collection: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Store-Key", &self.api_key)
            .header("X-Store-Project", &self.project_id)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(StoreError::Unauthorized);
        }
        if !response.status().is_success() {
            return Err(StoreError::ApiError(format!(
                "Query failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let total = json.get("total").and_then(|t| t.as_u64()).unwrap_or(0);

        let documents = json
            .get("documents")
            .and_then(|d| d.as_array())
            .ok_or_else(|| StoreError::InvalidResponse("Missing documents array".into()))?;

        let records: Vec<UniversityRecord> = documents
            .iter()
            .filter_map(|doc| {
                let data = doc.get("data").unwrap_or(doc);
                serde_json::from_value(data.clone()).ok()
            })
            .collect();

        tracing::debug!("Decoded {} records (total: {})", records.len(), total);

        Ok(records)
    }

    fn base_queries(limit: usize) -> Vec<String> {
        vec![
            "equal(\"isActive\", true)".to_string(),
            format!("limit({})", limit),
        ]
    }
}

impl UniversityStore for DocumentStoreClient {
    async fn find(
        &self,
        criteria: &FilterCriteria,
        limit: usize,
    ) -> Result<Vec<UniversityRecord>, StoreError> {
        let mut queries = Self::base_queries(limit);

        if let Some(location) = &criteria.location {
            queries.push(format!("search(\"location\", \"{}\")", location));
        }
        if let Some(program) = &criteria.program {
            queries.push(format!("search(\"programs.name\", \"{}\")", program));
        }
        if let Some(max_tuition) = criteria.max_tuition {
            queries.push(format!(
                "lessThanEqual(\"tuition.international.undergraduate\", {})",
                max_tuition
            ));
        }
        if let Some(min_ranking) = criteria.min_ranking {
            queries.push(format!("lessThanEqual(\"ranking.global\", {})", min_ranking));
        }

        let mut records = self.query_documents(&queries).await?;
        // The remote index is advisory; the engine's predicate is the authority
        records.retain(|record| matches_criteria(record, criteria));
        records.truncate(limit);
        Ok(records)
    }

    async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<UniversityRecord>, StoreError> {
        let mut queries = Self::base_queries(limit);
        queries.push(format!("search(\"fulltext\", \"{}\")", query));

        let needle = query.to_lowercase();
        let mut records = self.query_documents(&queries).await?;
        records.retain(|record| matches_search(record, &needle));
        records.truncate(limit);
        Ok(records)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<UniversityRecord>, StoreError> {
        let url = format!("{}/{}", self.documents_url(), id);

        let response = self
            .client
            .get(&url)
            .header("X-Store-Key", &self.api_key)
            .header("X-Store-Project", &self.project_id)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(StoreError::Unauthorized);
        }
        if !response.status().is_success() {
            return Err(StoreError::ApiError(format!(
                "Lookup failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;
        let data = json.get("data").unwrap_or(&json);

        let record: UniversityRecord = serde_json::from_value(data.clone())
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse record: {}", e)))?;

        Ok(Some(record))
    }

    async fn list_active(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<UniversityRecord>, StoreError> {
        let mut queries = Self::base_queries(limit);
        if offset > 0 {
            queries.push(format!("offset({})", offset));
        }
        let mut records = self.query_documents(&queries).await?;
        records.retain(|record| record.is_active);
        records.truncate(limit);
        Ok(records)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        let queries = vec!["limit(1)".to_string()];
        self.query_documents(&queries).await.map(|_| true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> DocumentStoreClient {
        DocumentStoreClient::new(
            base_url.to_string(),
            "test_key".to_string(),
            "test_project".to_string(),
            "test_db".to_string(),
            "universities".to_string(),
        )
        .unwrap()
    }

    fn document_body() -> String {
        serde_json::json!({
            "total": 2,
            "documents": [
                {
                    "id": "u1",
                    "name": "Test University",
                    "location": { "country": "USA", "city": "Boston" },
                    "acceptanceRate": 20.0,
                    "isActive": true
                },
                {
                    "id": "u2",
                    "name": "Dormant College",
                    "location": { "country": "USA", "city": "Boston" },
                    "isActive": false
                }
            ]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_list_active_drops_inactive_rows() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock(
                "GET",
                mockito::Matcher::Regex(r"^/databases/test_db/collections/universities/documents.*".to_string()),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(document_body())
            .create_async()
            .await;

        let client = test_client(&server.url());
        let records = client.list_active(100, 0).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "u1");
    }

    #[tokio::test]
    async fn test_get_by_id_not_found_is_none() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock(
                "GET",
                "/databases/test_db/collections/universities/documents/missing",
            )
            .with_status(404)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let record = client.get_by_id("missing").await.unwrap();

        assert!(record.is_none());
    }

    #[tokio::test]
    async fn test_server_error_surfaces_as_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock(
                "GET",
                mockito::Matcher::Regex(r"^/databases/.*".to_string()),
            )
            .with_status(500)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let result = client.list_active(10, 0).await;

        assert!(matches!(result, Err(StoreError::ApiError(_))));
    }
}
