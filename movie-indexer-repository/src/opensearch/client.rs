//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! using the OpenSearch Rust client with AWS SigV4 request signing.

use async_trait::async_trait;
use aws_config::SdkConfig;
use opensearch::{
    auth::Credentials,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesDeleteParts},
    DeleteParts, IndexParts, OpenSearch, SearchParts,
};
use serde_json::Value;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::config::SearchIndexConfig;
use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::opensearch::{build_movie_query, movies_index_body};
use crate::types::{ClusterInfo, IndexCreation};
use movie_indexer_shared::{MovieDocument, SearchHit};

/// The error type OpenSearch reports when creating an index that exists.
const ALREADY_EXISTS_EXCEPTION: &str = "resource_already_exists_exception";

/// OpenSearch client implementation.
///
/// Signs every request with AWS SigV4 using credentials resolved from the
/// default provider chain, so it works against both managed OpenSearch
/// domains (service `"es"`) and Serverless collections (service `"aoss"`).
///
/// # Example
///
/// ```ignore
/// use movie_indexer_repository::{OpenSearchClient, SearchIndexConfig};
///
/// let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
/// let config = SearchIndexConfig::new("https://my-domain.us-east-1.es.amazonaws.com");
/// let client = OpenSearchClient::new(&sdk_config, config)?;
///
/// client.create_index().await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
    config: SearchIndexConfig,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client for the configured endpoint.
    ///
    /// # Arguments
    ///
    /// * `sdk_config` - Loaded AWS configuration supplying credentials and region
    /// * `config` - The connection configuration (endpoint, service, index)
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchIndexError)` - If the endpoint is invalid or no AWS
    ///   credentials/region could be resolved
    pub fn new(
        sdk_config: &SdkConfig,
        config: SearchIndexConfig,
    ) -> Result<Self, SearchIndexError> {
        let parsed_url = Url::parse(&config.endpoint)
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let credentials_provider = sdk_config.credentials_provider().ok_or_else(|| {
            SearchIndexError::credentials("no AWS credentials provider resolved")
        })?;
        let region = sdk_config
            .region()
            .cloned()
            .ok_or_else(|| SearchIndexError::credentials("no AWS region resolved"))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .auth(Credentials::AwsSigV4(credentials_provider, region))
            .service_name(&config.service)
            .disable_proxy()
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(
            endpoint = %config.endpoint,
            service = %config.service,
            index = %config.index,
            "Created OpenSearch client"
        );

        Ok(Self { client, config })
    }

    /// Parse cluster identification from the root endpoint response body.
    fn parse_cluster_info(body: &Value) -> Result<ClusterInfo, SearchIndexError> {
        let version = body
            .get("version")
            .ok_or_else(|| SearchIndexError::parse("cluster info missing version"))?;

        // Older Elasticsearch-compatible distributions omit the field.
        let distribution = version
            .get("distribution")
            .and_then(Value::as_str)
            .unwrap_or("elasticsearch")
            .to_string();
        let number = version
            .get("number")
            .and_then(Value::as_str)
            .ok_or_else(|| SearchIndexError::parse("cluster info missing version.number"))?
            .to_string();

        Ok(ClusterInfo {
            distribution,
            version: number,
        })
    }

    /// Parse a single search hit into a `SearchHit`.
    fn parse_hit(hit: &Value) -> Result<SearchHit, SearchIndexError> {
        let id = hit
            .get("_id")
            .and_then(Value::as_str)
            .ok_or_else(|| SearchIndexError::parse("search hit missing _id"))?
            .to_string();

        let score = hit.get("_score").and_then(Value::as_f64).unwrap_or(0.0);

        let source = hit
            .get("_source")
            .ok_or_else(|| SearchIndexError::parse("search hit missing _source"))?;
        let source: MovieDocument = serde_json::from_value(source.clone())
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;

        Ok(SearchHit { id, score, source })
    }
}

/// Check whether an error response body reports an already-existing index.
fn is_already_exists(body: &str) -> bool {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("type"))
                .and_then(Value::as_str)
                .map(|t| t == ALREADY_EXISTS_EXCEPTION)
        })
        .unwrap_or(false)
}

#[async_trait]
impl SearchIndexProvider for OpenSearchClient {
    /// Fetch cluster identification from the root endpoint.
    ///
    /// Serverless collections do not serve `GET /`; the workflow skips this
    /// call for them based on the configured service name.
    async fn cluster_info(&self) -> Result<ClusterInfo, SearchIndexError> {
        let response = self
            .client
            .info()
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Cluster info request failed");
            return Err(SearchIndexError::response(status.as_u16(), error_body));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;

        Self::parse_cluster_info(&body)
    }

    /// Create the movies index with its settings and mappings.
    ///
    /// Waits for one active shard before returning, so a document indexed
    /// right after creation does not race the shard allocation. An index
    /// that already exists is reported as `IndexCreation::AlreadyExists`.
    async fn create_index(&self) -> Result<IndexCreation, SearchIndexError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(&self.config.index))
            .wait_for_active_shards("1")
            .body(movies_index_body())
            .send()
            .await
            .map_err(|e| SearchIndexError::index_creation(e.to_string()))?;

        let status = response.status_code();
        if status.is_success() {
            info!(index = %self.config.index, "Index created");
            return Ok(IndexCreation::Created);
        }

        let error_body = response.text().await.unwrap_or_default();
        if is_already_exists(&error_body) {
            debug!(index = %self.config.index, "Index already exists");
            return Ok(IndexCreation::AlreadyExists);
        }

        error!(status = %status, body = %error_body, "Index creation failed");
        Err(SearchIndexError::response(status.as_u16(), error_body))
    }

    /// Index a single document, replacing any existing document with the
    /// same ID.
    async fn index_document(
        &self,
        id: &str,
        document: &MovieDocument,
    ) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .index(IndexParts::IndexId(&self.config.index, id))
            .body(document)
            .send()
            .await
            .map_err(|e| SearchIndexError::index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index request failed");
            return Err(SearchIndexError::response(status.as_u16(), error_body));
        }

        debug!(index = %self.config.index, doc_id = %id, "Document indexed");
        Ok(())
    }

    /// Search the movies index and return hits ordered by relevance.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchIndexError> {
        let body = build_movie_query(query);

        let response = self
            .client
            .search(SearchParts::Index(&[&self.config.index]))
            .body(body)
            .send()
            .await
            .map_err(|e| SearchIndexError::query(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Search request failed");
            return Err(SearchIndexError::response(status.as_u16(), error_body));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;

        let hits = body
            .get("hits")
            .and_then(|h| h.get("hits"))
            .and_then(Value::as_array)
            .ok_or_else(|| SearchIndexError::parse("search response missing hits"))?;

        let results = hits
            .iter()
            .map(Self::parse_hit)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(query = %query, hit_count = results.len(), "Search completed");
        Ok(results)
    }

    /// Delete a document from the movies index.
    async fn delete_document(&self, id: &str) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .delete(DeleteParts::IndexId(&self.config.index, id))
            .send()
            .await
            .map_err(|e| SearchIndexError::delete(e.to_string()))?;

        let status = response.status_code();

        // 404 is acceptable - document may not exist
        if !status.is_success() && status.as_u16() != 404 {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Delete request failed");
            return Err(SearchIndexError::response(status.as_u16(), error_body));
        }

        debug!(index = %self.config.index, doc_id = %id, "Document deleted");
        Ok(())
    }

    /// Delete the movies index, tolerating a missing index.
    async fn delete_index(&self) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[&self.config.index]))
            .ignore_unavailable(true)
            .send()
            .await
            .map_err(|e| SearchIndexError::index_deletion(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %error_body, "Index deletion failed");
            return Err(SearchIndexError::response(status.as_u16(), error_body));
        }

        info!(index = %self.config.index, "Index deleted");
        Ok(())
    }
}
