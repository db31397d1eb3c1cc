//! Search index provider trait definition.
//!
//! This module defines the abstract interface for search index operations,
//! allowing for different backend implementations (OpenSearch, Elasticsearch,
//! etc.).

use async_trait::async_trait;

use crate::errors::SearchIndexError;
use crate::types::{ClusterInfo, IndexCreation};
use movie_indexer_shared::{MovieDocument, SearchHit};

/// Abstracts the underlying search index implementation (OpenSearch,
/// Elasticsearch, etc.).
///
/// This trait defines the interface the demo workflow runs against.
/// Implementations are injected into the workflow runner to enable dependency
/// injection and easy testing with mock implementations.
///
/// All methods return `Result<T, SearchIndexError>` for consistent error
/// handling across different backend implementations.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Fetch cluster identification from the root endpoint.
    ///
    /// Not supported by OpenSearch Serverless collections; callers should
    /// check `SearchIndexConfig::serves_root` before calling.
    ///
    /// # Returns
    ///
    /// * `Ok(ClusterInfo)` - The engine distribution and version
    /// * `Err(SearchIndexError)` - If the request fails
    async fn cluster_info(&self) -> Result<ClusterInfo, SearchIndexError>;

    /// Create the configured index.
    ///
    /// An index that already exists is not treated as an error; the outcome
    /// reports which of the two cases occurred.
    ///
    /// # Returns
    ///
    /// * `Ok(IndexCreation::Created)` - The index was created
    /// * `Ok(IndexCreation::AlreadyExists)` - The index already existed
    /// * `Err(SearchIndexError)` - If creation fails for any other reason
    async fn create_index(&self) -> Result<IndexCreation, SearchIndexError>;

    /// Index a single document under the given identifier.
    ///
    /// If a document with the same ID already exists, it will be replaced.
    ///
    /// # Arguments
    ///
    /// * `id` - The document identifier
    /// * `document` - The movie document to index
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the document was indexed successfully
    /// * `Err(SearchIndexError)` - If indexing fails
    async fn index_document(
        &self,
        id: &str,
        document: &MovieDocument,
    ) -> Result<(), SearchIndexError>;

    /// Search the index for documents matching the query text.
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text query matched against title and director
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<SearchHit>)` - Matching documents ordered by relevance
    /// * `Err(SearchIndexError)` - If the search fails
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchIndexError>;

    /// Delete a document from the index.
    ///
    /// If the document doesn't exist, the operation is considered successful.
    ///
    /// # Arguments
    ///
    /// * `id` - The document identifier
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the document was deleted (or didn't exist)
    /// * `Err(SearchIndexError)` - If the deletion fails
    async fn delete_document(&self, id: &str) -> Result<(), SearchIndexError>;

    /// Delete the configured index.
    ///
    /// A missing index is not treated as an error.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index was deleted (or didn't exist)
    /// * `Err(SearchIndexError)` - If the deletion fails
    async fn delete_index(&self) -> Result<(), SearchIndexError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    /// Minimal provider backing the trait-object dispatch test.
    struct StaticProvider;

    #[async_trait]
    impl SearchIndexProvider for StaticProvider {
        async fn cluster_info(&self) -> Result<ClusterInfo, SearchIndexError> {
            Ok(ClusterInfo {
                distribution: "opensearch".to_string(),
                version: "2.11.1".to_string(),
            })
        }

        async fn create_index(&self) -> Result<IndexCreation, SearchIndexError> {
            Ok(IndexCreation::Created)
        }

        async fn index_document(
            &self,
            _id: &str,
            _document: &MovieDocument,
        ) -> Result<(), SearchIndexError> {
            Ok(())
        }

        async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchIndexError> {
            if query.is_empty() {
                return Err(SearchIndexError::query("query text is empty"));
            }
            Ok(Vec::new())
        }

        async fn delete_document(&self, _id: &str) -> Result<(), SearchIndexError> {
            Ok(())
        }

        async fn delete_index(&self) -> Result<(), SearchIndexError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_dispatches_through_trait_object() {
        // Callers hold providers as Arc<dyn SearchIndexProvider>, so the
        // trait has to stay object safe and dispatch async calls through
        // the erased type.
        let provider: Arc<dyn SearchIndexProvider> = Arc::new(StaticProvider);

        let info = provider.cluster_info().await.unwrap();
        assert_eq!(info.distribution, "opensearch");
        assert_eq!(info.version, "2.11.1");

        assert_eq!(
            provider.create_index().await.unwrap(),
            IndexCreation::Created
        );
        assert!(provider.search("miller").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_errors_propagate_through_trait_object() {
        let provider: Arc<dyn SearchIndexProvider> = Arc::new(StaticProvider);

        let result = provider.search("").await;

        assert!(matches!(result, Err(SearchIndexError::QueryError(_))));
    }
}
