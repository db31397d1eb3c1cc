//! Workflow runner for the movie index demo.
//!
//! Executes the fixed operation sequence against the search index: report
//! cluster info, create the index, index a document, search it, delete the
//! document, delete the index. The first unrecovered error aborts the run.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::IndexingError;
use movie_indexer_repository::{IndexCreation, SearchIndexProvider};
use movie_indexer_shared::MovieDocument;

/// Configuration for the workflow runner.
#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    /// Identifier for the demo document.
    pub document_id: String,
    /// Free-text query used in the search step.
    pub query: String,
    /// How long to wait after indexing before searching. The index is
    /// near-real-time, so a freshly indexed document is not immediately
    /// searchable.
    pub settle_delay: Duration,
    /// Whether to request cluster info before running. Serverless
    /// collections don't serve the root endpoint, so this is disabled
    /// for them.
    pub report_cluster_info: bool,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            document_id: "1".to_string(),
            query: "miller".to_string(),
            settle_delay: Duration::from_secs(3),
            report_cluster_info: true,
        }
    }
}

/// Runner that executes the demo workflow against a search index provider.
///
/// The provider is injected so the workflow can be exercised against a mock
/// in tests and against OpenSearch in production.
pub struct WorkflowRunner {
    provider: Arc<dyn SearchIndexProvider>,
    config: WorkflowConfig,
}

impl WorkflowRunner {
    /// Create a new workflow runner with default configuration.
    pub fn new(provider: Arc<dyn SearchIndexProvider>) -> Self {
        Self {
            provider,
            config: WorkflowConfig::default(),
        }
    }

    /// Create a new workflow runner with custom configuration.
    pub fn with_config(provider: Arc<dyn SearchIndexProvider>, config: WorkflowConfig) -> Self {
        Self { provider, config }
    }

    /// Run the workflow.
    ///
    /// Executes the operation sequence in order and returns on the first
    /// unrecovered error. The only tolerated failure is an index that
    /// already exists at creation time.
    #[instrument(skip(self))]
    pub async fn run(&self) -> Result<(), IndexingError> {
        info!("Starting movie index workflow");

        if self.config.report_cluster_info {
            let cluster = self.provider.cluster_info().await?;
            println!("{}: {}", cluster.distribution, cluster.version);
        }

        match self.provider.create_index().await? {
            IndexCreation::Created => info!("Search index ready"),
            IndexCreation::AlreadyExists => {
                warn!("Index already exists, continuing")
            }
        }

        let document = sample_document();
        self.provider
            .index_document(&self.config.document_id, &document)
            .await?;

        info!(
            delay_secs = self.config.settle_delay.as_secs(),
            "Waiting for the document to become searchable"
        );
        tokio::time::sleep(self.config.settle_delay).await;

        let hits = self.provider.search(&self.config.query).await?;
        info!(hit_count = hits.len(), query = %self.config.query, "Search returned");
        println!("{}", serde_json::to_string_pretty(&hits)?);

        self.provider
            .delete_document(&self.config.document_id)
            .await?;

        self.provider.delete_index().await?;

        info!("Workflow complete");
        Ok(())
    }
}

/// The document the demo indexes and searches for.
fn sample_document() -> MovieDocument {
    MovieDocument::new("Moneyball", "Bennett Miller", "2011")
}
