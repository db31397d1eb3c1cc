//! Dependency initialization and wiring for the demo workflow.

use std::env;
use std::sync::Arc;

use aws_config::BehaviorVersion;
use tracing::info;

use crate::workflow::{WorkflowConfig, WorkflowRunner};
use crate::IndexingError;
use movie_indexer_repository::config::DEFAULT_SERVICE;
use movie_indexer_repository::{OpenSearchClient, SearchIndexConfig};

/// Settings read from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// The cluster endpoint URL.
    pub endpoint: String,
    /// The SigV4 service name ("es" or "aoss").
    pub service: String,
}

impl Settings {
    /// Create settings from explicit values, applying the service default.
    pub fn new(endpoint: impl Into<String>, service: Option<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            service: service.unwrap_or_else(|| DEFAULT_SERVICE.to_string()),
        }
    }

    /// Read settings from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `ENDPOINT`: Cluster endpoint URL (required)
    /// - `SERVICE`: SigV4 service name, "aoss" for Serverless (default: "es")
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - Parsed settings
    /// * `Err(IndexingError)` - If `ENDPOINT` is not set
    pub fn from_env() -> Result<Self, IndexingError> {
        let endpoint = env::var("ENDPOINT").map_err(|_| IndexingError::config("ENDPOINT missing"))?;
        let service = env::var("SERVICE").ok();

        Ok(Self::new(endpoint, service))
    }
}

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured workflow runner ready to run.
    pub runner: WorkflowRunner,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// Loads AWS credentials from the default provider chain and builds the
    /// SigV4-signed OpenSearch client.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If initialization fails
    pub async fn new() -> Result<Self, IndexingError> {
        let settings = Settings::from_env()?;

        info!(
            endpoint = %settings.endpoint,
            service = %settings.service,
            "Initializing dependencies"
        );

        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;

        let index_config =
            SearchIndexConfig::new(&settings.endpoint).with_service(&settings.service);
        // Serverless collections don't serve GET /, so skip cluster info there.
        let workflow_config = WorkflowConfig {
            report_cluster_info: index_config.serves_root(),
            ..WorkflowConfig::default()
        };

        let client = OpenSearchClient::new(&sdk_config, index_config)?;
        let runner = WorkflowRunner::with_config(Arc::new(client), workflow_config);

        Ok(Self { runner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_service() {
        let settings = Settings::new("https://example.com", None);

        assert_eq!(settings.endpoint, "https://example.com");
        assert_eq!(settings.service, "es");
        // The default has to stay the repository's, so a config built from
        // these settings still reports serves_root for it.
        assert_eq!(settings.service, DEFAULT_SERVICE);
    }

    #[test]
    fn test_settings_explicit_service() {
        let settings = Settings::new("https://example.com", Some("aoss".to_string()));

        assert_eq!(settings.service, "aoss");
    }

    #[test]
    fn test_from_env_requires_endpoint() {
        // ENDPOINT is deliberately not set in the test environment.
        std::env::remove_var("ENDPOINT");

        let result = Settings::from_env();

        assert!(matches!(result, Err(IndexingError::ConfigError(_))));
    }
}
