//! Configuration types for the search index connection.

/// Default SigV4 service name for a managed OpenSearch domain.
///
/// Use `"aoss"` for an OpenSearch Serverless collection.
pub const DEFAULT_SERVICE: &str = "es";

/// Default name of the movies index.
pub const DEFAULT_INDEX: &str = "movies";

/// Configuration for connecting to the search index.
#[derive(Debug, Clone)]
pub struct SearchIndexConfig {
    /// The cluster endpoint URL (e.g. "https://my-domain.us-east-1.es.amazonaws.com").
    pub endpoint: String,
    /// The SigV4 service name used to sign requests ("es" or "aoss").
    pub service: String,
    /// The name of the index all operations target.
    pub index: String,
}

impl SearchIndexConfig {
    /// Create a config for the given endpoint with default service and index.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            service: DEFAULT_SERVICE.to_string(),
            index: DEFAULT_INDEX.to_string(),
        }
    }

    /// Set the SigV4 service name (e.g. "aoss" for Serverless).
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    /// Set the target index name.
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }

    /// Whether the configured service serves the cluster root endpoint.
    ///
    /// Serverless collections ("aoss") do not respond to `GET /`, so callers
    /// should skip the cluster info request for them.
    pub fn serves_root(&self) -> bool {
        self.service == DEFAULT_SERVICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchIndexConfig::new("https://example.com");

        assert_eq!(config.endpoint, "https://example.com");
        assert_eq!(config.service, "es");
        assert_eq!(config.index, "movies");
        assert!(config.serves_root());
    }

    #[test]
    fn test_serverless_service() {
        let config = SearchIndexConfig::new("https://example.com").with_service("aoss");

        assert_eq!(config.service, "aoss");
        assert!(!config.serves_root());
    }

    #[test]
    fn test_custom_index() {
        let config = SearchIndexConfig::new("https://example.com").with_index("films");

        assert_eq!(config.index, "films");
    }
}
