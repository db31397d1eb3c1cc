//! # Movie Indexer Repository
//!
//! This crate provides traits and implementations for interacting with the
//! search engine that backs the movie index demo. It includes definitions for
//! errors, interfaces, and a concrete implementation for OpenSearch with AWS
//! SigV4 request signing.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod types;

pub use config::SearchIndexConfig;
pub use errors::SearchIndexError;
pub use interfaces::SearchIndexProvider;
pub use opensearch::OpenSearchClient;
pub use types::{ClusterInfo, IndexCreation};
