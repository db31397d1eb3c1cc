//! # Movie Indexer
//!
//! Demo binary for running the movie index workflow against an AWS-hosted
//! OpenSearch domain or Serverless collection.
//!
//! This crate provides the entry point, configuration, and the workflow
//! runner that executes the fixed operation sequence: create the index,
//! index a document, search it, delete the document, delete the index.

pub mod config;
pub mod workflow;

pub use config::Dependencies;
pub use workflow::{WorkflowConfig, WorkflowRunner};

use thiserror::Error;

/// Errors that can occur during demo initialization or execution.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search index error.
    #[error("Search index error: {0}")]
    SearchIndexError(#[from] movie_indexer_repository::SearchIndexError),

    /// Failed to serialize results for output.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
