//! Search index error types.
//!
//! This module defines the error types that can occur during search index
//! operations.

use thiserror::Error;

/// Errors that can occur during search index operations.
#[derive(Debug, Error)]
pub enum SearchIndexError {
    /// Failed to establish connection to the search engine.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// AWS credentials or region could not be resolved for request signing.
    #[error("Credentials error: {0}")]
    CredentialsError(String),

    /// Failed to create the search index.
    #[error("Index creation error: {0}")]
    IndexCreationError(String),

    /// Failed to delete the search index.
    #[error("Index deletion error: {0}")]
    IndexDeletionError(String),

    /// Failed to index a document.
    #[error("Index error: {0}")]
    IndexError(String),

    /// Failed to delete a document.
    #[error("Delete error: {0}")]
    DeleteError(String),

    /// Search query execution failed.
    #[error("Query error: {0}")]
    QueryError(String),

    /// The search engine returned a non-success response.
    #[error("status: {status}, msg: {body}")]
    ResponseError {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Failed to parse a response from the search engine.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl SearchIndexError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a credentials error.
    pub fn credentials(msg: impl Into<String>) -> Self {
        Self::CredentialsError(msg.into())
    }

    /// Create an index creation error.
    pub fn index_creation(msg: impl Into<String>) -> Self {
        Self::IndexCreationError(msg.into())
    }

    /// Create an index deletion error.
    pub fn index_deletion(msg: impl Into<String>) -> Self {
        Self::IndexDeletionError(msg.into())
    }

    /// Create an index error.
    pub fn index(msg: impl Into<String>) -> Self {
        Self::IndexError(msg.into())
    }

    /// Create a delete error.
    pub fn delete(msg: impl Into<String>) -> Self {
        Self::DeleteError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create a response error from a status code and body.
    pub fn response(status: u16, body: impl Into<String>) -> Self {
        Self::ResponseError {
            status,
            body: body.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_display() {
        let err = SearchIndexError::response(403, "User is not authorized");

        assert_eq!(err.to_string(), "status: 403, msg: User is not authorized");
    }

    #[test]
    fn test_helper_constructors() {
        assert!(matches!(
            SearchIndexError::connection("bad url"),
            SearchIndexError::ConnectionError(_)
        ));
        assert!(matches!(
            SearchIndexError::credentials("no region"),
            SearchIndexError::CredentialsError(_)
        ));
        assert!(matches!(
            SearchIndexError::query("timed out"),
            SearchIndexError::QueryError(_)
        ));
    }
}
