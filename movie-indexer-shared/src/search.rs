//! Search result types.

use serde::{Deserialize, Serialize};

use crate::document::MovieDocument;

/// A single search hit returned by the search index.
///
/// Wraps the indexed document together with the identifier and relevance
/// score the search engine assigned to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// The document identifier.
    pub id: String,
    /// Relevance score assigned by the search engine.
    pub score: f64,
    /// The indexed document.
    pub source: MovieDocument,
}
