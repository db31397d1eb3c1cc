//! OpenSearch query builders.
//!
//! This module provides functions to build the search queries issued against
//! the movies index.

use serde_json::{json, Value};

/// Build a multi-match query over the movie text fields.
///
/// The title field is boosted over director so that title matches rank
/// first when the query text appears in both.
pub fn build_movie_query(query_text: &str) -> Value {
    json!({
        "query": {
            "multi_match": {
                "query": query_text,
                "fields": ["title^2", "director"]
            }
        }
    })
}
