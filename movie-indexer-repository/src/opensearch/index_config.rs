//! OpenSearch index configuration and mappings.
//!
//! This module defines the index settings and mappings for the movies index.

use serde_json::{json, Value};

/// Get the index settings and mappings for the movies index.
///
/// The configuration includes:
/// - **text** fields for `title` and `director`, the fields the demo
///   searches with a multi-match query
/// - **keyword** field for `year`, which is only ever filtered or displayed
///
/// A single shard with one replica is plenty for a demo-sized index.
pub fn movies_index_body() -> Value {
    json!({
        "settings": {
            "index": {
                "number_of_shards": 1,
                "number_of_replicas": 1
            }
        },
        "mappings": {
            "properties": {
                "title": {
                    "type": "text"
                },
                "director": {
                    "type": "text"
                },
                "year": {
                    "type": "keyword"
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mappings_cover_document_fields() {
        let body = movies_index_body();
        let properties = &body["mappings"]["properties"];

        assert_eq!(properties["title"]["type"], "text");
        assert_eq!(properties["director"]["type"], "text");
        assert_eq!(properties["year"]["type"], "keyword");
    }

    #[test]
    fn test_single_shard_settings() {
        let body = movies_index_body();

        assert_eq!(body["settings"]["index"]["number_of_shards"], 1);
        assert_eq!(body["settings"]["index"]["number_of_replicas"], 1);
    }
}
