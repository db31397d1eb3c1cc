//! The movie document stored in the search index.

use serde::{Deserialize, Serialize};

/// A single movie record.
///
/// This is the only document shape the demo indexes. `year` is kept as a
/// string to match the payload the index was designed around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDocument {
    /// The movie's title.
    pub title: String,
    /// The movie's director.
    pub director: String,
    /// Release year.
    pub year: String,
}

impl MovieDocument {
    /// Create a new movie document.
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            year: year.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_string_year() {
        let document = MovieDocument::new("Moneyball", "Bennett Miller", "2011");

        let value = serde_json::to_value(&document).unwrap();

        assert_eq!(
            value,
            json!({
                "title": "Moneyball",
                "director": "Bennett Miller",
                "year": "2011"
            })
        );
    }

    #[test]
    fn test_deserializes_from_source_payload() {
        let source = json!({
            "title": "Moneyball",
            "director": "Bennett Miller",
            "year": "2011"
        });

        let document: MovieDocument = serde_json::from_value(source).unwrap();

        assert_eq!(document.title, "Moneyball");
        assert_eq!(document.director, "Bennett Miller");
        assert_eq!(document.year, "2011");
    }
}
