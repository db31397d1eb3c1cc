//! # Movie Indexer Shared
//!
//! Shared types and data structures for the movie index demo. These types
//! are used by both the repository layer and the demo binary.

mod document;
mod search;

pub use document::MovieDocument;
pub use search::SearchHit;
