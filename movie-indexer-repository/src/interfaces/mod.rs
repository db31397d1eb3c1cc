//! Interface definitions for the movie indexer repository.

mod search_index_provider;

pub use search_index_provider::SearchIndexProvider;
