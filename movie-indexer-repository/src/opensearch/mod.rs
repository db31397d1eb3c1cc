//! OpenSearch implementation of the search index provider.

mod client;
mod index_config;
mod queries;

pub use client::OpenSearchClient;

pub(crate) use index_config::movies_index_body;
pub(crate) use queries::build_movie_query;
