//! Configuration for the movie indexer demo.

mod dependencies;

pub use dependencies::{Dependencies, Settings};
