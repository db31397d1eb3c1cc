//! Operation result types for search index operations.

/// Cluster identification reported by the root endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterInfo {
    /// The engine distribution (e.g. "opensearch").
    pub distribution: String,
    /// The engine version number.
    pub version: String,
}

/// Outcome of an index creation request.
///
/// Creating an index that already exists is not an error for the demo
/// workflow, so the outcome distinguishes the two success cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexCreation {
    /// The index was created.
    Created,
    /// The index already existed and was left untouched.
    AlreadyExists,
}
