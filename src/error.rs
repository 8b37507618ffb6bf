/*!
# Errors

Every operation that the graph cannot apply to its current state returns a [`GraphError`]
instead of silently doing nothing. Reading and writing graphs keeps using `std::io::Error`
(see [`crate::io`]).
*/

use thiserror::Error;

/// Reasons why a graph operation is not applicable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex passed to an operation is not part of the graph
    #[error("vertex {0} is not part of the graph")]
    MissingVertex(String),

    /// The operation is only defined on directed graphs
    #[error("operation requires a directed graph")]
    NotDirected,

    /// The operation is only defined on undirected graphs
    #[error("operation requires an undirected graph")]
    NotUndirected,

    /// Clustering needs a disjoint-set that tracks the number of live sets
    #[error("single-link clustering requires a disjoint-set that counts its sets (use the list variant)")]
    UncountedDisjointSet,
}

impl GraphError {
    /// Shorthand for [`GraphError::MissingVertex`] on any printable key
    pub fn missing<K: std::fmt::Display>(key: &K) -> Self {
        Self::MissingVertex(key.to_string())
    }
}

/// Result-Type used throughout the crate
pub type Result<T> = std::result::Result<T, GraphError>;
