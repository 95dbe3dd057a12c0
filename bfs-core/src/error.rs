//! Graph errors.

use thiserror::Error;

use crate::graph::NodeId;

/// Errors raised by graph construction and search.
///
/// A search that finds nothing is not an error; it returns `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node cannot be connected to itself.
    #[error("can't connect node {0} to itself")]
    SelfLoop(NodeId),

    /// The handle does not name a node of this graph.
    #[error("node {0} does not belong to this graph")]
    UnknownNode(NodeId),
}

/// Result alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
