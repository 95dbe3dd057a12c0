//! Graph Nodes
//!
//! This module defines the node type stored in a [`Graph`](super::Graph).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexSet;

/// Unique identifier for a node in a graph.
///
/// Identifiers come from a process-wide counter, so graphs built
/// independently never hand out the same identifier. A cloned graph keeps
/// its source's identifiers, and `From<u64>` can name any identifier, so a
/// handle is only checked for membership, not provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Generate a new unique node ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in an undirected graph.
///
/// Nodes are created and linked through the owning graph; this type only
/// exposes read access.
#[derive(Debug, Clone)]
pub struct GraphNode<T> {
    /// Unique identifier for this node.
    id: NodeId,

    /// Payload, fixed at construction.
    value: T,

    /// Nodes sharing an edge with this one, in the order the edges were added.
    neighbors: IndexSet<NodeId>,
}

impl<T> GraphNode<T> {
    /// Create an isolated node.
    pub(crate) fn new(value: T) -> Self {
        Self {
            id: NodeId::new(),
            value,
            neighbors: IndexSet::new(),
        }
    }

    /// Get the node's ID.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Get the node's value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Get all neighbors.
    pub fn neighbors(&self) -> &IndexSet<NodeId> {
        &self.neighbors
    }

    /// Number of edges touching this node.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Check if this node shares an edge with `other`.
    pub fn is_neighbor(&self, other: NodeId) -> bool {
        self.neighbors.contains(&other)
    }

    /// Add one side of an edge. Returns `false` if it already existed.
    pub(crate) fn add_neighbor(&mut self, node_id: NodeId) -> bool {
        self.neighbors.insert(node_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_are_unique() {
        let id1 = NodeId::new();
        let id2 = NodeId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn new_node_is_isolated() {
        let node = GraphNode::new("a");
        assert_eq!(*node.value(), "a");
        assert_eq!(node.degree(), 0);
        assert!(node.neighbors().is_empty());
    }

    #[test]
    fn neighbors_keep_insertion_order() {
        let mut node = GraphNode::new(0);
        let first = NodeId::new();
        let second = NodeId::new();

        assert!(node.add_neighbor(second));
        assert!(node.add_neighbor(first));
        assert!(!node.add_neighbor(second));

        let order: Vec<_> = node.neighbors().iter().copied().collect();
        assert_eq!(order, vec![second, first]);
        assert!(node.is_neighbor(first));
    }

    #[test]
    fn display_uses_raw_id() {
        assert_eq!(NodeId::from(42).to_string(), "#42");
        assert_eq!(NodeId::from(42).raw(), 42);
    }
}
