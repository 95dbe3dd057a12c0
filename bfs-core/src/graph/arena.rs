//! Graph Arena
//!
//! The arena owns every node of a graph and is the only place edges can be
//! created. Searches borrow it immutably, so the graph cannot change while a
//! traversal is in progress.
//!
//! # Algorithm
//!
//! Breadth-first search from a start node:
//!
//! 1. Seed a FIFO queue with the start node and mark it as seen
//! 2. Dequeue the front node and compare its value with the target
//! 3. On a match, stop without expanding the node
//! 4. Otherwise enqueue every neighbor that has not been seen yet
//! 5. When the queue drains, the target is not in the component
//!
//! Each node is enqueued at most once and each edge is examined at most
//! twice, so a search costs O(V + E) over the reachable component.

use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;

use indexmap::IndexMap;
use tracing::debug;

use super::node::{GraphNode, NodeId};
use crate::error::{GraphError, Result};
use crate::visit::trace_visit;

/// An undirected graph.
///
/// # Example
///
/// ```rust
/// use bfs_core::graph::Graph;
///
/// let mut graph = Graph::new();
/// let start = graph.add_node(10);
/// let other = graph.add_node(4);
/// graph.connect(start, other).unwrap();
///
/// assert!(graph.are_connected(other, start));
/// assert!(graph.search(&99, start).unwrap().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// All nodes in the graph, indexed by ID, in creation order.
    nodes: IndexMap<NodeId, GraphNode<T>>,

    /// Number of undirected edges.
    edge_count: usize,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            edge_count: 0,
        }
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: IndexMap::with_capacity(capacity),
            edge_count: 0,
        }
    }

    /// Add an isolated node holding `value`.
    pub fn add_node(&mut self, value: T) -> NodeId {
        let node = GraphNode::new(value);
        let id = node.id();
        self.nodes.insert(id, node);
        id
    }

    /// Get a reference to a node.
    pub fn node(&self, node_id: NodeId) -> Option<&GraphNode<T>> {
        self.nodes.get(&node_id)
    }

    /// Get the value stored in a node.
    pub fn value(&self, node_id: NodeId) -> Option<&T> {
        self.node(node_id).map(GraphNode::value)
    }

    /// Get the neighbors of a node.
    pub fn neighbors(&self, node_id: NodeId) -> Option<&indexmap::IndexSet<NodeId>> {
        self.node(node_id).map(GraphNode::neighbors)
    }

    /// Check if the node belongs to this graph.
    pub fn contains(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    /// Iterate over all nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode<T>> {
        self.nodes.values()
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check if an edge joins `a` and `b`.
    pub fn are_connected(&self, a: NodeId, b: NodeId) -> bool {
        self.node(a).is_some_and(|node| node.is_neighbor(b))
    }

    /// Add an undirected edge between `a` and `b`.
    ///
    /// Connecting two nodes that already share an edge is a no-op. Nothing
    /// is modified when an error is returned.
    ///
    /// # Errors
    ///
    /// - [`GraphError::SelfLoop`] if `a` and `b` are the same node
    /// - [`GraphError::UnknownNode`] if either node is not in this graph
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        if !self.contains(b) {
            return Err(GraphError::UnknownNode(b));
        }

        let added = match self.nodes.get_mut(&a) {
            Some(node) => node.add_neighbor(b),
            None => return Err(GraphError::UnknownNode(a)),
        };
        if let Some(node) = self.nodes.get_mut(&b) {
            node.add_neighbor(a);
        }

        if added {
            self.edge_count += 1;
            debug!(%a, %b, "connected nodes");
        }
        Ok(())
    }

    /// Start a breadth-first traversal at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `start` is not in this graph.
    pub fn bfs(&self, start: NodeId) -> Result<Bfs<'_, T>> {
        if !self.contains(start) {
            return Err(GraphError::UnknownNode(start));
        }
        Ok(Bfs::new(self, start))
    }

    /// Find the node closest to `start` whose value equals `target`,
    /// reporting every visited node to `on_visit`.
    ///
    /// Returns `Ok(None)` once the component containing `start` is
    /// exhausted. Nodes outside that component are never visited.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `start` is not in this graph.
    pub fn search_with<F>(
        &self,
        target: &T,
        start: NodeId,
        mut on_visit: F,
    ) -> Result<Option<&GraphNode<T>>>
    where
        T: PartialEq,
        F: FnMut(&GraphNode<T>),
    {
        let found = self.bfs(start)?.find(|node| {
            on_visit(node);
            node.value() == target
        });

        match found {
            Some(node) => debug!(%start, found = %node.id(), "search matched"),
            None => debug!(%start, "search exhausted component"),
        }
        Ok(found)
    }

    /// Find the node closest to `start` whose value equals `target`.
    ///
    /// Each visited node is reported as a `TRACE` event.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `start` is not in this graph.
    pub fn search(&self, target: &T, start: NodeId) -> Result<Option<&GraphNode<T>>>
    where
        T: PartialEq + Debug,
    {
        self.search_with(target, start, |node| trace_visit(node.value()))
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Breadth-first iterator over the component of a start node.
///
/// Yields each reachable node exactly once, closest first. A node's
/// neighbors are enqueued only when the iterator advances past it.
pub struct Bfs<'a, T> {
    graph: &'a Graph<T>,
    queue: VecDeque<NodeId>,

    /// Every node that has entered the queue.
    seen: HashSet<NodeId>,

    /// Last yielded node, expanded on the next call to `next`.
    pending: Option<NodeId>,
}

impl<'a, T> Bfs<'a, T> {
    fn new(graph: &'a Graph<T>, start: NodeId) -> Self {
        let mut queue = VecDeque::new();
        let mut seen = HashSet::new();
        queue.push_back(start);
        seen.insert(start);

        Self {
            graph,
            queue,
            seen,
            pending: None,
        }
    }

    /// Number of nodes discovered so far, visited or still queued.
    pub fn discovered(&self) -> usize {
        self.seen.len()
    }

    fn expand(&mut self, node_id: NodeId) {
        let Some(node) = self.graph.node(node_id) else {
            return;
        };
        for &neighbor in node.neighbors() {
            if self.seen.insert(neighbor) {
                self.queue.push_back(neighbor);
            }
        }
    }
}

impl<'a, T> Iterator for Bfs<'a, T> {
    type Item = &'a GraphNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(node_id) = self.pending.take() {
            self.expand(node_id);
        }

        let node_id = self.queue.pop_front()?;
        self.pending = Some(node_id);
        self.graph.node(node_id)
    }
}
