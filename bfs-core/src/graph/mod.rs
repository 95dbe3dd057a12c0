//! Undirected Graph
//!
//! This module implements breadth-first search over an undirected graph
//! whose edges may form cycles.
//!
//! # Overview
//!
//! - Nodes hold an immutable value and a set of neighbor handles
//! - Edges are symmetric: connecting A to B also connects B to A
//! - Self-loops are rejected
//!
//! # Design Decisions
//!
//! 1. A node can be reached along several paths, so no node owns another.
//!    The [`Graph`] arena owns every node and edges are stored as
//!    [`NodeId`] handles.
//!
//! 2. Neighbor sets keep insertion order, so a traversal expands neighbors
//!    in the order their edges were created and is fully deterministic.
//!
//! 3. A search marks a node as seen the first time it is enqueued. A node
//!    therefore enters the queue at most once and is visited at most once,
//!    which is what keeps traversal of a cycle finite.

mod arena;
mod node;

pub use arena::{Bfs, Graph};
pub use node::{GraphNode, NodeId};
