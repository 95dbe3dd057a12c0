//! BFS Core
//!
//! This crate provides breadth-first search over two kinds of structure:
//!
//! - Undirected graphs whose nodes are mutually linked and may form cycles
//! - Rooted multi-way trees built top-down from a single root
//!
//! Both expose a `search` operation that returns the first node, in
//! breadth-first order, whose value equals a target.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `graph`: Node arena, symmetric edges and visited-set BFS
//! - `tree`: Owned tree nodes and level-order BFS
//! - `visit`: Hooks invoked for every node a search dequeues
//! - `error`: Errors raised while building or searching a graph
//!
//! # Example
//!
//! ```rust
//! use bfs_core::graph::Graph;
//! use bfs_core::tree::TreeNode;
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node(10);
//! let b = graph.add_node(2);
//! graph.connect(a, b).unwrap();
//!
//! let found = graph.search(&2, a).unwrap();
//! assert_eq!(found.map(|node| node.id()), Some(b));
//!
//! let mut root = TreeNode::of(10);
//! root.add_child(2).add_child(3);
//! root.add_child(4);
//!
//! assert_eq!(root.search(&3).map(|node| *node.value()), Some(3));
//! ```

pub mod error;
pub mod graph;
pub mod tree;
pub mod visit;

pub use error::{GraphError, Result};
pub use graph::{Bfs, Graph, GraphNode, NodeId};
pub use tree::{LevelOrder, TreeNode};
