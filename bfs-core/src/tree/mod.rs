//! Rooted Tree
//!
//! This module implements level-order search over a rooted multi-way tree.
//!
//! Every node owns its children, so the shape is a strict hierarchy: each
//! node has exactly one parent and no node can be reached along two paths.
//! Unlike the graph search, a tree search needs no visited set.

mod node;

pub use node::{LevelOrder, TreeNode};
