//! Tree Nodes

use std::collections::VecDeque;
use std::fmt::{self, Debug};
use std::mem;

use tracing::debug;

use crate::visit::trace_visit;

/// A node in a rooted tree, together with the subtree below it.
///
/// # Example
///
/// ```rust
/// use bfs_core::tree::TreeNode;
///
/// let mut root = TreeNode::of(10);
/// root.add_child(2).add_child(3);
/// root.add_child(4);
///
/// let children: Vec<_> = root.children().iter().map(|c| *c.value()).collect();
/// assert_eq!(children, vec![2, 4]);
/// ```
///
/// Drop, clone, comparison and `depth` walk the subtree with an explicit
/// stack, so arbitrarily deep trees never exhaust the call stack.
pub struct TreeNode<T> {
    value: T,

    /// Owned children in insertion order.
    children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    /// Create a root node with no children.
    pub fn of(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Get the node's value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Get the children in the order they were added.
    pub fn children(&self) -> &[TreeNode<T>] {
        &self.children
    }

    /// Append a new child holding `value` and return it, so the caller can
    /// keep building below it.
    pub fn add_child(&mut self, value: T) -> &mut TreeNode<T> {
        let index = self.children.len();
        self.children.push(Self::of(value));
        &mut self.children[index]
    }

    /// Check if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including this node.
    pub fn node_count(&self) -> usize {
        self.level_order().count()
    }

    /// Number of levels in this subtree. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Iterate over this subtree level by level, starting with this node.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self)
    }

    /// Find the shallowest node whose value equals `target`, reporting every
    /// visited node to `on_visit`.
    pub fn search_with<F>(&self, target: &T, mut on_visit: F) -> Option<&TreeNode<T>>
    where
        T: PartialEq,
        F: FnMut(&TreeNode<T>),
    {
        let found = self.level_order().find(|node| {
            on_visit(node);
            node.value() == target
        });
        debug!(found = found.is_some(), "tree search finished");
        found
    }

    /// Find the shallowest node whose value equals `target`.
    ///
    /// Each visited node is reported as a `TRACE` event.
    pub fn search(&self, target: &T) -> Option<&TreeNode<T>>
    where
        T: PartialEq + Debug,
    {
        self.search_with(target, |node| trace_visit(node.value()))
    }
}

impl<T> Drop for TreeNode<T> {
    fn drop(&mut self) {
        let mut stack = mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl<T: Clone> Clone for TreeNode<T> {
    fn clone(&self) -> Self {
        // Replaying this order backwards builds every child before its
        // parent, and a parent's children end up last on `built` in order.
        let mut order = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(node.children.iter());
        }

        let mut built: Vec<TreeNode<T>> = Vec::new();
        for node in order.into_iter().rev() {
            let first_child = built.len().saturating_sub(node.children.len());
            let children = built.split_off(first_child);
            built.push(Self {
                value: node.value.clone(),
                children,
            });
        }
        built.pop().unwrap_or_else(|| Self::of(self.value.clone()))
    }
}

impl<T: PartialEq> PartialEq for TreeNode<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((left, right)) = stack.pop() {
            if left.value != right.value || left.children.len() != right.children.len() {
                return false;
            }
            stack.extend(left.children.iter().zip(right.children.iter()));
        }
        true
    }
}

impl<T: Eq> Eq for TreeNode<T> {}

impl<T: Debug> Debug for TreeNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("value", &self.value)
            .field("children", &self.children.len())
            .finish()
    }
}

/// Level-order iterator over a subtree.
///
/// A node's children are enqueued only when the iterator advances past it.
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a TreeNode<T>>,

    /// Last yielded node, expanded on the next call to `next`.
    pending: Option<&'a TreeNode<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    fn new(root: &'a TreeNode<T>) -> Self {
        Self {
            queue: VecDeque::from([root]),
            pending: None,
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(node) = self.pending.take() {
            self.queue.extend(node.children());
        }

        let node = self.queue.pop_front()?;
        self.pending = Some(node);
        Some(node)
    }
}
