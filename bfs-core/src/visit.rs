//! Visit hooks.
//!
//! Every search reports each node it dequeues to a hook. The default hook
//! emits a `TRACE` event through `tracing`; callers that want to observe a
//! traversal directly pass their own closure to `search_with`, often one that
//! records into a [`VisitLog`].

use std::fmt::Debug;

/// Default hook: one trace line per visited node.
pub fn trace_visit<T: Debug + ?Sized>(value: &T) {
    tracing::trace!(value = ?value, "Visited node with value: {:?}", value);
}

/// Records the values of visited nodes in visit order.
///
/// # Example
///
/// ```rust
/// use bfs_core::tree::TreeNode;
/// use bfs_core::visit::VisitLog;
///
/// let mut root = TreeNode::of(1);
/// root.add_child(2);
///
/// let mut log = VisitLog::new();
/// root.search_with(&2, |node| log.record(node.value()));
/// assert_eq!(log.values(), &[1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitLog<T> {
    values: Vec<T>,
}

impl<T: Clone> VisitLog<T> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Record one visit.
    pub fn record(&mut self, value: &T) {
        self.values.push(value.clone());
    }

    /// Values in the order they were visited.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Total number of visits.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing was visited.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T: Clone + PartialEq> VisitLog<T> {
    /// Number of times a value was visited.
    pub fn count_of(&self, value: &T) -> usize {
        self.values.iter().filter(|v| *v == value).count()
    }
}

impl<T: Clone> Default for VisitLog<T> {
    fn default() -> Self {
        Self::new()
    }
}
