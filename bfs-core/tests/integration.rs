//! Integration Tests for Breadth-First Search
//!
//! These tests build the sample graph and tree end to end and check both the
//! search results and the exact order in which nodes are visited.

use bfs_core::graph::{Graph, GraphNode, NodeId};
use bfs_core::tree::TreeNode;
use bfs_core::visit::VisitLog;
use bfs_core::GraphError;

/// Nodes of the sample graph, by value.
struct Sample {
    graph: Graph<i32>,
    n10: NodeId,
    n2: NodeId,
    n3: NodeId,
    n4: NodeId,
}

/// Triangle 10-2-3 plus the edge 10-4.
fn sample_graph() -> Sample {
    let mut graph = Graph::new();
    let n10 = graph.add_node(10);
    let n2 = graph.add_node(2);
    let n3 = graph.add_node(3);
    let n4 = graph.add_node(4);

    graph.connect(n10, n2).unwrap();
    graph.connect(n2, n3).unwrap();
    graph.connect(n3, n10).unwrap();
    graph.connect(n10, n4).unwrap();

    Sample {
        graph,
        n10,
        n2,
        n3,
        n4,
    }
}

/// 10 -> {2 -> {3}, 4}
fn sample_tree() -> TreeNode<i32> {
    let mut root = TreeNode::of(10);
    root.add_child(2).add_child(3);
    root.add_child(4);
    root
}

/// Test that a search through a cycle terminates and finds the target.
#[test]
fn graph_search_through_cycle() {
    let sample = sample_graph();
    let mut log = VisitLog::new();

    let found = sample
        .graph
        .search_with(&4, sample.n3, |node| log.record(node.value()))
        .unwrap();

    assert_eq!(found.map(GraphNode::id), Some(sample.n4));

    // 10, 2 and 3 are each visited at most once before 4
    for value in [10, 2, 3] {
        assert!(log.count_of(&value) <= 1);
    }
    assert_eq!(log.values().last(), Some(&4));
}

/// Test that the node valued 3 is found from 10.
#[test]
fn graph_search_from_other_start() {
    let sample = sample_graph();

    let found = sample.graph.search(&3, sample.n10).unwrap();

    assert_eq!(found.map(GraphNode::id), Some(sample.n3));
    assert_eq!(found.map(GraphNode::value), Some(&3));
}

/// Test that a missing value drains the component, one visit per node.
#[test]
fn graph_search_missing_value() {
    let sample = sample_graph();
    let mut log = VisitLog::new();

    let found = sample
        .graph
        .search_with(&99, sample.n10, |node| log.record(node.value()))
        .unwrap();

    assert!(found.is_none());
    assert_eq!(log.len(), 4);
    for value in [10, 2, 3, 4] {
        assert_eq!(log.count_of(&value), 1);
    }
}

/// Test that the closest of several equal values wins.
#[test]
fn graph_search_finds_closest_match() {
    // start - a - far(7)
    //   \
    //    near(7)  added last, but one hop away
    let mut graph = Graph::new();
    let start = graph.add_node(0);
    let a = graph.add_node(1);
    let far = graph.add_node(7);
    let near = graph.add_node(7);

    graph.connect(start, a).unwrap();
    graph.connect(a, far).unwrap();
    graph.connect(start, near).unwrap();

    let found = graph.search(&7, start).unwrap();
    assert_eq!(found.map(GraphNode::id), Some(near));
}

/// Test that searching compares values, not identities.
#[test]
fn graph_search_uses_value_equality() {
    let mut graph = Graph::new();
    let start = graph.add_node(String::from("root"));
    let leaf = graph.add_node(String::from("leaf"));
    graph.connect(start, leaf).unwrap();

    let target = String::from("leaf");
    let found = graph.search(&target, start).unwrap();
    assert_eq!(found.map(GraphNode::id), Some(leaf));
}

/// Test connect preconditions and symmetry.
#[test]
fn graph_connect_rules() {
    let mut sample = sample_graph();

    assert_eq!(
        sample.graph.connect(sample.n2, sample.n2),
        Err(GraphError::SelfLoop(sample.n2))
    );
    assert_eq!(sample.graph.neighbors(sample.n2).unwrap().len(), 2);

    sample.graph.connect(sample.n2, sample.n4).unwrap();
    assert!(sample.graph.neighbors(sample.n2).unwrap().contains(&sample.n4));
    assert!(sample.graph.neighbors(sample.n4).unwrap().contains(&sample.n2));
    assert_eq!(sample.graph.edge_count(), 5);

    // Every edge is visible from both ends
    for node in sample.graph.nodes() {
        for &neighbor in node.neighbors() {
            assert!(sample.graph.are_connected(neighbor, node.id()));
        }
    }
}

/// Test that the BFS iterator yields nodes in non-decreasing distance.
#[test]
fn graph_bfs_order_by_distance() {
    // Path 0-1-2-3 with a shortcut 0-3
    let mut graph = Graph::new();
    let ids: Vec<_> = (0..4).map(|v| graph.add_node(v)).collect();
    graph.connect(ids[0], ids[1]).unwrap();
    graph.connect(ids[1], ids[2]).unwrap();
    graph.connect(ids[2], ids[3]).unwrap();
    graph.connect(ids[0], ids[3]).unwrap();

    let order: Vec<_> = graph.bfs(ids[0]).unwrap().map(|n| *n.value()).collect();
    assert_eq!(order, vec![0, 1, 3, 2]);
}

/// Test that the root's second child is visited before the grandchild.
#[test]
fn tree_search_level_order() {
    let root = sample_tree();
    let mut log = VisitLog::new();

    let found = root.search_with(&4, |node| log.record(node.value()));

    assert_eq!(found.map(TreeNode::value), Some(&4));
    assert_eq!(log.values(), &[10, 2, 4]);
}

/// Test that the grandchild is found after the whole first level.
#[test]
fn tree_search_breadth_first() {
    let root = sample_tree();
    let mut log = VisitLog::new();

    let found = root.search_with(&3, |node| log.record(node.value()));

    assert_eq!(found.map(TreeNode::value), Some(&3));
    assert_eq!(log.values(), &[10, 2, 4, 3]);
}

/// Test that a missing value visits every tree node exactly once.
#[test]
fn tree_search_missing_value() {
    let root = sample_tree();
    let mut log = VisitLog::new();

    assert!(root.search_with(&99, |node| log.record(node.value())).is_none());
    assert_eq!(log.values(), &[10, 2, 4, 3]);
}

/// Test that children keep the order of `add_child` calls.
#[test]
fn tree_children_order() {
    let mut root = TreeNode::of('r');
    root.add_child('c');
    root.add_child('a');
    root.add_child('b').add_child('z');

    let children: Vec<_> = root.children().iter().map(|c| *c.value()).collect();
    assert_eq!(children, vec!['c', 'a', 'b']);

    let order: Vec<_> = root.level_order().map(|n| *n.value()).collect();
    assert_eq!(order, vec!['r', 'c', 'a', 'b', 'z']);
}

/// Test that a very deep tree can be searched, measured and dropped.
#[test]
fn tree_deep_chain() {
    const LEN: u32 = 150_000;
    let mut root = TreeNode::of(0);
    let mut cursor = &mut root;
    for value in 1..LEN {
        cursor = cursor.add_child(value);
    }

    assert_eq!(root.search(&(LEN - 1)).map(TreeNode::value), Some(&(LEN - 1)));
    assert_eq!(root.depth(), LEN as usize);
    drop(root);
}
