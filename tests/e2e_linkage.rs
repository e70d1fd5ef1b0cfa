//! End-to-end tests for node construction and linkage.
//!
//! Covers default state, two-sided link bookkeeping, duplicate links,
//! multi-parent weights and the shallow weight propagation rule.

use depthgraph::{Error, Graph};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
struct Data {
    id: i32,
    value: bool,
}

// ============================================================================
// 1. Construction
// ============================================================================

#[test]
fn test_new_node_state() {
    let mut graph = Graph::new();
    let a = graph.add_node("A", Data { id: 1, value: false });

    let node = graph.node(a).unwrap();
    assert_eq!(*node.id(), "A");
    assert_eq!(node.value(), &Data { id: 1, value: false });
    assert_eq!(node.weight(), 0);
    assert!(node.parents().is_empty());
    assert!(node.children().is_empty());
}

#[test]
fn test_handles_are_sequential() {
    let mut graph = Graph::new();
    let a = graph.add_node(1u32, ());
    let b = graph.add_node(2u32, ());

    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_ne!(a, b);
    assert_eq!(graph.len(), 2);
}

// ============================================================================
// 2. Link bookkeeping
// ============================================================================

#[test]
fn test_link_child_then_grandchild() {
    let mut graph = Graph::new();
    let a = graph.add_node("A", Data { id: 1, value: false });
    let b = graph.add_node("B", Data { id: 2, value: false });

    graph.link(a, b).unwrap();
    assert_eq!(graph.children(a).unwrap(), &[b]);
    assert_eq!(graph.parents(b).unwrap(), &[a]);

    // Linking back the other way: B is both parent and child of A.
    graph.link(b, a).unwrap();
    assert_eq!(graph.parents(a).unwrap(), &[b]);
    assert_eq!(graph.children(a).unwrap(), &[b]);
    assert_eq!(graph.weight(a).unwrap(), 2);
}

#[test]
fn test_duplicate_link_is_recorded_twice() {
    let mut graph = Graph::new();
    let p = graph.add_node("P", ());
    let c = graph.add_node("C", ());

    graph.link(p, c).unwrap();
    graph.link(p, c).unwrap();

    assert_eq!(graph.children(p).unwrap(), &[c, c]);
    assert_eq!(graph.parents(c).unwrap(), &[p, p]);
    assert_eq!(graph.weight(c).unwrap(), 1);
}

#[test]
fn test_handle_from_other_graph_is_an_error() {
    let mut graph: Graph<&str, ()> = Graph::new();
    let a = graph.add_node("A", ());
    let b = graph.add_node("B", ());

    let mut other: Graph<&str, ()> = Graph::new();
    other.add_node("X", ());
    let foreign = other.add_node("Y", ());
    assert_eq!(foreign.index(), b.index());

    assert_eq!(graph.link(a, foreign), Err(Error::NodeNotFound(foreign)));
    assert_eq!(graph.weight(foreign), Err(Error::NodeNotFound(foreign)));
    assert!(graph.children(a).unwrap().is_empty());
    assert!(graph.parents(b).unwrap().is_empty());
    assert_eq!(
        Error::NodeNotFound(foreign).to_string(),
        format!("Node not found: {foreign}"),
    );
}

// ============================================================================
// 3. Weights
// ============================================================================

#[test]
fn test_multi_parent_weight_is_max_plus_one() {
    let mut graph = Graph::new();
    let root = graph.add_node("root", ());
    let mid = graph.add_node("mid", ());
    let shallow = graph.add_node("shallow", ());
    let child = graph.add_node("child", ());

    graph.link(root, mid).unwrap();

    graph.link(shallow, child).unwrap();
    assert_eq!(graph.weight(child).unwrap(), 1);

    graph.link(mid, child).unwrap();
    assert_eq!(graph.weight(child).unwrap(), 2);
    assert_eq!(graph.parents(child).unwrap(), &[shallow, mid]);
}

#[test]
fn test_weight_propagation_is_shallow() {
    let mut graph = Graph::new();
    let a = graph.add_node("A", ());
    let b = graph.add_node("B", ());
    let c = graph.add_node("C", ());
    let top = graph.add_node("top", ());
    let deeper = graph.add_node("deeper", ());

    // Build B -> C first, then hang B under a deeper chain.
    graph.link(b, c).unwrap();
    graph.link(top, deeper).unwrap();
    graph.link(deeper, a).unwrap();
    graph.link(a, b).unwrap();

    assert_eq!(graph.weight(a).unwrap(), 2);
    assert_eq!(graph.weight(b).unwrap(), 3);
    // C was linked while B still had weight 0.
    assert_eq!(graph.weight(c).unwrap(), 1);
}

#[test]
fn test_diamond_weights() {
    let mut graph = Graph::new();
    let a = graph.add_node("A", ());
    let b = graph.add_node("B", ());
    let c = graph.add_node("C", ());
    let d = graph.add_node("D", ());

    graph.link(a, b).unwrap();
    graph.link(a, c).unwrap();
    graph.link(b, d).unwrap();
    graph.link(c, d).unwrap();

    assert!(graph.parents(a).unwrap().is_empty());
    assert!(graph.children(d).unwrap().is_empty());
    assert_eq!(graph.parents(d).unwrap(), &[b, c]);
    assert_eq!(graph.weight(d).unwrap(), 2);
}
