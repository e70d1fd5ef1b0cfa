//! Node in the depth-weighted graph.

use smallvec::SmallVec;

/// Link lists stay inline for the common low fan-out case.
pub(crate) type Links = SmallVec<[NodeId; 4]>;

/// Opaque node handle: the node's slot in its owning [`Graph`](crate::Graph),
/// tagged with that graph so a handle from another graph is never resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    graph: u32,
    index: usize,
}

impl NodeId {
    pub(crate) fn new(graph: u32, index: usize) -> Self {
        Self { graph, index }
    }

    pub(crate) fn graph(self) -> u32 {
        self.graph
    }

    /// Creation index within the owning graph.
    pub fn index(self) -> usize {
        self.index
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.graph, self.index)
    }
}

/// A vertex holding a caller identifier, a payload, a depth weight and
/// handles to its parents and children.
///
/// Nodes are created by [`Graph::add_node`](crate::Graph::add_node).
/// `Clone` produces a snapshot: the handle lists are copied by value and
/// keep pointing at the live graph by identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<Id, V> {
    pub(crate) node_id: NodeId,
    pub(crate) id: Id,
    pub(crate) value: V,
    pub(crate) weight: usize,
    pub(crate) parents: Links,
    pub(crate) children: Links,
}

impl<Id, V> Node<Id, V> {
    pub(crate) fn new(node_id: NodeId, id: Id, value: V) -> Self {
        Self {
            node_id,
            id,
            value,
            weight: 0,
            parents: Links::new(),
            children: Links::new(),
        }
    }

    /// Handle of this node in its graph.
    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Depth along the longest path observed at link time.
    pub fn weight(&self) -> usize {
        self.weight
    }

    /// Parents in link order. A parent linked twice appears twice.
    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    /// Children in link order. A child linked twice appears twice.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
