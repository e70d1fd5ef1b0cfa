//! Arena-backed node graph.
//!
//! The [`Graph`] owns every node. Parents and children refer to each other
//! by [`NodeId`] handle, so back-references never form ownership cycles.
//!
//! ## Limitations
//!
//! - **No cycle detection**: linking is unconditional. Traversals started
//!   from a node that can reach a cycle never terminate.
//! - **No removal**: handles stay valid for the lifetime of the graph.
//! - **Shallow weights**: raising a node's weight does not revisit its
//!   existing descendants.
//! - **Clones share handles**: a cloned graph keeps its source's tag, so
//!   handles from one resolve in the other.

pub mod traversal;

use std::sync::atomic::{AtomicU32, Ordering};

use tracing::{debug, trace};

use crate::model::{Node, NodeId};
use crate::{Error, Result};

pub use traversal::{Bfs, Dfs};

/// Source of per-graph handle tags.
static NEXT_GRAPH_TAG: AtomicU32 = AtomicU32::new(1);

// ============================================================================
// Graph
// ============================================================================

/// Owner of all nodes of one graph.
#[derive(Debug, Clone)]
pub struct Graph<Id, V> {
    tag: u32,
    nodes: Vec<Node<Id, V>>,
}

impl<Id, V> Default for Graph<Id, V> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<Id, V> Graph<Id, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the arena for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tag: NEXT_GRAPH_TAG.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::with_capacity(capacity),
        }
    }

    // ========================================================================
    // Construction & linkage
    // ========================================================================

    /// Create an unlinked node with weight 0 and return its handle.
    pub fn add_node(&mut self, id: Id, value: V) -> NodeId {
        let handle = NodeId::new(self.tag, self.nodes.len());
        self.nodes.push(Node::new(handle, id, value));
        trace!(node = %handle, "added node");
        handle
    }

    /// Establish the edge `parent -> child`.
    ///
    /// Appends `child` to the parent's children and `parent` to the child's
    /// parents, then raises the child's weight to `parent.weight + 1` if it
    /// is lower. Repeated calls duplicate the edge; self-loops are accepted.
    /// Descendants of `child` keep their current weights.
    pub fn link(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        // Resolve both ends before touching anything.
        let parent_weight = self.node(parent)?.weight;
        self.node(child)?;

        self.node_mut(parent)?.children.push(child);

        let node = self.node_mut(child)?;
        node.parents.push(parent);

        let floor = parent_weight.saturating_add(1);
        if node.weight < floor {
            debug!(node = %child, from = node.weight, to = floor, "raised weight");
            node.weight = floor;
        }

        trace!(%parent, %child, weight = node.weight, "linked nodes");
        Ok(())
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn node(&self, handle: NodeId) -> Result<&Node<Id, V>> {
        self.get(handle).ok_or(Error::NodeNotFound(handle))
    }

    fn node_mut(&mut self, handle: NodeId) -> Result<&mut Node<Id, V>> {
        if handle.graph() != self.tag {
            return Err(Error::NodeNotFound(handle));
        }
        self.nodes.get_mut(handle.index()).ok_or(Error::NodeNotFound(handle))
    }

    /// `None` for handles issued by another graph.
    pub fn get(&self, handle: NodeId) -> Option<&Node<Id, V>> {
        if handle.graph() != self.tag {
            return None;
        }
        self.nodes.get(handle.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<Id, V>> + '_ {
        self.nodes.iter()
    }

    // ========================================================================
    // Accessors by handle
    // ========================================================================

    pub fn id(&self, handle: NodeId) -> Result<&Id> {
        self.node(handle).map(Node::id)
    }

    pub fn value(&self, handle: NodeId) -> Result<&V> {
        self.node(handle).map(Node::value)
    }

    pub fn weight(&self, handle: NodeId) -> Result<usize> {
        self.node(handle).map(Node::weight)
    }

    pub fn parents(&self, handle: NodeId) -> Result<&[NodeId]> {
        self.node(handle).map(Node::parents)
    }

    pub fn children(&self, handle: NodeId) -> Result<&[NodeId]> {
        self.node(handle).map(Node::children)
    }
}

impl<Id: PartialEq, V> Graph<Id, V> {
    /// First node (in creation order) whose identifier equals `id`.
    ///
    /// Identifiers need not be unique; this is a linear scan.
    pub fn find(&self, id: &Id) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.id == *id).map(Node::node_id)
    }
}

// ============================================================================
// Tests
// ============================================================================
