//! Walks over the child-reachable subgraph of a start node.
//!
//! Every walk follows child edges only and keeps no visited set: a node
//! shared by several paths is yielded once per path, and a reachable cycle
//! makes the walk endless. The iterators are lazy, so an endless walk can
//! still be bounded with `take`.

use std::collections::VecDeque;

use tracing::debug;

use super::Graph;
use crate::model::{Node, NodeId, Order};
use crate::Result;

// ============================================================================
// Depth-first (pre-order)
// ============================================================================

/// Pre-order depth-first iterator. Children are visited in link order.
pub struct Dfs<'g, Id, V> {
    graph: &'g Graph<Id, V>,
    stack: Vec<NodeId>,
}

impl<'g, Id, V> Iterator for Dfs<'g, Id, V> {
    type Item = &'g Node<Id, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let node = graph.get(self.stack.pop()?)?;
        // Reversed so the first child is popped next.
        self.stack.extend(node.children.iter().rev().copied());
        Some(node)
    }
}

// ============================================================================
// Breadth-first
// ============================================================================

/// Breadth-first iterator over a FIFO frontier.
pub struct Bfs<'g, Id, V> {
    graph: &'g Graph<Id, V>,
    queue: VecDeque<NodeId>,
}

impl<'g, Id, V> Iterator for Bfs<'g, Id, V> {
    type Item = &'g Node<Id, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let node = graph.get(self.queue.pop_front()?)?;
        self.queue.extend(node.children.iter().copied());
        Some(node)
    }
}

// ============================================================================
// Post-order
// ============================================================================

/// Post-order iterator: a node is yielded after all of its children's
/// subtrees, children in link order.
struct PostOrder<'g, Id, V> {
    graph: &'g Graph<Id, V>,
    /// (node, index of the next child to descend into)
    stack: Vec<(NodeId, usize)>,
}

impl<'g, Id, V> Iterator for PostOrder<'g, Id, V> {
    type Item = &'g Node<Id, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        loop {
            let (handle, cursor) = self.stack.last_mut()?;
            let node = graph.get(*handle)?;
            match node.children.get(*cursor) {
                Some(&child) => {
                    *cursor += 1;
                    self.stack.push((child, 0));
                }
                None => {
                    self.stack.pop();
                    return Some(node);
                }
            }
        }
    }
}

// ============================================================================
// Graph entry points
// ============================================================================

impl<Id, V> Graph<Id, V> {
    /// Lazy depth-first pre-order walk from `start`.
    pub fn dfs(&self, start: NodeId) -> Result<Dfs<'_, Id, V>> {
        self.node(start)?;
        Ok(Dfs { graph: self, stack: vec![start] })
    }

    /// Lazy breadth-first walk from `start`.
    pub fn bfs(&self, start: NodeId) -> Result<Bfs<'_, Id, V>> {
        self.node(start)?;
        Ok(Bfs { graph: self, queue: VecDeque::from([start]) })
    }

    fn post_order(&self, start: NodeId) -> Result<PostOrder<'_, Id, V>> {
        self.node(start)?;
        Ok(PostOrder { graph: self, stack: vec![(start, 0)] })
    }

    /// Call `visit` on every node of a depth-first pre-order walk.
    pub fn walk_dfs<F>(&self, start: NodeId, visit: F) -> Result<()>
    where
        F: FnMut(&Node<Id, V>),
    {
        self.dfs(start)?.for_each(visit);
        Ok(())
    }

    /// Call `visit` on every node of a breadth-first walk.
    pub fn walk_bfs<F>(&self, start: NodeId, visit: F) -> Result<()>
    where
        F: FnMut(&Node<Id, V>),
    {
        self.bfs(start)?.for_each(visit);
        Ok(())
    }
}

impl<Id: Clone, V: Clone> Graph<Id, V> {
    /// Group snapshots of every node reachable from `start` by weight.
    ///
    /// Children's groupings are merged in link order before `start` is
    /// appended to its own bucket, so each bucket lists nodes in post-order.
    /// The snapshots are detached copies: changing them leaves the graph as is.
    pub fn order(&self, start: NodeId) -> Result<Order<Id, V>> {
        let mut order = Order::new();
        for node in self.post_order(start)? {
            order.push(node.clone());
        }
        debug!(%start, buckets = order.len(), nodes = order.node_count(), "computed order");
        Ok(order)
    }
}
