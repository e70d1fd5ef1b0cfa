//! Order — nodes grouped into buckets by weight.

use hashbrown::HashMap;
use super::Node;

/// Weight-bucketed snapshot of a subgraph, produced by
/// [`Graph::order`](crate::Graph::order).
///
/// Within a bucket, nodes appear in post-order: a node's descendants at that
/// weight come before it, and earlier children come before later ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Order<Id, V> {
    buckets: HashMap<usize, Vec<Node<Id, V>>>,
}

impl<Id, V> Order<Id, V> {
    pub(crate) fn new() -> Self {
        Self { buckets: HashMap::new() }
    }

    /// Append a snapshot to the bucket for its weight.
    pub(crate) fn push(&mut self, node: Node<Id, V>) {
        self.buckets.entry(node.weight).or_default().push(node);
    }

    pub fn get(&self, weight: usize) -> Option<&[Node<Id, V>]> {
        self.buckets.get(&weight).map(Vec::as_slice)
    }

    /// Number of distinct weights.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of snapshots across all buckets.
    pub fn node_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Bucket keys, ascending.
    pub fn weights(&self) -> Vec<usize> {
        let mut weights: Vec<usize> = self.buckets.keys().copied().collect();
        weights.sort_unstable();
        weights
    }

    pub fn into_inner(self) -> HashMap<usize, Vec<Node<Id, V>>> {
        self.buckets
    }
}
