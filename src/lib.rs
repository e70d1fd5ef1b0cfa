//! # depthgraph — Depth-Weighted Node Graph
//!
//! A generic in-memory graph of typed nodes with parent/child linkage,
//! depth weights and depth-first / breadth-first traversal.
//!
//! ## Design Principles
//!
//! 1. **Arena-owned**: a [`Graph`] owns every [`Node`]; links are [`NodeId`] handles
//! 2. **Unconditional linkage**: duplicates, self-loops and multiple parents are all accepted
//! 3. **Shallow weights**: a link raises only the child's weight, never its descendants'
//! 4. **No guards**: traversals keep no visited set and never terminate on a reachable cycle
//!
//! ## Quick Start
//!
//! ```rust
//! use depthgraph::Graph;
//!
//! # fn example() -> depthgraph::Result<()> {
//! let mut graph = Graph::new();
//! let build = graph.add_node("build", 10);
//! let test = graph.add_node("test", 20);
//! let lint = graph.add_node("lint", 30);
//!
//! graph.link(build, test)?;
//! graph.link(build, lint)?;
//!
//! let mut seen = Vec::new();
//! graph.walk_dfs(build, |node| seen.push(*node.id()))?;
//! assert_eq!(seen, ["build", "test", "lint"]);
//!
//! let order = graph.order(build)?;
//! assert_eq!(order.get(1).map(<[_]>::len), Some(2));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{Node, NodeId, Order};
pub use graph::{Graph, Dfs, Bfs};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),
}

pub type Result<T> = std::result::Result<T, Error>;
