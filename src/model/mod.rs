//! # Graph Model
//!
//! Plain data: the node type, its handle, and the weight-bucketed
//! order snapshot. No traversal logic lives here.

pub mod node;
pub mod order;

pub use node::{Node, NodeId};
pub use order::Order;
