//! Graph store
//!
//! Provides the weighted, undirected multigraph that every traversal reads:
//! - `Node`: validated, immutable identifier
//! - `Edge` / `EdgeKey`: directed arc and its direction-free identity
//! - `Graph`: node set plus reciprocal edge pairs, ordered by weight
//! - `GraphSnapshot`: JSON persistence shape

pub mod edge;
pub mod node;
pub mod snapshot;
pub mod store;

pub use edge::{Edge, EdgeId, EdgeKey};
pub use node::Node;
pub use snapshot::GraphSnapshot;
pub use store::Graph;
