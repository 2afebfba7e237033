//! Traversal and search algorithms over a [`Graph`](crate::graph::Graph)
//!
//! - `bfs`: fewest-hops path between two nodes
//! - `dfs`: connected-component enumeration
//! - `dijkstra`: weighted shortest path between two nodes
//! - `euler`: route inspection (eulerization plus a walk over every edge)
//! - `greedy`: cheaper full-coverage heuristics without eulerization
//! - `strategy`: caller-selected strategy and the all-starts driver

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod euler;
pub mod greedy;
pub mod sequence;
pub mod state;
pub mod strategy;

pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use euler::{euler, eulerize, is_eulerian};
pub use greedy::{dead_end_aware, greedy};
pub use sequence::Sequence;
pub use strategy::{shortest_sequence, traverse, Strategy};
