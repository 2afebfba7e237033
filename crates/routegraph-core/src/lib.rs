//! Routegraph Core Library
//!
//! Weighted undirected multigraph store plus search and route-inspection
//! traversals (BFS, DFS, Dijkstra, Euler and greedy full-edge coverage).

pub mod collections;
pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod traverse;
