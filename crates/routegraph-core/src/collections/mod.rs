//! Container primitives consumed by the traversal algorithms
//!
//! - `Stack`: LIFO sequence backing DFS and the Euler walk
//! - `Queue`: FIFO sequence backing BFS

pub mod queue;
pub mod stack;

pub use queue::Queue;
pub use stack::Stack;
