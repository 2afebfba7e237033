use std::fmt;

use serde::Serialize;

use crate::graph::Node;

/// Result of a traversal: visited nodes in order plus accumulated distance.
/// Read-only once handed back to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sequence {
    nodes: Vec<Node>,
    distance: u64,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(node: Node) -> Self {
        Self {
            nodes: vec![node],
            distance: 0,
        }
    }

    pub(crate) fn from_parts(nodes: Vec<Node>, distance: u64) -> Self {
        Self { nodes, distance }
    }

    /// Append a hop of the given weight
    pub(crate) fn push(&mut self, node: Node, weight: u64) {
        self.nodes.push(node);
        self.distance = self.distance.saturating_add(weight);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// Number of edges walked
    pub fn steps(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.nodes.iter().map(Node::id).collect()
    }

    pub fn first(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn last(&self) -> Option<&Node> {
        self.nodes.last()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} steps, distance {})",
            self.ids().join(" -> "),
            self.steps(),
            self.distance
        )
    }
}
