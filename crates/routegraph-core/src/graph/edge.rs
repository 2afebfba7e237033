use std::fmt;

use serde::{Deserialize, Serialize};

use super::Node;

/// Edge ids are unique among the parallel edges joining one node pair
pub type EdgeId = usize;

/// A directed arc. The store always holds it together with its mirror,
/// which shares the same id and weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub from: Node,
    pub to: Node,
    pub weight: u64,
}

impl Edge {
    /// The mirror arc, with `from` and `to` swapped
    pub fn reversed(&self) -> Edge {
        Edge {
            id: self.id,
            from: self.to.clone(),
            to: self.from.clone(),
            weight: self.weight,
        }
    }

    /// Direction-free identity shared by an edge and its mirror
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.id, self.from.id(), self.to.id())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}|{}|{}]({})",
            self.id, self.from, self.to, self.weight
        )
    }
}

/// Undirected edge identity: the id plus the endpoint pair in sorted order
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub id: EdgeId,
    pub low: String,
    pub high: String,
}

impl EdgeKey {
    pub fn new(id: EdgeId, a: &str, b: &str) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        EdgeKey {
            id,
            low: low.to_string(),
            high: high.to_string(),
        }
    }
}
