//! Per-invocation visit state shared by the path-finding algorithms

use std::collections::HashMap;

use crate::error::{Result, RouteError};
use crate::graph::{Graph, Node};

#[derive(Debug, Clone, Default)]
pub struct NodeState {
    pub visited: bool,
    pub predecessor: Option<Node>,
    /// Tentative distance from the source; `None` is +infinity
    pub distance: Option<u64>,
}

/// Node id to visit state, scoped to one algorithm call
#[derive(Debug, Clone, Default)]
pub struct VisitState {
    nodes: HashMap<String, NodeState>,
}

impl VisitState {
    /// Fresh state with an unvisited entry for every node of `graph`
    pub fn for_graph(graph: &Graph) -> Self {
        let nodes = graph
            .get_all_nodes()
            .into_iter()
            .map(|n| (n.id().to_string(), NodeState::default()))
            .collect();
        Self { nodes }
    }

    pub fn entry(&mut self, id: &str) -> &mut NodeState {
        self.nodes.entry(id.to_string()).or_default()
    }

    pub fn is_visited(&self, id: &str) -> bool {
        self.nodes.get(id).is_some_and(|s| s.visited)
    }

    pub fn distance(&self, id: &str) -> Option<u64> {
        self.nodes.get(id).and_then(|s| s.distance)
    }

    /// Walk predecessor pointers back from `end` to `start`, returning the
    /// path in forward order
    pub fn path_to(&self, start: &Node, end: &Node) -> Result<Vec<Node>> {
        let mut path = vec![end.clone()];
        let mut current = end.clone();

        while current != *start {
            let prev = self
                .nodes
                .get(current.id())
                .and_then(|s| s.predecessor.clone())
                .ok_or_else(|| RouteError::Unreachable {
                    from: start.id().to_string(),
                    to: end.id().to_string(),
                })?;
            // Predecessor chains are acyclic; a longer chain means corruption
            if path.len() > self.nodes.len() {
                return Err(RouteError::Other(format!(
                    "predecessor cycle while reconstructing path to {}",
                    end
                )));
            }
            path.push(prev.clone());
            current = prev;
        }

        path.reverse();
        Ok(path)
    }
}
