use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tracing::trace;

use super::{Edge, EdgeId, Node};
use crate::error::{Result, RouteError};

/// Stored arc plus the insertion sequence used to order weight ties.
/// An arc and its mirror share one sequence number.
#[derive(Debug, Clone)]
struct StoredEdge {
    edge: Edge,
    seq: u64,
}

/// Weighted, undirected multigraph.
///
/// Edges live in a nested `from -> to -> id` map and are always stored as a
/// reciprocal pair: for every `(id, a, b, w)` there is a `(id, b, a, w)`.
/// `Clone` is a deep copy; traversals that augment the graph work on a clone
/// so the caller's store never changes.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: BTreeMap<String, Node>,
    edges: HashMap<String, HashMap<String, BTreeMap<EdgeId, StoredEdge>>>,
    next_seq: u64,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `id` and add it as a new node
    pub fn add_node(&mut self, id: &str) -> Result<Node> {
        let node = Node::new(id)?;
        self.insert_node(node.clone())?;
        Ok(node)
    }

    /// Add an already validated node
    pub fn insert_node(&mut self, node: Node) -> Result<()> {
        if self.nodes.contains_key(node.id()) {
            return Err(RouteError::DuplicateNode {
                id: node.id().to_string(),
            });
        }
        self.nodes.insert(node.id().to_string(), node);
        Ok(())
    }

    pub fn get_node(&self, id: &str) -> Result<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| RouteError::node_not_found(id))
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Remove a node together with every incident edge, in both directions.
    /// Returns the removed node, or `None` if it was not present.
    pub fn remove_node(&mut self, id: &str) -> Option<Node> {
        if let Some(targets) = self.edges.remove(id) {
            for to in targets.keys() {
                self.prune_direction(to, id);
            }
        }
        self.nodes.remove(id)
    }

    /// Add an edge between two existing nodes and its mirror.
    ///
    /// The id is the smallest integer not yet used by a parallel edge
    /// between the same pair.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u64) -> Result<Edge> {
        if from == to {
            return Err(RouteError::SelfEdge {
                id: from.to_string(),
            });
        }
        let from_node = self.get_node(from)?.clone();
        let to_node = self.get_node(to)?.clone();

        let id = self.next_free_id(from, to);
        let edge = Edge {
            id,
            from: from_node,
            to: to_node,
            weight,
        };
        self.insert_pair(edge.clone());
        trace!(from, to, id, weight, "add_edge");
        Ok(edge)
    }

    fn next_free_id(&self, from: &str, to: &str) -> EdgeId {
        let forward = self.edges.get(from).and_then(|m| m.get(to));
        let backward = self.edges.get(to).and_then(|m| m.get(from));
        (0..)
            .find(|id| {
                !forward.is_some_and(|m| m.contains_key(id))
                    && !backward.is_some_and(|m| m.contains_key(id))
            })
            .unwrap_or_default()
    }

    /// Store an arc and its mirror under one insertion sequence number
    pub(super) fn insert_pair(&mut self, edge: Edge) {
        let seq = self.next_seq;
        self.next_seq += 1;

        let mirror = edge.reversed();
        for arc in [edge, mirror] {
            self.edges
                .entry(arc.from.id().to_string())
                .or_default()
                .entry(arc.to.id().to_string())
                .or_default()
                .insert(arc.id, StoredEdge { edge: arc, seq });
        }
    }

    /// Outgoing arcs of `id`, ascending by weight with ties in insertion order
    pub fn get_edges_from(&self, id: &str) -> Vec<Edge> {
        let Some(targets) = self.edges.get(id) else {
            return Vec::new();
        };
        let mut stored: Vec<&StoredEdge> = targets.values().flat_map(|m| m.values()).collect();
        stored.sort_by_key(|s| (s.edge.weight, s.seq));
        stored.into_iter().map(|s| s.edge.clone()).collect()
    }

    /// Destination of every outgoing arc of `id`, in `get_edges_from` order
    pub fn get_nodes_from(&self, id: &str) -> Vec<Node> {
        self.get_edges_from(id)
            .into_iter()
            .map(|edge| edge.to)
            .collect()
    }

    /// All parallel arcs from `a` to `b`, ascending by weight
    pub fn get_edges_between(&self, a: &str, b: &str) -> Vec<Edge> {
        let Some(parallel) = self.edges.get(a).and_then(|m| m.get(b)) else {
            return Vec::new();
        };
        let mut stored: Vec<&StoredEdge> = parallel.values().collect();
        stored.sort_by_key(|s| (s.edge.weight, s.seq));
        stored.into_iter().map(|s| s.edge.clone()).collect()
    }

    /// Minimum-weight arc from `a` to `b`; the earliest inserted wins ties
    pub fn get_shortest_edge(&self, a: &str, b: &str) -> Option<Edge> {
        self.edges
            .get(a)?
            .get(b)?
            .values()
            .min_by_key(|s| (s.edge.weight, s.seq))
            .map(|s| s.edge.clone())
    }

    /// Remove every parallel edge between `a` and `b`
    pub fn remove_edges_between(&mut self, a: &str, b: &str) {
        self.prune_direction(a, b);
        self.prune_direction(b, a);
    }

    /// Remove a single edge of the given weight between `a` and `b`
    /// (the lowest id when several match), with its mirror
    pub fn remove_edge_with_weight(&mut self, a: &str, b: &str, weight: u64) -> Option<Edge> {
        let id = self
            .edges
            .get(a)?
            .get(b)?
            .values()
            .find(|s| s.edge.weight == weight)
            .map(|s| s.edge.id)?;

        let removed = self.remove_arc(a, b, id);
        self.remove_arc(b, a, id);
        removed
    }

    fn remove_arc(&mut self, from: &str, to: &str, id: EdgeId) -> Option<Edge> {
        let targets = self.edges.get_mut(from)?;
        let parallel = targets.get_mut(to)?;
        let removed = parallel.remove(&id).map(|s| s.edge);
        if parallel.is_empty() {
            targets.remove(to);
        }
        if targets.is_empty() {
            self.edges.remove(from);
        }
        removed
    }

    /// Drop the whole `from -> to` bucket, pruning empty maps
    fn prune_direction(&mut self, from: &str, to: &str) {
        if let Some(targets) = self.edges.get_mut(from) {
            targets.remove(to);
            if targets.is_empty() {
                self.edges.remove(from);
            }
        }
    }

    /// Number of outgoing arcs; each undirected edge counts once per endpoint
    pub fn degree(&self, id: &str) -> usize {
        self.edges
            .get(id)
            .map(|targets| targets.values().map(BTreeMap::len).sum())
            .unwrap_or(0)
    }

    /// All nodes in ascending id order
    pub fn get_all_nodes(&self) -> Vec<Node> {
        self.nodes.values().cloned().collect()
    }

    /// Every stored arc (both directions), grouped by node in id order
    pub fn get_all_edges(&self) -> Vec<Edge> {
        self.nodes
            .keys()
            .flat_map(|id| self.get_edges_from(id))
            .collect()
    }

    /// Nodes with odd degree, ascending by id
    pub fn get_all_odd_nodes(&self) -> Vec<Node> {
        self.nodes
            .values()
            .filter(|n| self.degree(n.id()) % 2 == 1)
            .cloned()
            .collect()
    }

    /// Nodes with exactly one incident edge, ascending by id
    pub fn get_all_dead_end_nodes(&self) -> Vec<Node> {
        self.nodes
            .values()
            .filter(|n| self.degree(n.id()) == 1)
            .cloned()
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges (each reciprocal pair counted once)
    pub fn edge_count(&self) -> usize {
        self.nodes.keys().map(|id| self.degree(id)).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(super) fn node_map(&self) -> &BTreeMap<String, Node> {
        &self.nodes
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes.values() {
            let arcs: Vec<String> = self
                .get_edges_from(node.id())
                .iter()
                .map(|e| format!("{}[{}]({})", e.to, e.id, e.weight))
                .collect();
            if arcs.is_empty() {
                writeln!(f, "{}:", node)?;
            } else {
                writeln!(f, "{}: {}", node, arcs.join(" "))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
