//! JSON snapshots of a graph
//!
//! Shape: `{"nodes": {id: Node}, "edges": {from: {to: {id: Edge}}}}` where
//! `Edge = {id, from, to, weight}`. Both directions of every edge are written.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Edge, EdgeId, Graph, Node};
use crate::bail_snapshot;
use crate::error::Result;

/// Serializable form of a [`Graph`]
///
/// Maps are keyed, so insertion order is not recorded. Loading re-inserts
/// pairs by ascending `(weight, id)`, which fixes the tie order among
/// equal-weight edges leaving a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: BTreeMap<String, Node>,
    #[serde(default)]
    pub edges: BTreeMap<String, BTreeMap<String, BTreeMap<EdgeId, Edge>>>,
}

impl Graph {
    pub fn to_snapshot(&self) -> GraphSnapshot {
        let mut edges: BTreeMap<String, BTreeMap<String, BTreeMap<EdgeId, Edge>>> =
            BTreeMap::new();
        for edge in self.get_all_edges() {
            edges
                .entry(edge.from.id().to_string())
                .or_default()
                .entry(edge.to.id().to_string())
                .or_default()
                .insert(edge.id, edge);
        }
        GraphSnapshot {
            nodes: self.node_map().clone(),
            edges,
        }
    }

    /// Rebuild a graph, rejecting snapshots that break the store invariants:
    /// invalid ids, unknown endpoints, self edges, keys that disagree with
    /// the edge they hold, or an edge without its mirror.
    pub fn from_snapshot(snapshot: GraphSnapshot) -> Result<Graph> {
        let mut graph = Graph::new();

        for (key, node) in &snapshot.nodes {
            let validated = Node::new(key)?;
            if validated.id() != key || node.id() != key {
                bail_snapshot!("node key {:?} does not match node id {:?}", key, node.id());
            }
            graph.insert_node(validated)?;
        }

        let mut pairs: Vec<&Edge> = Vec::new();
        for (from, targets) in &snapshot.edges {
            for (to, parallel) in targets {
                for (id, edge) in parallel {
                    validate_edge(&snapshot, from, to, *id, edge)?;
                    // Each pair is inserted once, from its lower endpoint
                    if from < to {
                        pairs.push(edge);
                    }
                }
            }
        }
        pairs.sort_by(|a, b| {
            (a.weight, a.id, a.from.id(), a.to.id()).cmp(&(b.weight, b.id, b.from.id(), b.to.id()))
        });
        for edge in pairs {
            graph.insert_pair(edge.clone());
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "snapshot loaded"
        );
        Ok(graph)
    }

    pub fn from_json(json: &str) -> Result<Graph> {
        let snapshot: GraphSnapshot = serde_json::from_str(json)?;
        Graph::from_snapshot(snapshot)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_snapshot())?)
    }

    /// Load a graph from a JSON snapshot file
    pub fn load(path: &Path) -> Result<Graph> {
        let content = fs::read_to_string(path)?;
        Graph::from_json(&content)
    }

    /// Write the graph as a JSON snapshot file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Write a timestamped snapshot into `dir`, creating it if needed
    pub fn save_snapshot(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let stamp = chrono::Local::now().format("%Y-%m-%dT%H-%M-%S");
        let path = dir.join(format!("snapshot-{}.json", stamp));
        self.save(&path)?;
        debug!(path = %path.display(), "snapshot saved");
        Ok(path)
    }
}

fn validate_edge(
    snapshot: &GraphSnapshot,
    from: &str,
    to: &str,
    id: EdgeId,
    edge: &Edge,
) -> Result<()> {
    if edge.from.id() != from || edge.to.id() != to || edge.id != id {
        bail_snapshot!("edge stored under {}->{}[{}] is {}", from, to, id, edge);
    }
    if from == to {
        bail_snapshot!("self edge on {}", from);
    }
    for endpoint in [from, to] {
        if !snapshot.nodes.contains_key(endpoint) {
            bail_snapshot!("edge {} references unknown node {}", edge, endpoint);
        }
    }

    let mirror = snapshot
        .edges
        .get(to)
        .and_then(|m| m.get(from))
        .and_then(|m| m.get(&id));
    match mirror {
        Some(m) if m.weight == edge.weight => Ok(()),
        Some(m) => bail_snapshot!(
            "edge {} has mirror with different weight {}",
            edge,
            m.weight
        ),
        None => bail_snapshot!("edge {} has no mirror", edge),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;
    use tempfile::tempdir;

    fn sample() -> Graph {
        let mut g = Graph::new();
        for id in ["A", "B", "C"] {
            g.add_node(id).unwrap();
        }
        g.add_edge("A", "B", 1).unwrap();
        g.add_edge("A", "B", 4).unwrap();
        g.add_edge("B", "C", 2).unwrap();
        g
    }

    #[test]
    fn test_snapshot_shape() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["nodes"]["A"], serde_json::json!({"id": "A"}));
        assert_eq!(
            json["edges"]["B"]["A"]["1"],
            serde_json::json!({"id": 1, "from": {"id": "B"}, "to": {"id": "A"}, "weight": 4})
        );
        assert_eq!(json["edges"]["C"]["B"]["0"]["weight"], 2);
    }

    #[test]
    fn test_reload_preserves_edges() {
        let original = sample();
        let reloaded = Graph::from_json(&original.to_json().unwrap()).unwrap();
        assert_eq!(reloaded.node_count(), 3);
        assert_eq!(reloaded.edge_count(), 3);
        assert_eq!(reloaded.get_edges_between("A", "B").len(), 2);
        assert_eq!(reloaded.get_shortest_edge("B", "A").unwrap().weight, 1);
        assert_eq!(reloaded.to_snapshot(), original.to_snapshot());
    }

    #[test]
    fn test_load_orders_ties_by_weight_then_id() {
        let json = r#"{
            "nodes": {"A": {"id": "A"}, "B": {"id": "B"}, "C": {"id": "C"}},
            "edges": {
                "A": {
                    "B": {
                        "0": {"id": 0, "from": {"id": "A"}, "to": {"id": "B"}, "weight": 5},
                        "1": {"id": 1, "from": {"id": "A"}, "to": {"id": "B"}, "weight": 1}
                    },
                    "C": {"0": {"id": 0, "from": {"id": "A"}, "to": {"id": "C"}, "weight": 1}}
                },
                "B": {"A": {
                    "0": {"id": 0, "from": {"id": "B"}, "to": {"id": "A"}, "weight": 5},
                    "1": {"id": 1, "from": {"id": "B"}, "to": {"id": "A"}, "weight": 1}
                }},
                "C": {"A": {"0": {"id": 0, "from": {"id": "C"}, "to": {"id": "A"}, "weight": 1}}}
            }
        }"#;
        let g = Graph::from_json(json).unwrap();
        let targets: Vec<String> = g
            .get_nodes_from("A")
            .iter()
            .map(|n| n.id().to_string())
            .collect();
        assert_eq!(targets, vec!["C", "B", "B"]);
        let weights: Vec<u64> = g.get_edges_from("A").iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![1, 1, 5]);
    }

    #[test]
    fn test_rejects_orphaned_edge() {
        let json = r#"{
            "nodes": {"A": {"id": "A"}, "B": {"id": "B"}},
            "edges": {"A": {"B": {"0": {"id": 0, "from": {"id": "A"}, "to": {"id": "B"}, "weight": 3}}}}
        }"#;
        let err = Graph::from_json(json).unwrap_err();
        assert!(matches!(err, RouteError::InvalidSnapshot { .. }));
        assert!(err.to_string().contains("no mirror"));
    }

    #[test]
    fn test_rejects_mismatched_mirror_weight() {
        let json = r#"{
            "nodes": {"A": {"id": "A"}, "B": {"id": "B"}},
            "edges": {
                "A": {"B": {"0": {"id": 0, "from": {"id": "A"}, "to": {"id": "B"}, "weight": 3}}},
                "B": {"A": {"0": {"id": 0, "from": {"id": "B"}, "to": {"id": "A"}, "weight": 5}}}
            }
        }"#;
        assert!(matches!(
            Graph::from_json(json),
            Err(RouteError::InvalidSnapshot { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_endpoint() {
        let json = r#"{
            "nodes": {"A": {"id": "A"}},
            "edges": {
                "A": {"B": {"0": {"id": 0, "from": {"id": "A"}, "to": {"id": "B"}, "weight": 3}}},
                "B": {"A": {"0": {"id": 0, "from": {"id": "B"}, "to": {"id": "A"}, "weight": 3}}}
            }
        }"#;
        assert!(matches!(
            Graph::from_json(json),
            Err(RouteError::InvalidSnapshot { .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_node_id() {
        let json = r#"{"nodes": {"A1": {"id": "A1"}}, "edges": {}}"#;
        assert!(matches!(
            Graph::from_json(json),
            Err(RouteError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_empty_object_is_empty_graph() {
        let g = Graph::from_json("{}").unwrap();
        assert!(g.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.json");
        sample().save(&path).unwrap();
        let loaded = Graph::load(&path).unwrap();
        assert_eq!(loaded.edge_count(), 3);
    }

    #[test]
    fn test_save_snapshot_creates_directory() {
        let dir = tempdir().unwrap();
        let snapshots = dir.path().join("snapshots");
        let path = sample().save_snapshot(&snapshots).unwrap();
        assert!(path.starts_with(&snapshots));
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("snapshot-"));
        assert_eq!(Graph::load(&path).unwrap().node_count(), 3);
    }
}
