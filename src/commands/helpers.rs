//! Shared helpers for graph commands

use std::path::Path;

use routegraph_core::error::Result;
use routegraph_core::graph::Graph;
use routegraph_core::traverse::Sequence;
use tracing::debug;

/// Load a graph snapshot, logging its size
pub fn load_graph(path: &Path) -> Result<Graph> {
    let graph = Graph::load(path)?;
    debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// JSON form of a sequence with plain node ids
pub fn sequence_json(sequence: &Sequence) -> serde_json::Value {
    serde_json::json!({
        "nodes": sequence.ids(),
        "steps": sequence.steps(),
        "distance": sequence.distance(),
    })
}

/// Write `json` to `output`, or print it when no path is given
pub fn write_or_print(json: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{}", json),
    }
    Ok(())
}
