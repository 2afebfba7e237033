//! `routegraph path` - shortest path between two nodes

use std::path::Path;

use routegraph_core::error::Result;
use routegraph_core::traverse::{bfs, dijkstra};

use super::helpers::{load_graph, sequence_json};
use crate::cli::{Cli, OutputFormat, PathAlgo};

/// Execute the path command
pub fn execute(cli: &Cli, path: &Path, from: &str, to: &str, algo: PathAlgo) -> Result<()> {
    let graph = load_graph(path)?;

    let sequence = match algo {
        PathAlgo::Bfs => bfs(&graph, from, to)?,
        PathAlgo::Dijkstra => dijkstra(&graph, from, to)?,
    };

    match cli.format {
        OutputFormat::Json => {
            let mut output = sequence_json(&sequence);
            output["algorithm"] = serde_json::json!(algo_name(algo));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => println!("{}", sequence),
    }
    Ok(())
}

fn algo_name(algo: PathAlgo) -> &'static str {
    match algo {
        PathAlgo::Bfs => "bfs",
        PathAlgo::Dijkstra => "dijkstra",
    }
}
