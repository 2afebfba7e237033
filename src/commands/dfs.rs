//! `routegraph dfs` - depth-first enumeration of a component

use std::path::Path;

use routegraph_core::error::Result;
use routegraph_core::graph::Node;
use routegraph_core::traverse::dfs;

use super::helpers::load_graph;
use crate::cli::{Cli, OutputFormat};

/// Execute the dfs command
pub fn execute(cli: &Cli, path: &Path, start: &str) -> Result<()> {
    let graph = load_graph(path)?;
    let order = dfs(&graph, start)?;
    let ids: Vec<&str> = order.iter().map(Node::id).collect();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": start,
                "nodes": ids,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for id in ids {
                println!("{}", id);
            }
        }
    }
    Ok(())
}
