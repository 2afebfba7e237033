//! `routegraph import` - build a graph from an edge list
//!
//! One entry per line: `FROM TO WEIGHT` adds an edge, a lone `NODE` adds an
//! isolated node. Blank lines and `#` comments are ignored. Endpoints are
//! created on first use.

use std::fs;
use std::path::Path;

use regex::Regex;
use routegraph_core::bail_usage;
use routegraph_core::error::{Result, RouteError};
use routegraph_core::graph::Graph;
use tracing::debug;

use super::helpers::write_or_print;
use crate::cli::{Cli, OutputFormat};

const EDGE_PATTERN: &str = r"^(?P<from>\S+)\s+(?P<to>\S+)\s+(?P<weight>\d+)$";
const NODE_PATTERN: &str = r"^(?P<node>\S+)$";

/// Execute the import command
pub fn execute(cli: &Cli, input: &Path, output: Option<&Path>) -> Result<()> {
    if output == Some(input) {
        bail_usage!("refusing to overwrite the edge list with its snapshot");
    }
    let content = fs::read_to_string(input)?;
    let graph = parse_edge_list(&content)?;
    let json = graph.to_json()?;

    write_or_print(&json, output)?;

    if let Some(path) = output {
        match cli.format {
            OutputFormat::Json => {
                let summary = serde_json::json!({
                    "output": path.display().to_string(),
                    "nodes": graph.node_count(),
                    "edges": graph.edge_count(),
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            OutputFormat::Human => {
                if !cli.quiet {
                    println!(
                        "Imported {} nodes and {} edges into {}",
                        graph.node_count(),
                        graph.edge_count(),
                        path.display()
                    );
                }
            }
        }
    }
    Ok(())
}

/// Build a graph from edge-list text
pub fn parse_edge_list(content: &str) -> Result<Graph> {
    let edge_line = compile(EDGE_PATTERN)?;
    let node_line = compile(NODE_PATTERN)?;
    let mut graph = Graph::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let line_no = index + 1;

        if let Some(caps) = edge_line.captures(line) {
            let weight: u64 = caps["weight"].parse().map_err(|_| {
                RouteError::invalid_value(&format!("weight on line {}", line_no), &caps["weight"])
            })?;
            let from = ensure_node(&mut graph, &caps["from"])?;
            let to = ensure_node(&mut graph, &caps["to"])?;
            graph.add_edge(&from, &to, weight)?;
        } else if let Some(caps) = node_line.captures(line) {
            ensure_node(&mut graph, &caps["node"])?;
        } else {
            return Err(RouteError::invalid_value(
                &format!("edge list line {}", line_no),
                line,
            ));
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "edge list parsed"
    );
    Ok(graph)
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| RouteError::Other(format!("invalid line pattern: {}", e)))
}

/// Add `raw` as a node unless it is already present; returns the trimmed id
fn ensure_node(graph: &mut Graph, raw: &str) -> Result<String> {
    let id = raw.trim();
    if !graph.contains_node(id) {
        graph.add_node(id)?;
    }
    Ok(id.to_string())
}
