//! `routegraph walk` - cover every edge at least once
//!
//! With `--start` one traversal runs from that node. Without it every node
//! is tried and the shortest complete walk is reported.

use std::path::Path;

use routegraph_core::config::TraversalConfig;
use routegraph_core::error::Result;
use routegraph_core::traverse::{shortest_sequence, traverse, Strategy};

use super::helpers::{load_graph, sequence_json};
use crate::cli::{Cli, OutputFormat};

/// Execute the walk command
pub fn execute(
    cli: &Cli,
    path: &Path,
    start: Option<&str>,
    strategy: Strategy,
    config: &TraversalConfig,
) -> Result<()> {
    let graph = load_graph(path)?;

    let result = match start {
        Some(start) => traverse(&graph, start, strategy, config),
        None => shortest_sequence(&graph, strategy, config),
    };

    let sequence = match result {
        Ok(sequence) => sequence,
        Err(e) => {
            // The JSON envelope already carries the partial sequence
            if cli.format == OutputFormat::Human && !cli.quiet {
                if let Some(partial) = e.partial_sequence() {
                    eprintln!("partial: {}", partial);
                }
            }
            return Err(e);
        }
    };

    match cli.format {
        OutputFormat::Json => {
            let mut output = sequence_json(&sequence);
            output["strategy"] = serde_json::json!(strategy.as_str());
            output["edges"] = serde_json::json!(graph.edge_count());
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", sequence);
            if !cli.quiet {
                let repeated = sequence.steps().saturating_sub(graph.edge_count());
                println!(
                    "strategy {}: {} edges, {} repeated",
                    strategy,
                    graph.edge_count(),
                    repeated
                );
            }
        }
    }
    Ok(())
}
