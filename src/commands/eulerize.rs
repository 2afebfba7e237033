//! `routegraph eulerize` - write the augmented graph

use std::path::Path;

use routegraph_core::config::TraversalConfig;
use routegraph_core::error::Result;
use routegraph_core::traverse::{eulerize, is_eulerian};

use super::helpers::{load_graph, write_or_print};
use crate::cli::{Cli, OutputFormat};

/// Execute the eulerize command
pub fn execute(
    cli: &Cli,
    path: &Path,
    output: Option<&Path>,
    config: &TraversalConfig,
) -> Result<()> {
    let graph = load_graph(path)?;
    let augmented = eulerize(&graph, config)?;
    let added = augmented.edge_count() - graph.edge_count();

    write_or_print(&augmented.to_json()?, output)?;

    let Some(output) = output else {
        return Ok(());
    };
    match cli.format {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "output": output.display().to_string(),
                "edges": augmented.edge_count(),
                "added": added,
                "eulerian": is_eulerian(&augmented),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Added {} edges ({} total) -> {}",
                    added,
                    augmented.edge_count(),
                    output.display()
                );
            }
        }
    }
    Ok(())
}
