//! `routegraph snapshot` - save a timestamped copy of a graph

use std::path::Path;

use routegraph_core::error::Result;

use super::helpers::load_graph;
use crate::cli::{Cli, OutputFormat};

/// Execute the snapshot command
pub fn execute(cli: &Cli, path: &Path, dir: &Path) -> Result<()> {
    let graph = load_graph(path)?;
    let saved = graph.save_snapshot(dir)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "path": saved.display().to_string() });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => println!("{}", saved.display()),
    }
    Ok(())
}
