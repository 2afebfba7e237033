//! `routegraph show` - print a graph

use std::path::Path;

use routegraph_core::error::Result;

use super::helpers::load_graph;
use crate::cli::{Cli, OutputFormat};

/// Execute the show command
pub fn execute(cli: &Cli, path: &Path) -> Result<()> {
    let graph = load_graph(path)?;

    match cli.format {
        OutputFormat::Json => println!("{}", graph.to_json()?),
        OutputFormat::Human => {
            print!("{}", graph);
            if !cli.quiet {
                println!(
                    "{} nodes, {} edges, {} odd",
                    graph.node_count(),
                    graph.edge_count(),
                    graph.get_all_odd_nodes().len()
                );
            }
        }
    }
    Ok(())
}
