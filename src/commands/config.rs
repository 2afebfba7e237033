//! `routegraph config` - show the effective configuration

use routegraph_core::config::{global, TraversalConfig};
use routegraph_core::error::Result;

use crate::cli::{Cli, OutputFormat};

/// Execute the config command
pub fn execute(cli: &Cli, config: &TraversalConfig) -> Result<()> {
    let source = match &cli.config {
        Some(path) => path.display().to_string(),
        None => global::source_display(),
    };

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": source,
                "config": config,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("# source: {}", source);
            }
            print!("{}", toml::to_string_pretty(config)?);
        }
    }
    Ok(())
}
