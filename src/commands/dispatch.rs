//! Command dispatch logic for routegraph

use routegraph_core::config::global;
use routegraph_core::error::Result;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Import { input, output } => commands::import::execute(cli, input, output.as_deref()),

        Commands::Show { graph } => commands::show::execute(cli, graph),

        Commands::Path {
            graph,
            from,
            to,
            algo,
        } => commands::path::execute(cli, graph, from, to, *algo),

        Commands::Dfs { graph, start } => commands::dfs::execute(cli, graph, start),

        Commands::Walk {
            graph,
            start,
            strategy,
        } => {
            let config = global::resolve(cli.config.as_deref())?;
            let strategy = strategy.unwrap_or(config.default_strategy);
            debug!(%strategy, "walk strategy");
            commands::walk::execute(cli, graph, start.as_deref(), strategy, &config)
        }

        Commands::Eulerize { graph, output } => {
            let config = global::resolve(cli.config.as_deref())?;
            commands::eulerize::execute(cli, graph, output.as_deref(), &config)
        }

        Commands::Snapshot { graph, dir } => commands::snapshot::execute(cli, graph, dir),

        Commands::Config => {
            let config = global::resolve(cli.config.as_deref())?;
            commands::config::execute(cli, &config)
        }
    }
}
