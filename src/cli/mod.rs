//! CLI argument parsing for routegraph
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config

pub mod output;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use parse::parse_strategy;
use routegraph_core::traverse::Strategy;

pub use output::OutputFormat;

/// Routegraph - shortest paths and edge-covering walks over weighted graphs
#[derive(Parser, Debug)]
#[command(name = "routegraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, either a level (`debug`) or a full directive list
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Traversal config file (defaults to the user config when present)
    #[arg(long, global = true, env = "ROUTEGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Point-to-point search algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PathAlgo {
    /// Fewest hops
    Bfs,
    /// Lowest total weight
    #[default]
    Dijkstra,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a graph snapshot from an edge list (`FROM TO WEIGHT` per line)
    Import {
        /// Edge list file
        input: PathBuf,

        /// Write the snapshot here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print a graph snapshot
    Show {
        /// Graph snapshot (JSON)
        graph: PathBuf,
    },

    /// Shortest path between two nodes
    Path {
        /// Graph snapshot (JSON)
        graph: PathBuf,

        /// Start node
        from: String,

        /// Target node
        to: String,

        /// Search algorithm
        #[arg(long, value_enum, default_value = "dijkstra")]
        algo: PathAlgo,
    },

    /// Depth-first enumeration of a node's component
    Dfs {
        /// Graph snapshot (JSON)
        graph: PathBuf,

        /// Start node
        start: String,
    },

    /// Walk every edge at least once
    Walk {
        /// Graph snapshot (JSON)
        graph: PathBuf,

        /// Start node; without it every node is tried and the best walk kept
        #[arg(long, short)]
        start: Option<String>,

        /// Traversal strategy (euler, greedy, dead-end-aware)
        #[arg(long, value_parser = parse_strategy)]
        strategy: Option<Strategy>,
    },

    /// Duplicate edges until every node has even degree
    Eulerize {
        /// Graph snapshot (JSON)
        graph: PathBuf,

        /// Write the augmented snapshot here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Save a timestamped copy of a graph snapshot
    Snapshot {
        /// Graph snapshot (JSON)
        graph: PathBuf,

        /// Directory for snapshot files
        #[arg(long, default_value = "snapshots")]
        dir: PathBuf,
    },

    /// Show the effective traversal configuration
    Config,
}
