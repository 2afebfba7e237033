//! CLI commands for routegraph

pub mod config;
pub mod dfs;
pub mod dispatch;
pub mod eulerize;
pub mod helpers;
pub mod import;
pub mod path;
pub mod show;
pub mod snapshot;
pub mod walk;
