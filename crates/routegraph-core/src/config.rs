//! Traversal configuration for routegraph
//!
//! Configuration is read from TOML. Every field has a default, so a missing
//! file or an empty table yields [`TraversalConfig::default`].

pub mod global;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::Result;
use crate::traverse::Strategy;

/// Default cutoff for odd-degree nodes handed to the pairing enumeration
pub const DEFAULT_MAX_ODD_NODES: usize = 12;

/// Default multiplier for the greedy traversal step budget
pub const DEFAULT_GREEDY_STEP_FACTOR: usize = 8;

/// Tunables shared by the traversal entry points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Largest odd-degree node count eulerization will pair up.
    /// Perfect pairings grow as (n-1)!!, so this bounds the enumeration.
    #[serde(default = "default_max_odd_nodes")]
    pub max_odd_nodes: usize,

    /// Greedy traversals give up after
    /// `greedy_step_factor * edge_count * node_count` steps
    #[serde(default = "default_greedy_step_factor")]
    pub greedy_step_factor: usize,

    /// Strategy used when the caller does not pick one
    #[serde(default)]
    pub default_strategy: Strategy,
}

fn default_max_odd_nodes() -> usize {
    DEFAULT_MAX_ODD_NODES
}

fn default_greedy_step_factor() -> usize {
    DEFAULT_GREEDY_STEP_FACTOR
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_odd_nodes: DEFAULT_MAX_ODD_NODES,
            greedy_step_factor: DEFAULT_GREEDY_STEP_FACTOR,
            default_strategy: Strategy::default(),
        }
    }
}

impl TraversalConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TraversalConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.max_odd_nodes % 2 == 1 {
            bail_invalid!("max_odd_nodes (must be even)", self.max_odd_nodes);
        }
        if self.greedy_step_factor == 0 {
            bail_invalid!("greedy_step_factor (must be positive)", 0);
        }
        Ok(())
    }

    /// Step budget for a greedy traversal over a graph of the given size
    pub fn greedy_step_limit(&self, node_count: usize, edge_count: usize) -> usize {
        self.greedy_step_factor
            .saturating_mul(edge_count.max(1))
            .saturating_mul(node_count.max(1))
    }
}
