//! Strategy selection and the shortest-over-all-starts driver

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::euler::euler;
use super::greedy::{dead_end_aware, greedy};
use super::Sequence;
use crate::config::TraversalConfig;
use crate::error::{Result, RouteError};
use crate::graph::Graph;

/// Full-coverage traversal algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Eulerize, then walk every edge
    #[default]
    Euler,
    /// Least-visited edge first
    Greedy,
    /// Least-visited edge first, dead ends before everything else
    DeadEndAware,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Euler, Strategy::Greedy, Strategy::DeadEndAware];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Euler => "euler",
            Strategy::Greedy => "greedy",
            Strategy::DeadEndAware => "dead-end-aware",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "euler" => Ok(Strategy::Euler),
            "greedy" | "default" => Ok(Strategy::Greedy),
            "dead-end-aware" | "dead_end_aware" | "deadend" => Ok(Strategy::DeadEndAware),
            other => Err(RouteError::invalid_value("strategy", other)),
        }
    }
}

/// Run one traversal from `start`
pub fn traverse(
    graph: &Graph,
    start: &str,
    strategy: Strategy,
    config: &TraversalConfig,
) -> Result<Sequence> {
    match strategy {
        Strategy::Euler => euler(graph, start, config),
        Strategy::Greedy => greedy(graph, start, config),
        Strategy::DeadEndAware => dead_end_aware(graph, start, config),
    }
}

/// Try every node as a start, in ascending id order, and keep the best walk.
///
/// Fewest steps wins, then lowest distance, then the earliest start.
/// Recoverable errors only disqualify their start node; any other error
/// aborts the search.
#[tracing::instrument(skip(graph, config), fields(nodes = graph.node_count()))]
pub fn shortest_sequence(
    graph: &Graph,
    strategy: Strategy,
    config: &TraversalConfig,
) -> Result<Sequence> {
    if graph.is_empty() {
        return Err(RouteError::EmptyGraph);
    }

    let mut best: Option<Sequence> = None;
    for node in graph.get_all_nodes() {
        let candidate = match traverse(graph, node.id(), strategy, config) {
            Ok(seq) => seq,
            Err(e) if e.is_recoverable() => {
                debug!(start = %node, error = %e, "start skipped");
                continue;
            }
            Err(e) => return Err(e),
        };

        let better = best.as_ref().is_none_or(|current| {
            (candidate.steps(), candidate.distance()) < (current.steps(), current.distance())
        });
        if better {
            debug!(start = %node, steps = candidate.steps(), distance = candidate.distance(), "new best");
            best = Some(candidate);
        }
    }

    best.ok_or_else(|| RouteError::NoCompleteTraversal {
        strategy: strategy.to_string(),
    })
}
