//! Greedy full-coverage traversals
//!
//! These walk the graph without eulerizing it: from the current node they
//! take the least-visited edge, lightest first. There is no optimality
//! guarantee and a walk may get stuck or run out of steps even when a
//! covering walk exists; those outcomes are recoverable errors so the
//! all-starts driver can try another node.

use std::collections::HashMap;

use tracing::trace;

use super::Sequence;
use crate::config::TraversalConfig;
use crate::error::{Result, RouteError};
use crate::graph::{Edge, EdgeKey, Graph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    LeastVisited,
    DeadEndAware,
}

/// Per-edge visit counters; an edge and its mirror share one entry
#[derive(Debug, Default)]
struct EdgeVisits {
    counts: HashMap<EdgeKey, u32>,
}

impl EdgeVisits {
    fn count(&self, edge: &Edge) -> u32 {
        self.counts.get(&edge.key()).copied().unwrap_or(0)
    }

    fn add(&mut self, edge: &Edge, by: u32) {
        *self.counts.entry(edge.key()).or_insert(0) += by;
    }
}

/// Least-visited-edge traversal, ties broken by weight then edge order
pub fn greedy(graph: &Graph, start: &str, config: &TraversalConfig) -> Result<Sequence> {
    run(graph, start, config, Rule::LeastVisited)
}

/// Greedy traversal that leaves through dead-end edges first.
///
/// An edge is a dead end when its destination has degree 1. Such edges are
/// taken while visited fewer than twice, before any normal edge. Leaving a
/// degree-1 node over its unvisited edge counts as two visits, since the
/// edge has to be walked back anyway.
pub fn dead_end_aware(graph: &Graph, start: &str, config: &TraversalConfig) -> Result<Sequence> {
    run(graph, start, config, Rule::DeadEndAware)
}

#[tracing::instrument(skip(graph, config), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
fn run(graph: &Graph, start: &str, config: &TraversalConfig, rule: Rule) -> Result<Sequence> {
    let mut current = graph.get_node(start)?.clone();
    let mut sequence = Sequence::starting_at(current.clone());

    let total = graph.edge_count();
    let limit = config.greedy_step_limit(graph.node_count(), total);
    let mut visits = EdgeVisits::default();
    let mut used = 0;

    while used < total {
        if sequence.steps() >= limit {
            return Err(RouteError::StepLimitExceeded {
                limit,
                partial: sequence,
            });
        }

        let candidates = graph.get_edges_from(current.id());
        if candidates.is_empty() {
            return Err(RouteError::NoOutgoingEdge {
                node: current.id().to_string(),
                partial: sequence,
            });
        }

        let (edge, by) = match rule {
            Rule::LeastVisited => (least_visited(&candidates, &visits), 1),
            Rule::DeadEndAware => {
                let Some(edge) = dead_end_first(graph, &candidates, &visits) else {
                    return Err(RouteError::InvalidNextEdge {
                        node: current.id().to_string(),
                        partial: sequence,
                    });
                };
                let forced = candidates.len() == 1 && visits.count(&edge) == 0;
                (edge, if forced { 2 } else { 1 })
            }
        };

        if visits.count(&edge) == 0 {
            used += 1;
        }
        visits.add(&edge, by);
        trace!(edge = %edge, used, total, "step");

        sequence.push(edge.to.clone(), edge.weight);
        current = edge.to;
    }

    Ok(sequence)
}

/// Fewest visits, then lowest weight; `candidates` is non-empty
fn least_visited(candidates: &[Edge], visits: &EdgeVisits) -> Edge {
    candidates
        .iter()
        .min_by_key(|edge| (visits.count(edge), edge.weight))
        .unwrap_or(&candidates[0])
        .clone()
}

fn dead_end_first(graph: &Graph, candidates: &[Edge], visits: &EdgeVisits) -> Option<Edge> {
    let (dead_ends, normal): (Vec<&Edge>, Vec<&Edge>) = candidates
        .iter()
        .partition(|edge| graph.degree(edge.to.id()) == 1);

    let least_dead_end = dead_ends.iter().map(|edge| visits.count(edge)).min();
    if let Some(least) = least_dead_end.filter(|least| *least < 2) {
        return dead_ends
            .into_iter()
            .find(|edge| visits.count(edge) == least)
            .cloned();
    }

    normal
        .into_iter()
        .min_by_key(|edge| (visits.count(edge), edge.weight))
        .cloned()
}
