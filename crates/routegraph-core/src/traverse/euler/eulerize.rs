//! Augment a graph until every node has even degree

use std::time::Instant;

use tracing::debug;

use super::pairing::{all_pairings, cheapest, PairCosts};
use crate::config::TraversalConfig;
use crate::error::{Result, RouteError};
use crate::graph::Graph;
use crate::trace_time;
use crate::traverse::dijkstra::{dijkstra, distance_between};

/// Return an eulerized clone of `graph`; the input is never modified.
///
/// Dead ends get their single edge doubled first. The remaining odd-degree
/// nodes are paired up at minimum total shortest-path cost and every edge
/// along each pair's shortest path is duplicated. Fails with
/// `TooManyOddNodes` when the odd set exceeds `config.max_odd_nodes`, and
/// with `GraphNotEulerian` when no pairing connects every odd node.
#[tracing::instrument(skip_all, fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn eulerize(graph: &Graph, config: &TraversalConfig) -> Result<Graph> {
    let start = Instant::now();
    let mut work = graph.clone();

    double_dead_ends(&mut work)?;

    let odd: Vec<String> = work
        .get_all_odd_nodes()
        .into_iter()
        .map(|n| n.id().to_string())
        .collect();
    if odd.is_empty() {
        trace_time!(start, "eulerize");
        return Ok(work);
    }
    if odd.len() > config.max_odd_nodes {
        return Err(RouteError::TooManyOddNodes {
            count: odd.len(),
            limit: config.max_odd_nodes,
        });
    }

    let mut costs = PairCosts::default();
    for (i, a) in odd.iter().enumerate() {
        for b in &odd[i + 1..] {
            costs.insert(a, b, distance_between(&work, a, b)?);
        }
    }

    let pairings = all_pairings(&odd);
    let (best, total) = cheapest(&pairings, &costs).ok_or_else(|| RouteError::GraphNotEulerian {
        reason: format!("odd-degree nodes {} cannot all be paired", odd.join(", ")),
    })?;
    debug!(odd = odd.len(), candidates = pairings.len(), cost = total, "pairing chosen");

    for (left, right) in best {
        duplicate_path(&mut work, left, right)?;
    }

    let remaining = work.get_all_odd_nodes();
    if !remaining.is_empty() {
        return Err(RouteError::GraphNotEulerian {
            reason: format!("{} odd-degree nodes remain after eulerization", remaining.len()),
        });
    }

    trace_time!(start, "eulerize", added = work.edge_count() - graph.edge_count());
    Ok(work)
}

/// Double the edge of every degree-1 node. Degree is re-read per node, so
/// when two dead ends share an edge only the first one doubles it.
fn double_dead_ends(graph: &mut Graph) -> Result<()> {
    for node in graph.get_all_dead_end_nodes() {
        if graph.degree(node.id()) != 1 {
            continue;
        }
        let Some(edge) = graph.get_edges_from(node.id()).into_iter().next() else {
            continue;
        };
        graph.add_edge(edge.from.id(), edge.to.id(), edge.weight)?;
        debug!(node = %node, "doubled dead-end edge");
    }
    Ok(())
}

/// Add a parallel copy of the cheapest edge on each hop of the shortest path
fn duplicate_path(graph: &mut Graph, from: &str, to: &str) -> Result<()> {
    let path = dijkstra(graph, from, to)?;
    for hop in path.nodes().windows(2) {
        let (a, b) = (hop[0].id(), hop[1].id());
        let edge = graph
            .get_shortest_edge(a, b)
            .ok_or_else(|| RouteError::edge_not_found(a, b))?;
        graph.add_edge(a, b, edge.weight)?;
    }
    Ok(())
}
