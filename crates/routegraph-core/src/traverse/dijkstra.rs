use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::trace;

use super::state::VisitState;
use super::Sequence;
use crate::error::{Result, RouteError};
use crate::graph::{Graph, Node};

/// Min-heap entry ordered by accumulated cost, then node id for determinism
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry {
    pub accumulated_cost: u64,
    pub node_id: String,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost
            .cmp(&other.accumulated_cost)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

/// Run Dijkstra from `source`, settling nodes until the heap drains or
/// `target` is settled.
///
/// Every node starts at +infinity except the source at 0. The lowest-cost
/// unvisited frontier node is settled next and all its outgoing arcs are
/// relaxed; parallel edges are relaxed individually, so the cheapest one
/// wins. Predecessors only change on a strict improvement.
pub fn shortest_path_tree(graph: &Graph, source: &str, target: Option<&str>) -> Result<VisitState> {
    graph.get_node(source)?;

    let mut state = VisitState::for_graph(graph);
    state.entry(source).distance = Some(0);

    let mut heap = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        accumulated_cost: 0,
        node_id: source.to_string(),
    }));

    while let Some(Reverse(HeapEntry {
        accumulated_cost,
        node_id: current_id,
    })) = heap.pop()
    {
        if state.is_visited(&current_id) {
            continue;
        }
        state.entry(&current_id).visited = true;
        trace!(node = %current_id, cost = accumulated_cost, "settled");

        if target == Some(current_id.as_str()) {
            break;
        }

        let current = graph.get_node(&current_id)?.clone();
        for edge in graph.get_edges_from(&current_id) {
            let neighbor = edge.to.id();
            if state.is_visited(neighbor) {
                continue;
            }
            let candidate = accumulated_cost.saturating_add(edge.weight);
            let entry = state.entry(neighbor);
            if entry.distance.is_none_or(|known| candidate < known) {
                entry.distance = Some(candidate);
                entry.predecessor = Some(current.clone());
                heap.push(Reverse(HeapEntry {
                    accumulated_cost: candidate,
                    node_id: neighbor.to_string(),
                }));
            }
        }
    }

    Ok(state)
}

/// Weighted shortest path from `start` to `end`
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn dijkstra(graph: &Graph, start: &str, end: &str) -> Result<Sequence> {
    let start_node = graph.get_node(start)?.clone();
    let end_node = graph.get_node(end)?.clone();

    let state = shortest_path_tree(graph, start, Some(end))?;
    let distance = state
        .distance(end)
        .ok_or_else(|| RouteError::Unreachable {
            from: start.to_string(),
            to: end.to_string(),
        })?;

    let nodes: Vec<Node> = state.path_to(&start_node, &end_node)?;
    Ok(Sequence::from_parts(nodes, distance))
}

/// Shortest distance between two nodes, `None` when unreachable
pub fn distance_between(graph: &Graph, start: &str, end: &str) -> Result<Option<u64>> {
    graph.get_node(end)?;
    let state = shortest_path_tree(graph, start, Some(end))?;
    Ok(state.distance(end))
}

#[cfg(test)]
mod tests;
