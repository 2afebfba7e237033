use std::collections::HashSet;

use super::state::VisitState;
use crate::collections::Stack;
use crate::error::Result;
use crate::graph::{Graph, Node};

/// Enumerate the connected component of `start` in depth-first visitation
/// order. Neighbours are pushed in `get_edges_from` order, so the last
/// pushed (heaviest) neighbour is explored first.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn dfs(graph: &Graph, start: &str) -> Result<Vec<Node>> {
    let start_node = graph.get_node(start)?.clone();

    let mut state = VisitState::for_graph(graph);
    let mut stack = Stack::new();
    stack.push(start_node);

    let mut order = Vec::new();
    while let Some(current) = stack.pop() {
        if state.is_visited(current.id()) {
            continue;
        }
        state.entry(current.id()).visited = true;

        for neighbor in graph.get_nodes_from(current.id()) {
            if !state.is_visited(neighbor.id()) {
                stack.push(neighbor);
            }
        }
        order.push(current);
    }

    Ok(order)
}

/// Number of undirected edges whose endpoints lie in the component of `start`
pub(crate) fn component_edge_count(graph: &Graph, start: &str) -> Result<usize> {
    let component: HashSet<String> = dfs(graph, start)?
        .into_iter()
        .map(|n| n.id().to_string())
        .collect();
    let degree_sum: usize = component.iter().map(|id| graph.degree(id)).sum();
    Ok(degree_sum / 2)
}
