//! Backtracking walk over an even-degree graph

use std::collections::HashSet;

use tracing::trace;

use crate::collections::Stack;
use crate::error::{Result, RouteError};
use crate::graph::{Edge, EdgeKey, Graph};
use crate::traverse::bfs::sequence_along;
use crate::traverse::dfs::component_edge_count;
use crate::traverse::Sequence;

/// Walk position: the node reached and the edge used to get there
struct Frame {
    node: String,
    via: Option<Edge>,
}

/// `(stack depth, from, to)`; a hop that dead-ended from this depth
type InvalidHop = (usize, String, String);

/// Walk every edge of `graph` exactly once, starting and ending at `start`.
///
/// From the top of the stack the first unvisited, non-forbidden edge in
/// `get_edges_from` order is taken. When none is left before every edge is
/// visited, the top is popped, its edge is unvisited and the hop is forbidden
/// at that depth. Forbidden hops below the new top are forgotten, since they
/// were recorded under a prefix that no longer exists.
///
/// Each hop of the result is charged its shortest parallel edge, the same
/// way `bfs` prices its path.
pub(super) fn walk(graph: &Graph, start: &str) -> Result<Sequence> {
    let start_node = graph.get_node(start)?.clone();
    let total = graph.edge_count();

    if total > 0 && graph.degree(start) == 0 {
        return Err(RouteError::NoOutgoingEdge {
            node: start.to_string(),
            partial: Sequence::starting_at(start_node),
        });
    }
    if let Some(odd) = graph.get_all_odd_nodes().first() {
        return Err(RouteError::GraphNotEulerian {
            reason: format!("node {} has odd degree {}", odd, graph.degree(odd.id())),
        });
    }
    let reachable = component_edge_count(graph, start)?;
    if reachable != total {
        return Err(RouteError::GraphNotEulerian {
            reason: format!(
                "{} of {} edges are not connected to {}",
                total - reachable,
                total,
                start
            ),
        });
    }

    let mut stack = Stack::new();
    stack.push(Frame {
        node: start.to_string(),
        via: None,
    });
    let mut visited: HashSet<EdgeKey> = HashSet::new();
    let mut invalid: HashSet<InvalidHop> = HashSet::new();

    while visited.len() < total {
        let Some(top) = stack.peek() else {
            break;
        };
        let depth = stack.len();
        let current = top.node.clone();

        let next = graph.get_edges_from(&current).into_iter().find(|edge| {
            !visited.contains(&edge.key())
                && !invalid.contains(&(depth, current.clone(), edge.to.id().to_string()))
        });

        match next {
            Some(edge) => {
                visited.insert(edge.key());
                stack.push(Frame {
                    node: edge.to.id().to_string(),
                    via: Some(edge),
                });
            }
            None => {
                let Some(Frame { via: Some(edge), .. }) = stack.pop() else {
                    return Err(RouteError::GraphNotEulerian {
                        reason: format!("walk from {} cannot cover every edge", start),
                    });
                };
                let new_depth = stack.len();
                trace!(depth = new_depth, from = %edge.from, to = %edge.to, "backtrack");
                invalid.retain(|(d, _, _)| *d <= new_depth);
                invalid.insert((new_depth, edge.from.id().to_string(), edge.to.id().to_string()));
                visited.remove(&edge.key());
            }
        }
    }

    let mut path = vec![start_node];
    path.extend(stack.into_vec().into_iter().filter_map(|frame| frame.via.map(|edge| edge.to)));
    sequence_along(graph, path)
}
