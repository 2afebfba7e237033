use tracing::trace;

use super::state::VisitState;
use super::Sequence;
use crate::collections::Queue;
use crate::error::{Result, RouteError};
use crate::graph::{Graph, Node};

/// Find the fewest-hops path from `start` to `end`.
///
/// Each newly discovered node records the node that discovered it; the path
/// is rebuilt by walking those predecessors back from `end`. The distance is
/// the sum of the shortest parallel edge of every hop.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn bfs(graph: &Graph, start: &str, end: &str) -> Result<Sequence> {
    let start_node = graph.get_node(start)?.clone();
    let end_node = graph.get_node(end)?.clone();

    let mut state = VisitState::for_graph(graph);
    state.entry(start).visited = true;

    let mut queue = Queue::new();
    queue.enqueue(start_node.clone());

    let mut found = false;
    while let Some(current) = queue.dequeue() {
        if current == end_node {
            found = true;
            break;
        }

        for neighbor in graph.get_nodes_from(current.id()) {
            let entry = state.entry(neighbor.id());
            if !entry.visited {
                entry.visited = true;
                entry.predecessor = Some(current.clone());
                trace!(node = %neighbor, via = %current, "discovered");
                queue.enqueue(neighbor);
            }
        }
    }

    if !found {
        return Err(RouteError::Unreachable {
            from: start.to_string(),
            to: end.to_string(),
        });
    }

    let path = state.path_to(&start_node, &end_node)?;
    sequence_along(graph, path)
}

/// Build a sequence over `path`, charging each hop its shortest parallel edge
pub(crate) fn sequence_along(graph: &Graph, path: Vec<Node>) -> Result<Sequence> {
    let mut nodes = path.into_iter();
    let Some(first) = nodes.next() else {
        return Ok(Sequence::new());
    };

    let mut sequence = Sequence::starting_at(first);
    for node in nodes {
        let prev = sequence.last().map(|n| n.id().to_string()).unwrap_or_default();
        let edge = graph
            .get_shortest_edge(&prev, node.id())
            .ok_or_else(|| RouteError::edge_not_found(prev.as_str(), node.id()))?;
        sequence.push(node, edge.weight);
    }
    Ok(sequence)
}
