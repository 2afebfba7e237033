//! Route inspection: eulerize a graph, then walk every edge
//!
//! Eulerization runs on a clone, so the caller's graph is read-only here and
//! can be traversed repeatedly without side effects.

mod eulerize;
pub mod pairing;
mod walk;

pub use eulerize::eulerize;

use tracing::debug;

use super::Sequence;
use crate::config::TraversalConfig;
use crate::error::Result;
use crate::graph::Graph;

/// True when every node has even, non-zero degree
pub fn is_eulerian(graph: &Graph) -> bool {
    graph.get_all_nodes().iter().all(|node| {
        let degree = graph.degree(node.id());
        degree > 0 && degree % 2 == 0
    })
}

/// Walk that covers every edge of `graph` at least once, from `start`.
///
/// Non-eulerian graphs are eulerized first, so the step count is the
/// eulerized edge count and the distance includes the duplicated edges.
#[tracing::instrument(skip(graph, config), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn euler(graph: &Graph, start: &str, config: &TraversalConfig) -> Result<Sequence> {
    graph.get_node(start)?;

    if is_eulerian(graph) {
        return walk::walk(graph, start);
    }

    let augmented = eulerize(graph, config)?;
    debug!(
        added = augmented.edge_count() - graph.edge_count(),
        "graph eulerized"
    );
    walk::walk(&augmented, start)
}
