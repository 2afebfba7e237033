//! Error types and exit codes for routegraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, invariant violations, stuck traversals)
//! - 2: Usage error (bad flags/args, invalid values)
//! - 3: Data error (unknown nodes, malformed snapshots, invalid graph edits)

mod macros;

use thiserror::Error;

use crate::traverse::Sequence;

/// Exit codes for the routegraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, bad snapshot (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or traversing a graph
#[derive(Error, Debug)]
pub enum RouteError {
    // Structural errors: fatal to the call, never retried
    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("node is already in the graph: {id}")]
    DuplicateNode { id: String },

    #[error("cannot add edge between the same node: {id}")]
    SelfEdge { id: String },

    #[error("invalid chars in id {id:?}: {invalid:?}")]
    InvalidIdentifier { id: String, invalid: Vec<char> },

    #[error("no path from {from} to {to}")]
    Unreachable { from: String, to: String },

    #[error("invalid snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    #[error("too many odd-degree nodes to pair: {count} (limit {limit})")]
    TooManyOddNodes { count: usize, limit: usize },

    #[error("graph has no nodes")]
    EmptyGraph,

    // Traversal-recoverable errors: the caller may retry from another start
    #[error("node {node} has no outgoing edges")]
    NoOutgoingEdge { node: String, partial: Sequence },

    #[error("no valid next edge from node {node}")]
    InvalidNextEdge { node: String, partial: Sequence },

    #[error("traversal did not cover every edge within {limit} steps")]
    StepLimitExceeded { limit: usize, partial: Sequence },

    // Invariant violations: unreachable on a well-formed graph
    #[error("couldn't get shortest edge between {from} and {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("graph is not eulerian: {reason}")]
    GraphNotEulerian { reason: String },

    // Ambient failures
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("{0}")]
    Usage(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("no start node completes a {strategy} traversal")]
    NoCompleteTraversal { strategy: String },

    #[error("{0}")]
    Other(String),
}

impl RouteError {
    /// Create an error for an unknown node id
    pub fn node_not_found(id: impl Into<String>) -> Self {
        RouteError::NodeNotFound { id: id.into() }
    }

    /// Create an error for a missing edge between two nodes
    pub fn edge_not_found(from: impl Into<String>, to: impl Into<String>) -> Self {
        RouteError::EdgeNotFound {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create an error for a malformed snapshot
    pub fn invalid_snapshot(reason: impl std::fmt::Display) -> Self {
        RouteError::InvalidSnapshot {
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RouteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// True for errors that only rule out the current start node.
    ///
    /// The shortest-sequence driver skips these and moves on to the next
    /// candidate start; every other error aborts the search.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RouteError::NoOutgoingEdge { .. }
                | RouteError::InvalidNextEdge { .. }
                | RouteError::StepLimitExceeded { .. }
        )
    }

    /// Sequence built before a recoverable traversal error, if any
    pub fn partial_sequence(&self) -> Option<&Sequence> {
        match self {
            RouteError::NoOutgoingEdge { partial, .. }
            | RouteError::InvalidNextEdge { partial, .. }
            | RouteError::StepLimitExceeded { partial, .. } => Some(partial),
            _ => None,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::Usage(_) | RouteError::InvalidValue { .. } => ExitCode::Usage,

            RouteError::NodeNotFound { .. }
            | RouteError::DuplicateNode { .. }
            | RouteError::SelfEdge { .. }
            | RouteError::InvalidIdentifier { .. }
            | RouteError::Unreachable { .. }
            | RouteError::InvalidSnapshot { .. }
            | RouteError::TooManyOddNodes { .. }
            | RouteError::EmptyGraph
            | RouteError::Json(_) => ExitCode::Data,

            RouteError::NoOutgoingEdge { .. }
            | RouteError::InvalidNextEdge { .. }
            | RouteError::StepLimitExceeded { .. }
            | RouteError::EdgeNotFound { .. }
            | RouteError::GraphNotEulerian { .. }
            | RouteError::Io(_)
            | RouteError::TomlDe(_)
            | RouteError::TomlSer(_)
            | RouteError::NoCompleteTraversal { .. }
            | RouteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RouteError::NodeNotFound { .. } => "node_not_found",
            RouteError::DuplicateNode { .. } => "duplicate_node",
            RouteError::SelfEdge { .. } => "self_edge",
            RouteError::InvalidIdentifier { .. } => "invalid_identifier",
            RouteError::Unreachable { .. } => "unreachable",
            RouteError::InvalidSnapshot { .. } => "invalid_snapshot",
            RouteError::TooManyOddNodes { .. } => "too_many_odd_nodes",
            RouteError::EmptyGraph => "empty_graph",
            RouteError::NoOutgoingEdge { .. } => "no_outgoing_edge",
            RouteError::InvalidNextEdge { .. } => "invalid_next_edge",
            RouteError::StepLimitExceeded { .. } => "step_limit_exceeded",
            RouteError::EdgeNotFound { .. } => "edge_not_found",
            RouteError::GraphNotEulerian { .. } => "graph_not_eulerian",
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::TomlDe(_) | RouteError::TomlSer(_) => "toml_error",
            RouteError::Usage(_) => "usage_error",
            RouteError::InvalidValue { .. } => "invalid_value",
            RouteError::NoCompleteTraversal { .. } => "no_complete_traversal",
            RouteError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    /// Recoverable traversal errors carry their partial sequence.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let Some(partial) = self.partial_sequence() {
            error_obj["partial"] = serde_json::json!(partial);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for routegraph operations
pub type Result<T> = std::result::Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        let stuck = RouteError::NoOutgoingEdge {
            node: "A".to_string(),
            partial: Sequence::default(),
        };
        assert!(stuck.is_recoverable());
        assert!(stuck.partial_sequence().is_some());

        let missing = RouteError::node_not_found("A");
        assert!(!missing.is_recoverable());
        assert!(missing.partial_sequence().is_none());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            RouteError::Usage("bad".to_string()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(RouteError::node_not_found("X").exit_code(), ExitCode::Data);
        assert_eq!(
            RouteError::GraphNotEulerian {
                reason: "odd".to_string()
            }
            .exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let err = RouteError::DuplicateNode {
            id: "A".to_string(),
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "duplicate_node");
        assert_eq!(json["error"]["message"], "node is already in the graph: A");
        assert!(json["error"].get("partial").is_none());
    }

    #[test]
    fn test_to_json_includes_partial_sequence() {
        let err = RouteError::InvalidNextEdge {
            node: "B".to_string(),
            partial: Sequence::default(),
        };
        let json = err.to_json();
        assert_eq!(json["error"]["type"], "invalid_next_edge");
        assert_eq!(json["error"]["partial"]["distance"], 0);
    }
}
