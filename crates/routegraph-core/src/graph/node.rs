use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};

/// An immutable node identifier.
///
/// Ids are trimmed of surrounding whitespace and may only contain ASCII
/// letters, `_` and `.`. Uniqueness is enforced by the [`Graph`](super::Graph).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Node {
    id: String,
}

impl Node {
    /// Validate and build a node from a raw id
    pub fn new(id: &str) -> Result<Self> {
        let trimmed = id.trim();

        let mut invalid: Vec<char> = Vec::new();
        for c in trimmed.chars() {
            if is_valid_id_char(c) || invalid.contains(&c) {
                continue;
            }
            invalid.push(c);
        }

        if trimmed.is_empty() || !invalid.is_empty() {
            return Err(RouteError::InvalidIdentifier {
                id: id.to_string(),
                invalid,
            });
        }

        Ok(Node {
            id: trimmed.to_string(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

fn is_valid_id_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '.'
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl AsRef<str> for Node {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_whitespace() {
        let node = Node::new("  depot.north \t").unwrap();
        assert_eq!(node.id(), "depot.north");
    }

    #[test]
    fn test_new_accepts_letters_underscore_period() {
        assert!(Node::new("Main_Street.A").is_ok());
    }

    #[test]
    fn test_new_rejects_digits_and_symbols() {
        let err = Node::new("a1-b1").unwrap_err();
        match err {
            RouteError::InvalidIdentifier { id, invalid } => {
                assert_eq!(id, "a1-b1");
                // Each offending char is reported once, in order of appearance
                assert_eq!(invalid, vec!['1', '-']);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_inner_whitespace() {
        assert!(matches!(
            Node::new("a b"),
            Err(RouteError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(Node::new("   ").is_err());
    }

    #[test]
    fn test_serializes_as_id_object() {
        let node = Node::new("A").unwrap();
        assert_eq!(serde_json::to_string(&node).unwrap(), r#"{"id":"A"}"#);
    }
}
