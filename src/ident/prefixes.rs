//! Reserved prefixes for synthetic identifiers.

use crate::{Error, Result};

/// Default prefix for synthetic node identifiers (`Node0`, `Node1`, ...).
pub const DEFAULT_NODE_PREFIX: &str = "Node";

/// Default prefix for synthetic subgraph identifiers (`Subgraph0`, `Subgraph1`, ...).
pub const DEFAULT_SUBGRAPH_PREFIX: &str = "Subgraph";

/// The pair of prefixes an [`IdentifierAllocator`](crate::ident::IdentifierAllocator)
/// puts in front of its counters when it makes up identifiers.
///
/// Both prefixes are DOT barewords, so every synthetic identifier built from them can be
/// written without quoting. They must differ from each other; nodes and subgraphs keep
/// independent counters and would otherwise produce the same candidates.
///
/// # Examples
///
/// ```rust
/// use dotkit::ident::{IdPrefixes, IdentifierAllocator};
///
/// let prefixes = IdPrefixes::new("n_", "cluster_")?;
/// let mut ids = IdentifierAllocator::with_prefixes(prefixes);
///
/// assert_eq!(ids.new_node_id(), "n_0");
/// assert_eq!(ids.new_subgraph_id(), "cluster_0");
/// # Ok::<(), dotkit::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdPrefixes {
    node: String,
    subgraph: String,
}

impl IdPrefixes {
    /// Creates a validated prefix pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrefix`] if either prefix is not a bareword and
    /// [`Error::PrefixConflict`] if both are equal.
    pub fn new(node: impl Into<String>, subgraph: impl Into<String>) -> Result<Self> {
        let node = node.into();
        let subgraph = subgraph.into();

        validate_prefix(&node)?;
        validate_prefix(&subgraph)?;
        if node == subgraph {
            return Err(Error::PrefixConflict(node));
        }

        Ok(IdPrefixes { node, subgraph })
    }

    /// Prefix for synthetic node identifiers.
    #[must_use]
    pub fn node(&self) -> &str {
        &self.node
    }

    /// Prefix for synthetic subgraph identifiers.
    #[must_use]
    pub fn subgraph(&self) -> &str {
        &self.subgraph
    }
}

impl Default for IdPrefixes {
    fn default() -> Self {
        IdPrefixes {
            node: DEFAULT_NODE_PREFIX.to_string(),
            subgraph: DEFAULT_SUBGRAPH_PREFIX.to_string(),
        }
    }
}

fn validate_prefix(prefix: &str) -> Result<()> {
    let invalid = |reason| Error::InvalidPrefix {
        prefix: prefix.to_string(),
        reason,
    };

    let Some(first) = prefix.chars().next() else {
        return Err(invalid("prefix is empty"));
    };
    if first.is_ascii_digit() {
        return Err(invalid("prefix starts with a digit"));
    }
    if !prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid("prefix contains characters other than [A-Za-z0-9_]"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefixes() {
        let prefixes = IdPrefixes::default();
        assert_eq!(prefixes.node(), "Node");
        assert_eq!(prefixes.subgraph(), "Subgraph");
    }

    #[test]
    fn test_valid_prefixes() {
        let prefixes = IdPrefixes::new("_n", "cluster_2").unwrap();
        assert_eq!(prefixes.node(), "_n");
        assert_eq!(prefixes.subgraph(), "cluster_2");
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let err = IdPrefixes::new("", "Subgraph").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPrefix {
                reason: "prefix is empty",
                ..
            }
        ));
    }

    #[test]
    fn test_leading_digit_rejected() {
        let err = IdPrefixes::new("Node", "1sub").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidPrefix {
                prefix: "1sub".to_string(),
                reason: "prefix starts with a digit",
            }
        );
    }

    #[test]
    fn test_non_bareword_rejected() {
        for bad in ["no de", "node-", "nöde", "n\"", "a.b"] {
            assert!(
                matches!(
                    IdPrefixes::new(bad, "Subgraph"),
                    Err(Error::InvalidPrefix { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_conflicting_prefixes_rejected() {
        assert_eq!(
            IdPrefixes::new("same", "same"),
            Err(Error::PrefixConflict("same".to_string()))
        );
    }
}
