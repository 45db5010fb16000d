use thiserror::Error;

use crate::catalog::Domain;

/// The generic Error type for the fallible parts of this library.
///
/// The core services never fail: identifier collisions are resolved by renaming and
/// out-of-range enumerated values degrade to the empty token. Errors only arise from
/// configuring the allocator and from the strict typed conversions offered next to
/// the permissive lookups.
///
/// # Examples
///
/// ```rust
/// use dotkit::{Error, ident::IdPrefixes};
///
/// match IdPrefixes::new("9lives", "Subgraph") {
///     Err(Error::InvalidPrefix { prefix, .. }) => assert_eq!(prefix, "9lives"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A synthetic identifier prefix is not a DOT bareword.
    ///
    /// Prefixes must be non-empty, must not start with a digit and may only contain
    /// ASCII alphanumerics and underscores, so that every synthetic identifier can be
    /// written unquoted.
    #[error("Invalid identifier prefix '{prefix}': {reason}")]
    InvalidPrefix {
        /// The rejected prefix
        prefix: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// The node and subgraph prefixes are the same string.
    #[error("Node and subgraph prefixes must differ, both are '{0}'")]
    PrefixConflict(String),

    /// A raw integer does not name a value of the given domain.
    ///
    /// Only returned by strict conversions such as
    /// [`DomainValue::from_index`](crate::catalog::DomainValue::from_index);
    /// [`EnumCatalog::to_text`](crate::catalog::EnumCatalog::to_text) maps the same
    /// input to the empty token instead.
    #[error("Value {value} is out of range for domain {domain}")]
    OutOfRange {
        /// The domain the value was looked up in
        domain: Domain,
        /// The offending raw value
        value: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::PrefixConflict("Node".to_string());
        assert_eq!(
            err.to_string(),
            "Node and subgraph prefixes must differ, both are 'Node'"
        );

        let err = Error::OutOfRange {
            domain: Domain::RankDir,
            value: 9,
        };
        assert_eq!(err.to_string(), "Value 9 is out of range for domain RankDir");
    }
}
