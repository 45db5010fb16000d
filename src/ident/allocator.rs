//! Synthetic identifier generation and custom identifier disambiguation.
//!
//! The [`IdentifierAllocator`] is the session object a graph model talks to whenever it
//! creates a node, a subgraph, or any entity with a caller-chosen name. It owns an
//! [`IdentifierRegistry`] together with three monotonic counters:
//!
//! - a node counter, consumed by [`IdentifierAllocator::new_node_id`]
//! - a subgraph counter, consumed by [`IdentifierAllocator::new_subgraph_id`]
//! - one disambiguation counter shared by every custom-id collision
//!
//! # Disambiguation
//!
//! A custom id that is already taken gets the current value of the shared counter
//! appended, the counter advances, and the candidate is tried again until it is
//! accepted. Because the counter is global and never rewinds, no suffix value is ever
//! tried twice in a session, whatever the base string. The number of probes a call can
//! need is bounded by the number of collisions that happened before it.
//!
//! ```rust
//! use dotkit::ident::IdentifierAllocator;
//!
//! let mut ids = IdentifierAllocator::new();
//! assert_eq!(ids.resolve_custom_id("foo"), "foo");
//! assert_eq!(ids.resolve_custom_id("bar"), "bar");
//! assert_eq!(ids.resolve_custom_id("foo"), "foo0");
//! assert_eq!(ids.resolve_custom_id("bar"), "bar1");
//! ```

use tracing::{debug, trace};

use crate::ident::{IdPrefixes, Identifier, IdentifierRegistry};

/// Hands out unique identifiers for one document-generation session.
///
/// Every identifier the allocator returns has been committed to its registry, and no
/// two returned identifiers are equal. Given the same sequence of calls on a fresh
/// allocator, the same sequence of identifiers comes back.
///
/// None of the operations fail; collisions are resolved by renaming.
///
/// # Examples
///
/// ```rust
/// use dotkit::ident::IdentifierAllocator;
///
/// let mut ids = IdentifierAllocator::new();
///
/// let n0 = ids.new_node_id();
/// let s0 = ids.new_subgraph_id();
/// let n1 = ids.new_node_id();
///
/// assert_eq!(n0, "Node0");
/// assert_eq!(s0, "Subgraph0");
/// assert_eq!(n1, "Node1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdentifierAllocator {
    registry: IdentifierRegistry,
    prefixes: IdPrefixes,
    next_node_seq: u64,
    next_subgraph_seq: u64,
    next_disambiguation_seq: u64,
}

impl IdentifierAllocator {
    /// Creates an allocator with the default `Node` / `Subgraph` prefixes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocator using custom synthetic prefixes.
    #[must_use]
    pub fn with_prefixes(prefixes: IdPrefixes) -> Self {
        IdentifierAllocator {
            prefixes,
            ..Self::default()
        }
    }

    /// Returns a fresh identifier for a node created without an explicit id.
    ///
    /// The candidate is the node prefix followed by the node counter. If a custom id
    /// already occupies that name the counter keeps advancing until a free one is found.
    pub fn new_node_id(&mut self) -> Identifier {
        allocate_synthetic(
            &mut self.registry,
            self.prefixes.node(),
            &mut self.next_node_seq,
        )
    }

    /// Returns a fresh identifier for a subgraph created without an explicit id.
    ///
    /// Works like [`new_node_id`](Self::new_node_id) with its own counter and prefix.
    /// Subgraph and node ids share the uniqueness namespace but not a sequence.
    pub fn new_subgraph_id(&mut self) -> Identifier {
        allocate_synthetic(
            &mut self.registry,
            self.prefixes.subgraph(),
            &mut self.next_subgraph_seq,
        )
    }

    /// Commits a caller-supplied identifier, renaming it if it is already taken.
    ///
    /// If `base` is free it is returned unchanged. Otherwise `base` followed by the
    /// shared disambiguation counter is tried, advancing the counter on every probe,
    /// until a free candidate is found. The caller must use the returned value as the
    /// entity's actual identifier.
    ///
    /// `base` is not checked against the DOT grammar; quoting is up to the writer.
    ///
    /// # Arguments
    ///
    /// * `base` - The identifier the caller asked for
    ///
    /// # Returns
    ///
    /// The identifier that was actually committed.
    pub fn resolve_custom_id(&mut self, base: &str) -> Identifier {
        let (id, is_new) = self.registry.try_register(base);
        if is_new {
            return id;
        }

        let mut probes = 0u64;
        loop {
            let candidate = format!("{base}{}", self.next_disambiguation_seq);
            self.next_disambiguation_seq += 1;
            probes += 1;

            let (id, is_new) = self.registry.try_register(&candidate);
            if is_new {
                debug!(requested = base, assigned = %id, probes, "renamed colliding custom identifier");
                return id;
            }
            trace!(candidate = %candidate, "disambiguated identifier already taken");
        }
    }

    /// Returns `true` if `id` is already committed in this session.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.registry.contains(id)
    }

    /// Number of identifiers committed in this session.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns `true` if no identifier has been committed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Read-only access to the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &IdentifierRegistry {
        &self.registry
    }

    /// The synthetic prefixes in use.
    #[must_use]
    pub fn prefixes(&self) -> &IdPrefixes {
        &self.prefixes
    }

    /// Ends the session, keeping the set of committed identifiers.
    #[must_use]
    pub fn into_registry(self) -> IdentifierRegistry {
        self.registry
    }
}

fn allocate_synthetic(
    registry: &mut IdentifierRegistry,
    prefix: &str,
    seq: &mut u64,
) -> Identifier {
    loop {
        let candidate = format!("{prefix}{seq}");
        *seq += 1;

        let (id, is_new) = registry.try_register(&candidate);
        if is_new {
            return id;
        }
        trace!(candidate = %candidate, "synthetic identifier already taken");
    }
}
