//! The set of identifiers committed to one document.

use std::collections::HashSet;

use crate::ident::Identifier;

/// Owns every identifier committed to a single document-generation session.
///
/// The registry is the sole authority on uniqueness. Node ids, subgraph ids and
/// user-chosen ids all live in this one namespace and collide with each other.
/// Values are only ever added; nothing is mutated or removed while the registry lives.
///
/// A registry is created fresh for each graph and dropped once the document has been
/// written. It is not meant to be shared between threads: build one registry per graph
/// when constructing graphs in parallel.
///
/// # Examples
///
/// ```rust
/// use dotkit::ident::IdentifierRegistry;
///
/// let mut registry = IdentifierRegistry::new();
///
/// let (id, is_new) = registry.try_register("a");
/// assert!(is_new);
/// assert_eq!(id, "a");
///
/// let (again, is_new) = registry.try_register("a");
/// assert!(!is_new);
/// assert!(id.ptr_eq(&again));
/// ```
#[derive(Debug, Default, Clone)]
pub struct IdentifierRegistry {
    committed: HashSet<Identifier>,
}

impl IdentifierRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to commit `candidate`.
    ///
    /// If `candidate` has not been seen before it is inserted and `(id, true)` is
    /// returned. Otherwise the registry is left untouched and `(id, false)` is returned,
    /// where `id` is the handle to the already committed value. This never fails.
    ///
    /// # Arguments
    ///
    /// * `candidate` - The identifier text to commit
    ///
    /// # Returns
    ///
    /// The committed identifier and whether this call inserted it.
    pub fn try_register(&mut self, candidate: &str) -> (Identifier, bool) {
        if let Some(existing) = self.committed.get(candidate) {
            return (existing.clone(), false);
        }

        let id = Identifier::from(candidate);
        self.committed.insert(id.clone());
        (id, true)
    }

    /// Returns `true` if `id` has been committed.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.committed.contains(id)
    }

    /// Number of committed identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Returns `true` if nothing has been committed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Iterates over the committed identifiers in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Identifier> + '_ {
        self.committed.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_register_new() {
        let mut registry = IdentifierRegistry::new();
        assert!(registry.is_empty());

        let (id, is_new) = registry.try_register("main");
        assert!(is_new);
        assert_eq!(id, "main");
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("main"));
    }

    #[test]
    fn test_try_register_duplicate_does_not_mutate() {
        let mut registry = IdentifierRegistry::new();
        let (first, _) = registry.try_register("x");

        let (second, is_new) = registry.try_register("x");
        assert!(!is_new);
        assert_eq!(second, "x");
        assert!(first.ptr_eq(&second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_handles_survive_later_insertions() {
        let mut registry = IdentifierRegistry::new();
        let (kept, _) = registry.try_register("kept");

        for i in 0..1000 {
            registry.try_register(&format!("filler{i}"));
        }

        assert_eq!(kept, "kept");
        assert_eq!(registry.len(), 1001);
    }

    #[test]
    fn test_empty_string_is_an_identifier() {
        let mut registry = IdentifierRegistry::new();
        assert!(registry.try_register("").1);
        assert!(!registry.try_register("").1);
        assert!(registry.contains(""));
    }

    #[test]
    fn test_iter_yields_all() {
        let mut registry = IdentifierRegistry::new();
        for name in ["a", "b", "c", "b"] {
            registry.try_register(name);
        }

        let mut names: Vec<&str> = registry.iter().map(Identifier::as_str).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
