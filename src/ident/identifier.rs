//! Identifier handle returned by the registry.
//!
//! This module provides the [`Identifier`] type, an owned and cheaply clonable handle to
//! an identifier that has been committed to an [`IdentifierRegistry`](crate::ident::IdentifierRegistry).
//! The handle shares its text with the registry, so callers may keep it for as long as
//! they like without borrowing the registry and without copying the string.

use std::{borrow::Borrow, fmt, ops::Deref, sync::Arc};

/// An identifier committed to a document-generation session.
///
/// `Identifier` wraps an `Arc<str>`. Cloning it only bumps a reference count, and the
/// text is immutable: once a registry accepted a value it is never changed or removed.
///
/// # Usage
///
/// Identifiers are produced by [`IdentifierRegistry::try_register`](crate::ident::IdentifierRegistry::try_register)
/// and by the [`IdentifierAllocator`](crate::ident::IdentifierAllocator). They are used to:
///
/// - Name nodes and subgraphs in the emitted document
/// - Reference those entities from edge statements
/// - Look up entities by the name they were actually given
///
/// # Examples
///
/// ```rust
/// use dotkit::ident::IdentifierAllocator;
///
/// let mut ids = IdentifierAllocator::new();
/// let a = ids.resolve_custom_id("start");
/// let b = ids.resolve_custom_id("start");
///
/// assert_eq!(a, "start");
/// assert_ne!(a, b);
/// assert_eq!(b.as_str(), "start0");
/// ```
///
/// # Thread Safety
///
/// `Identifier` is [`Send`] and [`Sync`], so finished identifiers can be handed to a
/// writer running on another thread even though the registry itself is single-owner.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(Arc<str>);

impl Identifier {
    /// Returns the identifier text.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if both handles share the same allocation.
    ///
    /// Handles returned for the same committed value by one registry always do.
    #[must_use]
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({:?})", &*self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for Identifier {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashSet<Identifier>` be probed with a plain `&str`.
impl Borrow<str> for Identifier {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identifier {
    #[inline]
    fn from(value: &str) -> Self {
        Identifier(Arc::from(value))
    }
}

impl From<String> for Identifier {
    #[inline]
    fn from(value: String) -> Self {
        Identifier(Arc::from(value))
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0.to_string()
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl PartialEq<String> for Identifier {
    fn eq(&self, other: &String) -> bool {
        *self.0 == **other
    }
}
