//! Identifier allocation and collision resolution.
//!
//! Every node, subgraph and user-named entity written into a DOT document needs an
//! identifier that no other entity in the same document uses. This module provides
//! the pieces that guarantee it:
//!
//! - [`IdentifierRegistry`] - the set of identifiers committed so far, and the only
//!   authority on uniqueness
//! - [`IdentifierAllocator`] - built on a registry; makes up identifiers for
//!   unnamed nodes and subgraphs and renames colliding user-supplied ones
//! - [`IdPrefixes`] - the reserved prefixes used for made-up identifiers
//! - [`Identifier`] - the owned handle returned for every committed value
//!
//! All four live for exactly one document-generation session. Create an allocator per
//! graph and drop it once the document has been written.
//!
//! # Examples
//!
//! ```rust
//! use dotkit::ident::IdentifierAllocator;
//!
//! let mut ids = IdentifierAllocator::new();
//!
//! let unnamed = ids.new_node_id();
//! let cluster = ids.new_subgraph_id();
//! let start = ids.resolve_custom_id("start");
//! let start_again = ids.resolve_custom_id("start");
//!
//! assert_eq!(unnamed, "Node0");
//! assert_eq!(cluster, "Subgraph0");
//! assert_eq!(start, "start");
//! assert_eq!(start_again, "start0");
//! ```

mod allocator;
mod identifier;
mod prefixes;
mod registry;

pub use allocator::IdentifierAllocator;
pub use identifier::Identifier;
pub use prefixes::{IdPrefixes, DEFAULT_NODE_PREFIX, DEFAULT_SUBGRAPH_PREFIX};
pub use registry::IdentifierRegistry;
