// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # dotkit
//!
//! Support services for emitting Graphviz DOT documents.
//!
//! A graph model that writes DOT has two jobs with real invariants behind them: every
//! identifier it writes must be unique within the document, and every enumerated
//! attribute value must be spelled exactly as Graphviz expects. `dotkit` covers both and
//! leaves building the node/edge tree, escaping labels and writing bytes to the caller.
//!
//! ## Features
//!
//! - **Unique identifiers** - one registry per document, shared by nodes, subgraphs and
//!   user-chosen names
//! - **Synthetic ids** - `Node0`, `Node1`, ... and `Subgraph0`, ... with configurable prefixes
//! - **Deterministic disambiguation** - colliding names get a numeric suffix from one
//!   session-wide counter, so no suffix is ever tried twice
//! - **Typed attribute values** - colours, shapes, styles, directions and attribute keys as
//!   Rust enums backed by static token tables
//! - **Never fails on the hot path** - collisions rename, unknown enum values become `""`
//!
//! ## Quick Start
//!
//! ```rust
//! use dotkit::prelude::*;
//!
//! let mut ids = IdentifierAllocator::new();
//!
//! let a = ids.resolve_custom_id("a");
//! let b = ids.new_node_id();
//! let a2 = ids.resolve_custom_id("a");
//!
//! assert_eq!((a.as_str(), b.as_str(), a2.as_str()), ("a", "Node0", "a0"));
//!
//! let shape = NodeShape::Box;
//! let color = Color::Unset;
//! let mut attrs = Vec::new();
//! for (key, token) in [
//!     (Attribute::Shape, shape.as_token()),
//!     (Attribute::Color, color.as_token()),
//! ] {
//!     // An empty token means the attribute is omitted.
//!     if !token.is_empty() {
//!         attrs.push(format!("{}={token}", key.key()));
//!     }
//! }
//! assert_eq!(attrs, vec!["shape=box"]);
//! ```
//!
//! ## Architecture
//!
//! - [`ident`] - identifier registry and allocator, one per document-generation session
//! - [`catalog`] - enumerated domains and their canonical tokens, process-wide and immutable
//! - [`Error`] and [`Result`] - errors for configuration and strict conversions
//!
//! The two modules do not depend on each other or on any graph model.
//!
//! ## Logging
//!
//! Collisions are reported through [`tracing`] events (`debug` for renamed custom ids,
//! `trace` for every rejected candidate). The library never installs a subscriber.
//!
//! ## Thread Safety
//!
//! The catalog is `'static` data and can be read from anywhere. An
//! [`ident::IdentifierAllocator`] is owned by a single session and has no internal
//! locking; build one per graph when generating documents in parallel.

#[macro_use]
pub(crate) mod macros;

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use dotkit::prelude::*;
///
/// let mut ids = IdentifierAllocator::new();
/// assert_eq!(ids.new_subgraph_id(), "Subgraph0");
/// assert_eq!(RankDir::LeftRight.as_token(), "LR");
/// ```
pub mod prelude;

/// Unique identifiers for nodes, subgraphs and user-named entities.
///
/// # Key Types
///
/// - [`ident::IdentifierRegistry`] - the set of committed identifiers
/// - [`ident::IdentifierAllocator`] - synthetic ids and custom-id disambiguation
/// - [`ident::IdPrefixes`] - prefixes for synthetic ids
/// - [`ident::Identifier`] - owned handle to a committed identifier
pub mod ident;

/// Enumerated attribute domains and their canonical DOT tokens.
///
/// # Key Types
///
/// - [`catalog::Domain`] - the closed list of domains
/// - [`catalog::DomainValue`] - typed access to a domain's tokens
/// - [`catalog::EnumCatalog`] - raw `(domain, value)` lookups
pub mod catalog;

/// `dotkit` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use dotkit::{ident::IdPrefixes, Result};
///
/// fn cluster_prefixes() -> Result<IdPrefixes> {
///     IdPrefixes::new("n", "cluster_")
/// }
/// # cluster_prefixes().unwrap();
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `dotkit` Error type
///
/// Only configuration and strict conversions can fail; see [`Error`] for the variants.
pub use error::Error;
