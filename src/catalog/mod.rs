//! Canonical tokens for enumerated attribute values.
//!
//! Many DOT attributes only accept values from a closed set: colours, node shapes,
//! edge styles, layout directions and so on. This module provides one typed enum per
//! such domain and a static token table for each, so a graph model can store typed
//! values and turn them into the exact spelling the DOT grammar expects when writing.
//!
//! # Key Components
//!
//! - [`Domain`] - the closed list of enumerated domains
//! - [`DomainValue`] - implemented by every typed domain enum
//! - [`EnumCatalog`] - raw-integer lookups, `(domain, value) -> token`
//!
//! # Table Layout
//!
//! Each table is indexed by the integer value of the domain's variants. Index 0 is the
//! `Unset` sentinel and maps to `""`. A writer emits `key=token` only when the token is
//! non-empty, so an unset or unknown value simply omits the attribute.
//!
//! # Examples
//!
//! ```rust
//! use dotkit::catalog::{Domain, DomainValue, EnumCatalog, NodeShape};
//!
//! let shape = NodeShape::Box;
//! assert_eq!(shape.as_token(), "box");
//! assert_eq!(EnumCatalog::to_text(Domain::NodeShape, shape.index() as i64), "box");
//!
//! // Unknown values degrade to the empty token instead of failing.
//! assert_eq!(EnumCatalog::to_text(Domain::NodeShape, 10_000), "");
//! assert_eq!(EnumCatalog::to_text(Domain::NodeShape, -1), "");
//! ```
//!
//! # Thread Safety
//!
//! All tables are `'static` and immutable, and may be read from any thread without
//! synchronization.

mod attribute;
mod color;
mod edge;
mod graph;
mod node;

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};

use crate::{Error, Result};

pub use attribute::Attribute;
pub use color::Color;
pub use edge::{ArrowType, CompassPoint, DirType, EdgeStyle};
pub use graph::{
    Charset, ClusterMode, DirEdgeConstraints, ImageScaleType, Justification, LabelLoc, Mode,
    Model, Ordering, OutputMode, PageDir, QuadType, RankDir, RankType, Ratio, SmoothType,
    SplineType,
};
pub use node::{NodeShape, NodeStyle};

catalog_domains! {
    /// Named colours ([`Color`]).
    Color,
    /// Node shapes ([`NodeShape`]).
    NodeShape,
    /// Edge styles ([`EdgeStyle`]).
    EdgeStyle,
    /// Node styles ([`NodeStyle`]).
    NodeStyle,
    /// Arrow shapes ([`ArrowType`]).
    ArrowType,
    /// Character sets ([`Charset`]).
    Charset,
    /// Cluster handling ([`ClusterMode`]).
    ClusterMode,
    /// Directed edge constraints ([`DirEdgeConstraints`]).
    DirEdgeConstraints,
    /// Label justification ([`Justification`]).
    Justification,
    /// Label location ([`LabelLoc`]).
    LabelLoc,
    /// Neato optimisation mode ([`Mode`]).
    Mode,
    /// Neato distance model ([`Model`]).
    Model,
    /// Edge ordering ([`Ordering`]).
    Ordering,
    /// Output order ([`OutputMode`]).
    OutputMode,
    /// Page emission order ([`PageDir`]).
    PageDir,
    /// Quadtree scheme ([`QuadType`]).
    QuadType,
    /// Subgraph rank constraints ([`RankType`]).
    RankType,
    /// Rank direction ([`RankDir`]).
    RankDir,
    /// Aspect ratio handling ([`Ratio`]).
    Ratio,
    /// Smoothing ([`SmoothType`]).
    SmoothType,
    /// Edge routing ([`SplineType`]).
    SplineType,
    /// Image scaling ([`ImageScaleType`]).
    ImageScaleType,
    /// Edge direction ([`DirType`]).
    DirType,
    /// Port compass points ([`CompassPoint`]).
    CompassPoint,
    /// Attribute keys ([`Attribute`]).
    Attribute,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed value of one enumerated domain.
///
/// Implemented by every domain enum in this module. The discriminant of a variant is its
/// index into [`DomainValue::TOKENS`], and discriminant 0 is always the `Unset`
/// sentinel.
pub trait DomainValue:
    Copy + Eq + fmt::Debug + Default + EnumCount + IntoEnumIterator + 'static
{
    /// The domain this type belongs to.
    const DOMAIN: Domain;

    /// Token table of the domain. Entry 0 is `""`.
    const TOKENS: &'static [&'static str];

    /// Returns the integer value of this variant, which is its index in [`Self::TOKENS`].
    fn index(self) -> usize;

    /// Returns the canonical token, or `""` for the unset sentinel.
    #[must_use]
    fn as_token(self) -> &'static str {
        Self::TOKENS.get(self.index()).copied().unwrap_or("")
    }

    /// Returns `true` for the unset sentinel.
    #[must_use]
    fn is_unset(self) -> bool {
        self.index() == 0
    }

    /// Converts a raw integer into a variant, strictly.
    ///
    /// Unlike [`EnumCatalog::to_text`], out-of-range input is reported instead of being
    /// mapped to the empty token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `value` is negative or not below the size of the
    /// domain's table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotkit::catalog::{DomainValue, RankDir};
    ///
    /// assert_eq!(RankDir::from_index(2)?, RankDir::LeftRight);
    /// assert!(RankDir::from_index(5).is_err());
    /// # Ok::<(), dotkit::Error>(())
    /// ```
    fn from_index(value: i64) -> Result<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::iter().nth(index))
            .ok_or(Error::OutOfRange {
                domain: Self::DOMAIN,
                value,
            })
    }
}

/// Lookup of canonical tokens by domain and raw integer value.
///
/// The catalog is a set of `'static` tables built at compile time; there is nothing to
/// construct or tear down.
pub struct EnumCatalog;

impl EnumCatalog {
    /// Returns the canonical token for `value` in `domain`.
    ///
    /// Values inside the table (including the sentinel 0) return their entry. Anything
    /// else, negative or past the end, returns `""` so that a writer omits the attribute
    /// rather than aborting the document.
    ///
    /// # Arguments
    ///
    /// * `domain` - The enumerated domain to look in
    /// * `value` - The raw integer value
    #[must_use]
    pub fn to_text(domain: Domain, value: i64) -> &'static str {
        usize::try_from(value)
            .ok()
            .and_then(|index| domain.tokens().get(index))
            .copied()
            .unwrap_or("")
    }

    /// Returns the token table of `domain`, sentinel included.
    #[must_use]
    pub fn tokens(domain: Domain) -> &'static [&'static str] {
        domain.tokens()
    }

    /// Number of entries in the table of `domain`, sentinel included.
    #[must_use]
    pub fn len(domain: Domain) -> usize {
        domain.tokens().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_domain<T: DomainValue>() {
        assert_eq!(T::TOKENS.len(), T::COUNT, "{}", T::DOMAIN);
        assert_eq!(T::TOKENS[0], "", "{}", T::DOMAIN);
        assert!(T::default().is_unset());

        for (position, variant) in T::iter().enumerate() {
            assert_eq!(variant.index(), position, "{} {variant:?}", T::DOMAIN);
            assert_eq!(
                EnumCatalog::to_text(T::DOMAIN, position as i64),
                variant.as_token()
            );
            assert_eq!(T::from_index(position as i64), Ok(variant));
            if position > 0 {
                assert!(!variant.as_token().is_empty(), "{} {variant:?}", T::DOMAIN);
            }
        }

        let past_end = T::COUNT as i64;
        assert_eq!(EnumCatalog::to_text(T::DOMAIN, past_end), "");
        assert_eq!(
            T::from_index(past_end),
            Err(Error::OutOfRange {
                domain: T::DOMAIN,
                value: past_end,
            })
        );
    }

    #[test]
    fn test_every_domain_table() {
        check_domain::<Color>();
        check_domain::<NodeShape>();
        check_domain::<EdgeStyle>();
        check_domain::<NodeStyle>();
        check_domain::<ArrowType>();
        check_domain::<Charset>();
        check_domain::<ClusterMode>();
        check_domain::<DirEdgeConstraints>();
        check_domain::<Justification>();
        check_domain::<LabelLoc>();
        check_domain::<Mode>();
        check_domain::<Model>();
        check_domain::<Ordering>();
        check_domain::<OutputMode>();
        check_domain::<PageDir>();
        check_domain::<QuadType>();
        check_domain::<RankType>();
        check_domain::<RankDir>();
        check_domain::<Ratio>();
        check_domain::<SmoothType>();
        check_domain::<SplineType>();
        check_domain::<ImageScaleType>();
        check_domain::<DirType>();
        check_domain::<CompassPoint>();
        check_domain::<Attribute>();
    }

    #[test]
    fn test_domain_list_is_closed() {
        assert_eq!(Domain::COUNT, 25);
        for domain in Domain::iter() {
            assert_eq!(EnumCatalog::to_text(domain, 0), "");
            assert!(EnumCatalog::len(domain) >= 2, "{domain}");
        }
    }

    #[test]
    fn test_to_text_color() {
        assert_eq!(EnumCatalog::to_text(Domain::Color, 0), "");
        assert_eq!(
            EnumCatalog::to_text(Domain::Color, Color::Red.index() as i64),
            "red"
        );
        assert_eq!(EnumCatalog::to_text(Domain::Color, 656), "");
    }

    #[test]
    fn test_to_text_extremes() {
        for domain in Domain::iter() {
            assert_eq!(EnumCatalog::to_text(domain, -1), "");
            assert_eq!(EnumCatalog::to_text(domain, i64::MIN), "");
            assert_eq!(EnumCatalog::to_text(domain, i64::MAX), "");
        }
    }

    #[test]
    fn test_domain_names() {
        assert_eq!(Domain::Color.name(), "Color");
        assert_eq!(Domain::RankDir.to_string(), "RankDir");
        assert_eq!(Color::DOMAIN, Domain::Color);
        assert_eq!(Attribute::DOMAIN, Domain::Attribute);
    }

    #[test]
    fn test_spline_count_entry_is_out_of_range() {
        assert_eq!(EnumCatalog::to_text(Domain::SplineType, 5), "compound");
        assert_eq!(EnumCatalog::to_text(Domain::SplineType, 6), "");
        assert_eq!(EnumCatalog::to_text(Domain::SplineType, 7), "");
    }
}
