//! # dotkit Prelude
//!
//! This module re-exports the types most code needs when emitting a DOT document:
//! the identifier allocator and its handle type, the catalog entry points and every
//! typed domain enum. Import it with a glob:
//!
//! ```rust
//! use dotkit::prelude::*;
//! ```

pub use crate::{
    catalog::{
        ArrowType, Attribute, Charset, ClusterMode, Color, CompassPoint, DirEdgeConstraints,
        DirType, Domain, DomainValue, EdgeStyle, EnumCatalog, ImageScaleType, Justification,
        LabelLoc, Mode, Model, NodeShape, NodeStyle, Ordering, OutputMode, PageDir, QuadType,
        RankDir, RankType, Ratio, SmoothType, SplineType,
    },
    ident::{IdPrefixes, Identifier, IdentifierAllocator, IdentifierRegistry},
    Error, Result,
};
