//! Integration tests for the enumerated-value catalog.

use dotkit::{
    catalog::{
        ArrowType, Attribute, Charset, Color, CompassPoint, DirType, Domain, DomainValue,
        EdgeStyle, EnumCatalog, Justification, NodeShape, NodeStyle, PageDir, RankDir,
        SplineType,
    },
    Error,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

/// Builds an attribute list the way a writer does, skipping empty tokens.
fn attr_list(pairs: &[(Attribute, &'static str)]) -> String {
    pairs
        .iter()
        .filter(|(_, token)| !token.is_empty())
        .map(|(key, token)| format!("{}={token}", key.key()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[test]
fn test_writer_omits_unset_values() {
    let list = attr_list(&[
        (Attribute::Shape, NodeShape::Ellipse.as_token()),
        (Attribute::Style, NodeStyle::Unset.as_token()),
        (Attribute::Color, Color::Red.as_token()),
        (Attribute::Fillcolor, EnumCatalog::to_text(Domain::Color, 9_999)),
    ]);
    assert_eq!(list, "shape=ellipse, color=red");
}

#[test]
fn test_graph_level_tokens() {
    let list = attr_list(&[
        (Attribute::Rankdir, RankDir::LeftRight.as_token()),
        (Attribute::Splines, SplineType::Ortho.as_token()),
        (Attribute::Charset, Charset::Latin1.as_token()),
        (Attribute::Pagedir, PageDir::TopRight.as_token()),
        (Attribute::Labeljust, Justification::Left.as_token()),
    ]);
    assert_eq!(
        list,
        "rankdir=LR, splines=ortho, charset=Latin1, pagedir=TR, labeljust=l"
    );
}

#[test]
fn test_edge_level_tokens() {
    let list = attr_list(&[
        (Attribute::Arrowhead, ArrowType::Vee.as_token()),
        (Attribute::Arrowtail, ArrowType::ODot.as_token()),
        (Attribute::Dir, DirType::Both.as_token()),
        (Attribute::Style, EdgeStyle::Dashed.as_token()),
        (Attribute::Headport, CompassPoint::NorthEast.as_token()),
    ]);
    assert_eq!(
        list,
        "arrowhead=vee, arrowtail=odot, dir=both, style=dashed, headport=ne"
    );
}

#[test]
fn test_to_text_matches_typed_lookup() {
    assert_eq!(EnumCatalog::to_text(Domain::Color, 0), "");
    assert_eq!(
        EnumCatalog::to_text(Domain::Color, Color::Red.index() as i64),
        "red"
    );
    assert_eq!(
        EnumCatalog::to_text(Domain::Color, EnumCatalog::len(Domain::Color) as i64),
        ""
    );
}

#[test]
fn test_strict_conversion() {
    assert_eq!(NodeShape::from_index(1), Ok(NodeShape::Box));
    assert_eq!(
        NodeShape::from_index(-3),
        Err(Error::OutOfRange {
            domain: Domain::NodeShape,
            value: -3,
        })
    );
}

#[test]
fn test_tokens_are_reachable_for_every_domain() {
    for domain in Domain::iter() {
        let tokens = EnumCatalog::tokens(domain);
        assert_eq!(tokens[0], "");
        for (index, token) in tokens.iter().enumerate() {
            assert_eq!(EnumCatalog::to_text(domain, index as i64), *token);
        }
    }
}

proptest! {
    #[test]
    fn property_out_of_range_is_empty(value in any::<i64>()) {
        for domain in Domain::iter() {
            let len = EnumCatalog::len(domain) as i64;
            let token = EnumCatalog::to_text(domain, value);
            if value < 0 || value >= len {
                prop_assert_eq!(token, "");
            } else {
                prop_assert_eq!(token, EnumCatalog::tokens(domain)[value as usize]);
            }
        }
    }

    #[test]
    fn property_far_past_end_is_empty(offset in 0i64..1_000_000) {
        for domain in Domain::iter() {
            let past_end = EnumCatalog::len(domain) as i64 + offset;
            prop_assert_eq!(EnumCatalog::to_text(domain, past_end), "");
        }
    }
}
