//! Integration tests for identifier allocation.
//!
//! These drive the allocator the way a graph model does while building a document:
//! unnamed nodes and clusters interleaved with user-named entities, some of which
//! collide with each other or with the synthetic naming scheme.

use dotkit::ident::{IdPrefixes, Identifier, IdentifierAllocator, IdentifierRegistry};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Call {
    Node,
    Subgraph,
    Custom(String),
}

fn run(calls: &[Call]) -> Vec<Identifier> {
    let mut ids = IdentifierAllocator::new();
    calls
        .iter()
        .map(|call| match call {
            Call::Node => ids.new_node_id(),
            Call::Subgraph => ids.new_subgraph_id(),
            Call::Custom(base) => ids.resolve_custom_id(base),
        })
        .collect()
}

fn call_strategy() -> impl Strategy<Value = Call> {
    prop_oneof![
        Just(Call::Node),
        Just(Call::Subgraph),
        // Small alphabet so collisions, including with "Node<n>", are frequent.
        "(a|b|Node|Subgraph|a0|Node1)[0-9]{0,2}".prop_map(Call::Custom),
    ]
}

/// A document with a mix of named and unnamed entities.
#[test]
fn test_mixed_document_session() {
    let mut ids = IdentifierAllocator::new();

    let root = ids.new_subgraph_id();
    let start = ids.resolve_custom_id("start");
    let n0 = ids.new_node_id();
    let n1 = ids.new_node_id();
    let end = ids.resolve_custom_id("end");
    let start_again = ids.resolve_custom_id("start");
    let cluster = ids.new_subgraph_id();

    assert_eq!(root, "Subgraph0");
    assert_eq!(start, "start");
    assert_eq!(n0, "Node0");
    assert_eq!(n1, "Node1");
    assert_eq!(end, "end");
    assert_eq!(start_again, "start0");
    assert_eq!(cluster, "Subgraph1");
    assert_eq!(ids.len(), 7);
}

#[test]
fn test_repeated_custom_id_three_times() {
    let mut ids = IdentifierAllocator::new();
    let first = ids.resolve_custom_id("foo");
    let second = ids.resolve_custom_id("foo");
    let third = ids.resolve_custom_id("foo");

    assert_eq!(first, "foo");
    assert_ne!(second, "foo");
    assert_ne!(third, first);
    assert_ne!(third, second);
}

#[test]
fn test_interleaved_bases_never_share_a_suffix() {
    let mut ids = IdentifierAllocator::new();
    ids.resolve_custom_id("foo");
    ids.resolve_custom_id("bar");
    let foo = ids.resolve_custom_id("foo");
    let bar = ids.resolve_custom_id("bar");

    let foo_suffix = foo.strip_prefix("foo").unwrap();
    let bar_suffix = bar.strip_prefix("bar").unwrap();
    assert_ne!(foo_suffix, bar_suffix);
}

#[test]
fn test_custom_ids_in_synthetic_namespace() {
    let mut ids = IdentifierAllocator::new();
    let user: Vec<Identifier> = (0..5)
        .map(|i| ids.resolve_custom_id(&format!("Node{i}")))
        .collect();

    let synthetic = ids.new_node_id();
    assert_eq!(synthetic, "Node5");
    assert!(!user.contains(&synthetic));
}

#[test]
fn test_custom_prefix_session() -> dotkit::Result<()> {
    let mut ids = IdentifierAllocator::with_prefixes(IdPrefixes::new("n", "cluster_")?);
    assert_eq!(ids.new_node_id(), "n0");
    assert_eq!(ids.new_subgraph_id(), "cluster_0");
    assert_eq!(ids.resolve_custom_id("n1"), "n1");
    assert_eq!(ids.new_node_id(), "n2");
    Ok(())
}

#[test]
fn test_registry_standalone() {
    let mut registry = IdentifierRegistry::new();
    let (a, new_a) = registry.try_register("a");
    let (b, new_b) = registry.try_register("a");
    assert!(new_a);
    assert!(!new_b);
    assert_eq!(a, b);
    assert_eq!(registry.len(), 1);
}

proptest! {
    #[test]
    fn property_synthetic_ids_distinct(nodes in 0usize..200, subgraphs in 0usize..200) {
        let mut ids = IdentifierAllocator::new();
        let custom = ids.resolve_custom_id("Node3");

        let mut seen: HashSet<Identifier> = HashSet::new();
        seen.insert(custom);
        for _ in 0..nodes {
            prop_assert!(seen.insert(ids.new_node_id()));
        }
        for _ in 0..subgraphs {
            prop_assert!(seen.insert(ids.new_subgraph_id()));
        }
        prop_assert_eq!(seen.len(), nodes + subgraphs + 1);
    }

    #[test]
    fn property_every_returned_id_is_unique(calls in proptest::collection::vec(call_strategy(), 0..120)) {
        let returned = run(&calls);
        let distinct: HashSet<&str> = returned.iter().map(Identifier::as_str).collect();
        prop_assert_eq!(distinct.len(), returned.len());
    }

    #[test]
    fn property_unique_custom_ids_unchanged(calls in proptest::collection::vec(call_strategy(), 0..60)) {
        let returned = run(&calls);
        let mut earlier: HashSet<&str> = HashSet::new();
        for (call, id) in calls.iter().zip(&returned) {
            if let Call::Custom(base) = call {
                if !earlier.contains(base.as_str()) {
                    prop_assert_eq!(id.as_str(), base.as_str());
                } else {
                    prop_assert!(id.starts_with(base.as_str()));
                    prop_assert_ne!(id.as_str(), base.as_str());
                }
            }
            earlier.insert(id.as_str());
        }
    }

    #[test]
    fn property_allocation_is_deterministic(calls in proptest::collection::vec(call_strategy(), 0..80)) {
        prop_assert_eq!(run(&calls), run(&calls));
    }
}
