//! Property tests for canopy-retrieval: cardinality, ordering, determinism,
//! query independence, and all-or-nothing resolution.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use canopy_core::models::{Node, OrderingPolicy, QueryBundle};
use canopy_core::traits::{IDocStore, IRetriever};
use canopy_docstore::InMemoryDocStore;
use canopy_retrieval::{sorted_node_list, TreeRootRetriever};
use canopy_tree::{TreeIndex, TreeIndexBuilder};

/// A flat index whose roots carry the given keys, ids `n0..nk`.
fn flat_index(keys: &[usize]) -> TreeIndex {
    let store: Arc<dyn IDocStore> = Arc::new(InMemoryDocStore::new());
    let mut builder = TreeIndexBuilder::new(store);
    for (i, key) in keys.iter().enumerate() {
        builder
            .add_node(Node::with_id(format!("n{i}"), format!("text {i}"), *key), None)
            .unwrap();
    }
    builder.build().unwrap()
}

fn distinct_keys() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::hash_set(0_usize..10_000, 1..40).prop_map(|set| set.into_iter().collect())
}

// =============================================================================
// Cardinality and order
// =============================================================================
proptest! {
    #[test]
    fn output_length_equals_root_count(keys in distinct_keys()) {
        let index = flat_index(&keys);
        let nodes = TreeRootRetriever::new(&index).retrieve(&QueryBundle::new("q")).unwrap();
        prop_assert_eq!(nodes.len(), index.index_struct().root_nodes().len());
    }

    #[test]
    fn output_is_ascending_by_key(keys in distinct_keys()) {
        let index = flat_index(&keys);
        let nodes = TreeRootRetriever::new(&index).retrieve(&QueryBundle::new("q")).unwrap();

        let got: Vec<usize> = nodes.iter().map(|n| n.node.index()).collect();
        let mut want = keys.clone();
        want.sort_unstable();
        prop_assert_eq!(got, want);
    }
}

// =============================================================================
// Determinism and query independence
// =============================================================================
proptest! {
    #[test]
    fn repeated_calls_and_any_query_give_same_sequence(
        keys in distinct_keys(),
        q1 in ".{0,200}",
        q2 in ".{0,200}",
    ) {
        let index = flat_index(&keys);
        let retriever = TreeRootRetriever::new(&index);

        let a: Vec<String> = retriever.retrieve(&QueryBundle::new(q1.clone())).unwrap()
            .iter().map(|n| n.id().to_string()).collect();
        let b: Vec<String> = retriever.retrieve(&QueryBundle::new(q1)).unwrap()
            .iter().map(|n| n.id().to_string()).collect();
        let c: Vec<String> = retriever.retrieve(&QueryBundle::new(q2)).unwrap()
            .iter().map(|n| n.id().to_string()).collect();

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&a, &c);
    }
}

// =============================================================================
// Missing roots: error, never a partial result
// =============================================================================
proptest! {
    #[test]
    fn any_missing_root_fails_the_call(
        keys in distinct_keys(),
        pick in any::<prop::sample::Index>(),
    ) {
        let index = flat_index(&keys);
        let victim = format!("n{}", pick.index(keys.len()));
        index.docstore().delete_node(&victim).unwrap();

        let err = TreeRootRetriever::new(&index).retrieve(&QueryBundle::new("q")).unwrap_err();
        let expected = vec![victim];
        prop_assert_eq!(err.missing_node_ids(), Some(expected.as_slice()));
    }
}

// =============================================================================
// Ordering policies with colliding keys
// =============================================================================
proptest! {
    #[test]
    fn strict_fails_exactly_when_keys_collide(keys in prop::collection::vec(0_usize..5, 1..12)) {
        let nodes = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (format!("n{i:02}"), Arc::new(Node::with_id(format!("n{i:02}"), "t", *k))))
            .collect();
        let has_dupes = keys.iter().collect::<HashSet<_>>().len() != keys.len();
        let result = sorted_node_list(nodes, OrderingPolicy::Strict);
        prop_assert_eq!(result.is_err(), has_dupes);
    }

    #[test]
    fn tie_break_orders_by_key_then_id(keys in prop::collection::vec(0_usize..5, 1..12)) {
        let nodes = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (format!("n{i:02}"), Arc::new(Node::with_id(format!("n{i:02}"), "t", *k))))
            .collect();
        let sorted = sorted_node_list(nodes, OrderingPolicy::TieBreakById).unwrap();

        prop_assert_eq!(sorted.len(), keys.len());
        for pair in sorted.windows(2) {
            let a = (pair[0].index(), pair[0].id());
            let b = (pair[1].index(), pair[1].id());
            prop_assert!(a < b, "{:?} should precede {:?}", a, b);
        }
    }
}
