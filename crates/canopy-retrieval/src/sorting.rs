//! Deterministic total order over a set of nodes.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use canopy_core::errors::{CanopyResult, RetrievalError};
use canopy_core::models::{Node, NodeId, OrderingPolicy};

/// Order nodes ascending by structural key.
///
/// The input map's iteration order is irrelevant: nodes are sorted on
/// `(index, id)`, and ids are unique, so the output is total. Under
/// `Strict`, two nodes sharing an index are rejected; under `TieBreakById`
/// they stay in id order.
pub fn sorted_node_list(
    nodes: HashMap<NodeId, Arc<Node>>,
    policy: OrderingPolicy,
) -> CanopyResult<Vec<Arc<Node>>> {
    let mut sorted: Vec<Arc<Node>> = nodes.into_values().collect();
    sorted.sort_unstable_by(|a, b| {
        a.index()
            .cmp(&b.index())
            .then_with(|| a.id().cmp(b.id()))
    });

    for pair in sorted.windows(2) {
        let (first, second) = (&pair[0], &pair[1]);
        if first.index() != second.index() {
            continue;
        }
        match policy {
            OrderingPolicy::Strict => {
                return Err(RetrievalError::OrderingContractViolation {
                    index: first.index(),
                    first: first.id().to_string(),
                    second: second.id().to_string(),
                }
                .into());
            }
            OrderingPolicy::TieBreakById => {
                warn!(
                    index = first.index(),
                    first = first.id(),
                    second = second.id(),
                    "duplicate ordering key, breaking tie by id"
                );
            }
        }
    }

    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(nodes: &[(&str, usize)]) -> HashMap<NodeId, Arc<Node>> {
        nodes
            .iter()
            .map(|(id, index)| (id.to_string(), Arc::new(Node::with_id(*id, *id, *index))))
            .collect()
    }

    fn ids(nodes: &[Arc<Node>]) -> Vec<&str> {
        nodes.iter().map(|n| n.id()).collect()
    }

    #[test]
    fn sorts_ascending_by_index() {
        let sorted =
            sorted_node_list(map(&[("c", 7), ("a", 2), ("b", 0)]), OrderingPolicy::Strict).unwrap();
        assert_eq!(ids(&sorted), vec!["b", "a", "c"]);
    }

    #[test]
    fn empty_input_sorts_to_empty() {
        assert!(sorted_node_list(HashMap::new(), OrderingPolicy::Strict)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn strict_rejects_duplicate_keys() {
        let err = sorted_node_list(map(&[("y", 1), ("x", 1), ("z", 0)]), OrderingPolicy::Strict)
            .unwrap_err();
        match err {
            canopy_core::CanopyError::RetrievalError(
                RetrievalError::OrderingContractViolation {
                    index,
                    first,
                    second,
                },
            ) => {
                assert_eq!(index, 1);
                assert_eq!(first, "x");
                assert_eq!(second, "y");
            }
            other => panic!("expected ordering violation, got {other:?}"),
        }
    }

    #[test]
    fn tie_break_orders_duplicates_by_id() {
        let sorted = sorted_node_list(
            map(&[("y", 1), ("x", 1), ("z", 0)]),
            OrderingPolicy::TieBreakById,
        )
        .unwrap();
        assert_eq!(ids(&sorted), vec!["z", "x", "y"]);
    }
}
