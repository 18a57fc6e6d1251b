use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::errors::CanopyResult;
use crate::models::{Node, NodeId};

/// Shared node repository. Knows nothing about tree topology.
///
/// Implementations declare their own concurrency contract through the
/// `Send + Sync` bound: readers may call `resolve` concurrently.
pub trait IDocStore: Send + Sync {
    /// Resolve every id to its node. Fails with `NodeNotFound` listing all
    /// missing ids; never returns a partial map.
    fn resolve(&self, ids: &BTreeSet<NodeId>) -> CanopyResult<HashMap<NodeId, Arc<Node>>>;

    fn get_node(&self, id: &str) -> CanopyResult<Arc<Node>>;

    fn contains(&self, id: &str) -> bool;

    /// Insert nodes. With `allow_update = false`, an existing id is a
    /// `DuplicateNode` error and nothing from the batch is inserted.
    fn add_nodes(&self, nodes: Vec<Node>, allow_update: bool) -> CanopyResult<usize>;

    fn delete_node(&self, id: &str) -> CanopyResult<()>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
