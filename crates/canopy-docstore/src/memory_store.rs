//! InMemoryDocStore: concurrent node repository via DashMap.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use dashmap::DashMap;
use tracing::debug;

use canopy_core::errors::{CanopyResult, DocStoreError};
use canopy_core::models::{Node, NodeId};
use canopy_core::traits::IDocStore;

/// Thread-safe docstore. Reads never block each other; writes are
/// serialized so a duplicate check and its insert cannot interleave with
/// another writer.
#[derive(Debug, Default)]
pub struct InMemoryDocStore {
    nodes: DashMap<NodeId, Arc<Node>>,
    write_lock: Mutex<()>,
}

impl InMemoryDocStore {
    pub fn new() -> Self {
        Self {
            nodes: DashMap::new(),
            write_lock: Mutex::new(()),
        }
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        // Guards no data; a poisoned lock is still usable.
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Build a store from nodes, rejecting duplicate ids.
    pub fn from_nodes(nodes: Vec<Node>) -> CanopyResult<Self> {
        let store = Self::new();
        store.add_nodes(nodes, false)?;
        Ok(store)
    }

    /// Snapshot of all stored ids, sorted.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes.iter().map(|r| r.key().clone()).collect();
        ids.sort_unstable();
        ids
    }
}

impl IDocStore for InMemoryDocStore {
    fn resolve(&self, ids: &BTreeSet<NodeId>) -> CanopyResult<HashMap<NodeId, Arc<Node>>> {
        let mut resolved = HashMap::with_capacity(ids.len());
        let mut missing = Vec::new();

        // BTreeSet iteration keeps `missing` sorted.
        for id in ids {
            match self.nodes.get(id) {
                Some(node) => {
                    resolved.insert(id.clone(), Arc::clone(node.value()));
                }
                None => missing.push(id.clone()),
            }
        }

        if !missing.is_empty() {
            return Err(DocStoreError::NodeNotFound { ids: missing }.into());
        }
        Ok(resolved)
    }

    fn get_node(&self, id: &str) -> CanopyResult<Arc<Node>> {
        self.nodes
            .get(id)
            .map(|r| Arc::clone(r.value()))
            .ok_or_else(|| {
                DocStoreError::NodeNotFound {
                    ids: vec![id.to_string()],
                }
                .into()
            })
    }

    fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    fn add_nodes(&self, nodes: Vec<Node>, allow_update: bool) -> CanopyResult<usize> {
        let _guard = self.lock_writes();
        if !allow_update {
            let mut batch = BTreeSet::new();
            for node in &nodes {
                if self.nodes.contains_key(node.id()) || !batch.insert(node.id()) {
                    return Err(DocStoreError::DuplicateNode {
                        id: node.id().to_string(),
                    }
                    .into());
                }
            }
        }

        let count = nodes.len();
        for node in nodes {
            self.nodes.insert(node.id().to_string(), Arc::new(node));
        }
        debug!(count, total = self.nodes.len(), "added nodes to docstore");
        Ok(count)
    }

    fn delete_node(&self, id: &str) -> CanopyResult<()> {
        let _guard = self.lock_writes();
        self.nodes.remove(id).map(|_| ()).ok_or_else(|| {
            DocStoreError::NodeNotFound {
                ids: vec![id.to_string()],
            }
            .into()
        })
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}
