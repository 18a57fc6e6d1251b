//! IndexGraph: root set + parent/child topology, keyed by node id.

use std::collections::{BTreeMap, BTreeSet};

use canopy_core::errors::{CanopyResult, IndexError};
use canopy_core::models::NodeId;

/// Tree index structure. Read-only once the index is built.
///
/// Ordered collections throughout, so every iteration over the graph is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexGraph {
    all_nodes: BTreeSet<NodeId>,
    root_nodes: BTreeSet<NodeId>,
    children: BTreeMap<NodeId, BTreeSet<NodeId>>,
    parents: BTreeMap<NodeId, NodeId>,
}

impl IndexGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node top-down. Without a parent it joins the root set.
    pub fn insert(&mut self, id: &str, parent_id: Option<&str>) -> CanopyResult<()> {
        self.ensure_new(id)?;
        match parent_id {
            None => {
                self.root_nodes.insert(id.to_string());
            }
            Some(parent) => {
                if !self.all_nodes.contains(parent) {
                    return Err(IndexError::UnknownNode {
                        id: parent.to_string(),
                    }
                    .into());
                }
                self.children
                    .entry(parent.to_string())
                    .or_default()
                    .insert(id.to_string());
                self.parents.insert(id.to_string(), parent.to_string());
            }
        }
        self.all_nodes.insert(id.to_string());
        Ok(())
    }

    /// Insert a summary node bottom-up over existing roots. The children
    /// leave the root set and the summary takes their place.
    pub fn insert_summary(&mut self, id: &str, child_ids: &[&str]) -> CanopyResult<()> {
        self.ensure_new(id)?;
        for child in child_ids {
            if !self.all_nodes.contains(*child) {
                return Err(IndexError::UnknownNode {
                    id: child.to_string(),
                }
                .into());
            }
            if self.parents.contains_key(*child) {
                return Err(IndexError::AlreadyHasParent {
                    id: child.to_string(),
                }
                .into());
            }
        }

        let kids = self.children.entry(id.to_string()).or_default();
        for child in child_ids {
            kids.insert(child.to_string());
            self.root_nodes.remove(*child);
            self.parents.insert(child.to_string(), id.to_string());
        }
        self.all_nodes.insert(id.to_string());
        self.root_nodes.insert(id.to_string());
        Ok(())
    }

    fn ensure_new(&self, id: &str) -> CanopyResult<()> {
        if self.all_nodes.contains(id) {
            return Err(IndexError::DuplicateNode { id: id.to_string() }.into());
        }
        Ok(())
    }

    /// The root answer set.
    pub fn root_nodes(&self) -> &BTreeSet<NodeId> {
        &self.root_nodes
    }

    pub fn all_nodes(&self) -> &BTreeSet<NodeId> {
        &self.all_nodes
    }

    pub fn contains(&self, id: &str) -> bool {
        self.all_nodes.contains(id)
    }

    /// Children of `id`, empty for leaves and unknown ids.
    pub fn get_children(&self, id: &str) -> BTreeSet<NodeId> {
        self.children.get(id).cloned().unwrap_or_default()
    }

    pub fn get_parent(&self, id: &str) -> Option<&str> {
        self.parents.get(id).map(String::as_str)
    }

    pub fn is_leaf(&self, id: &str) -> bool {
        self.all_nodes.contains(id) && self.children.get(id).map_or(true, BTreeSet::is_empty)
    }

    /// Every node without children.
    pub fn leaf_nodes(&self) -> BTreeSet<NodeId> {
        self.all_nodes
            .iter()
            .filter(|id| self.is_leaf(id))
            .cloned()
            .collect()
    }

    /// Number of edges from `id` up to its root. `None` for unknown ids.
    pub fn depth(&self, id: &str) -> Option<usize> {
        if !self.all_nodes.contains(id) {
            return None;
        }
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.parents.get(current) {
            depth += 1;
            current = parent.as_str();
        }
        Some(depth)
    }

    pub fn size(&self) -> usize {
        self.all_nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_nodes.is_empty()
    }

    /// A retrievable graph needs at least one root.
    pub fn validate(&self) -> CanopyResult<()> {
        if self.root_nodes.is_empty() {
            return Err(IndexError::EmptyRoots.into());
        }
        Ok(())
    }
}
