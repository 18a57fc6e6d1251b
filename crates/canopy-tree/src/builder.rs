//! TreeIndexBuilder: records topology and node content together, then
//! commits the nodes to the docstore in one batch.

use std::sync::Arc;

use tracing::info;

use canopy_core::errors::CanopyResult;
use canopy_core::models::{Node, NodeId};
use canopy_core::traits::IDocStore;

use crate::graph::IndexGraph;
use crate::index::TreeIndex;

pub struct TreeIndexBuilder {
    graph: IndexGraph,
    docstore: Arc<dyn IDocStore>,
    pending: Vec<Node>,
}

impl TreeIndexBuilder {
    pub fn new(docstore: Arc<dyn IDocStore>) -> Self {
        Self {
            graph: IndexGraph::new(),
            docstore,
            pending: Vec::new(),
        }
    }

    /// Add a node under `parent_id`, or as a root when `None`.
    pub fn add_node(&mut self, node: Node, parent_id: Option<&str>) -> CanopyResult<NodeId> {
        self.graph.insert(node.id(), parent_id)?;
        Ok(self.stage(node))
    }

    /// Add a summary node over existing roots.
    pub fn add_summary(&mut self, node: Node, child_ids: &[&str]) -> CanopyResult<NodeId> {
        self.graph.insert_summary(node.id(), child_ids)?;
        Ok(self.stage(node))
    }

    fn stage(&mut self, node: Node) -> NodeId {
        let id = node.id().to_string();
        self.pending.push(node);
        id
    }

    /// Write staged nodes to the docstore and return the index handle.
    /// Ids already present in the docstore are rejected.
    pub fn build(self) -> CanopyResult<TreeIndex> {
        self.graph.validate()?;
        let added = self.docstore.add_nodes(self.pending, false)?;
        info!(
            nodes = added,
            roots = self.graph.root_nodes().len(),
            "built tree index"
        );
        TreeIndex::new(self.graph, self.docstore)
    }
}
