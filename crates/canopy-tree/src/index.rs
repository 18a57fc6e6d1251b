//! TreeIndex: the index handle retrievers borrow from.

use std::sync::Arc;

use canopy_core::errors::CanopyResult;
use canopy_core::traits::IDocStore;

use crate::graph::IndexGraph;

/// A built tree index: its structure plus the docstore holding node content.
///
/// The docstore is shared; several indices may point at the same one.
pub struct TreeIndex {
    index_struct: IndexGraph,
    docstore: Arc<dyn IDocStore>,
}

impl TreeIndex {
    /// Bind a graph to a docstore. The graph must have at least one root.
    pub fn new(index_struct: IndexGraph, docstore: Arc<dyn IDocStore>) -> CanopyResult<Self> {
        index_struct.validate()?;
        Ok(Self {
            index_struct,
            docstore,
        })
    }

    pub fn index_struct(&self) -> &IndexGraph {
        &self.index_struct
    }

    pub fn docstore(&self) -> &dyn IDocStore {
        self.docstore.as_ref()
    }

    /// Another handle to the shared docstore, for building sibling indices.
    pub fn shared_docstore(&self) -> Arc<dyn IDocStore> {
        Arc::clone(&self.docstore)
    }

    /// Confirm every node in the graph resolves in the docstore.
    pub fn check_integrity(&self) -> CanopyResult<()> {
        self.docstore.resolve(self.index_struct.all_nodes())?;
        Ok(())
    }
}

impl std::fmt::Debug for TreeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeIndex")
            .field("index_struct", &self.index_struct)
            .field("docstore_len", &self.docstore.len())
            .finish()
    }
}
