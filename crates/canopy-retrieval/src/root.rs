//! TreeRootRetriever: returns the index's root answer nodes as-is.
//!
//! The tree was built with the answer already at its roots, so there is
//! nothing to traverse or score. Output is every root, in structural order.

use canopy_core::errors::CanopyResult;
use canopy_core::models::{NodeWithScore, OrderingPolicy, QueryBundle, ResponseMode};
use canopy_core::traits::{IDocStore, IRetriever};
use canopy_tree::{IndexGraph, TreeIndex};
use tracing::{debug, info};

use crate::compat::ensure_response_mode;
use crate::retrieval_span;
use crate::sorting::sorted_node_list;

pub struct TreeRootRetriever<'a> {
    index_struct: &'a IndexGraph,
    docstore: &'a dyn IDocStore,
    ordering: OrderingPolicy,
}

impl<'a> TreeRootRetriever<'a> {
    pub const NAME: &'static str = "TreeRootRetriever";

    /// The only response mode this retriever can feed: its nodes are already
    /// the answer, so they are concatenated and summarized once.
    pub const RESPONSE_MODE: ResponseMode = ResponseMode::SimpleSummarize;

    pub fn new(index: &'a TreeIndex) -> Self {
        Self {
            index_struct: index.index_struct(),
            docstore: index.docstore(),
            ordering: OrderingPolicy::default(),
        }
    }

    /// Construct after checking the downstream response mode.
    pub fn from_args(index: &'a TreeIndex, response_mode: ResponseMode) -> CanopyResult<Self> {
        ensure_response_mode(Self::NAME, response_mode, Self::RESPONSE_MODE)?;
        Ok(Self::new(index))
    }

    pub fn with_ordering_policy(mut self, ordering: OrderingPolicy) -> Self {
        self.ordering = ordering;
        self
    }
}

impl IRetriever for TreeRootRetriever<'_> {
    fn retrieve(&self, query: &QueryBundle) -> CanopyResult<Vec<NodeWithScore>> {
        let _span = retrieval_span!(Self::NAME).entered();
        info!(query = %query.query_str, "starting query");

        let root_nodes = self.docstore.resolve(self.index_struct.root_nodes())?;
        let sorted = sorted_node_list(root_nodes, self.ordering)?;
        debug!(nodes = sorted.len(), "resolved root nodes");

        Ok(sorted.into_iter().map(NodeWithScore::unscored).collect())
    }
}
