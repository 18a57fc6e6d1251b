//! TreeAllLeafRetriever: returns every leaf, for bottom-up summarization.

use canopy_core::errors::CanopyResult;
use canopy_core::models::{NodeWithScore, OrderingPolicy, QueryBundle, ResponseMode};
use canopy_core::traits::{IDocStore, IRetriever};
use canopy_tree::{IndexGraph, TreeIndex};
use tracing::{debug, info};

use crate::compat::ensure_response_mode;
use crate::retrieval_span;
use crate::sorting::sorted_node_list;

pub struct TreeAllLeafRetriever<'a> {
    index_struct: &'a IndexGraph,
    docstore: &'a dyn IDocStore,
    ordering: OrderingPolicy,
}

impl<'a> TreeAllLeafRetriever<'a> {
    pub const NAME: &'static str = "TreeAllLeafRetriever";

    /// Raw leaf text has to be summarized up a tree to fit a prompt.
    pub const RESPONSE_MODE: ResponseMode = ResponseMode::TreeSummarize;

    pub fn new(index: &'a TreeIndex) -> Self {
        Self {
            index_struct: index.index_struct(),
            docstore: index.docstore(),
            ordering: OrderingPolicy::default(),
        }
    }

    pub fn from_args(index: &'a TreeIndex, response_mode: ResponseMode) -> CanopyResult<Self> {
        ensure_response_mode(Self::NAME, response_mode, Self::RESPONSE_MODE)?;
        Ok(Self::new(index))
    }

    pub fn with_ordering_policy(mut self, ordering: OrderingPolicy) -> Self {
        self.ordering = ordering;
        self
    }
}

impl IRetriever for TreeAllLeafRetriever<'_> {
    fn retrieve(&self, query: &QueryBundle) -> CanopyResult<Vec<NodeWithScore>> {
        let _span = retrieval_span!(Self::NAME).entered();
        info!(query = %query.query_str, "starting query");

        let leaves = self.docstore.resolve(&self.index_struct.leaf_nodes())?;
        let sorted = sorted_node_list(leaves, self.ordering)?;
        debug!(nodes = sorted.len(), "resolved leaf nodes");

        Ok(sorted.into_iter().map(NodeWithScore::unscored).collect())
    }
}
