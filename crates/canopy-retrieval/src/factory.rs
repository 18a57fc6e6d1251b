//! Retriever selection. Every strategy checks the response mode in its own
//! `from_args`, so an incompatible pairing never yields a retriever.

use canopy_core::config::RetrievalConfig;
use canopy_core::errors::CanopyResult;
use canopy_core::models::{OrderingPolicy, ResponseMode, TreeRetrieverMode};
use canopy_core::traits::IRetriever;
use canopy_tree::TreeIndex;
use tracing::debug;

use crate::all_leaf::TreeAllLeafRetriever;
use crate::root::TreeRootRetriever;

/// Build a retriever for `mode` with the default (strict) ordering policy.
pub fn build_retriever<'a>(
    index: &'a TreeIndex,
    mode: TreeRetrieverMode,
    response_mode: ResponseMode,
) -> CanopyResult<Box<dyn IRetriever + 'a>> {
    build(index, mode, response_mode, OrderingPolicy::default())
}

/// Build the retriever described by a `[retrieval]` config section.
pub fn build_from_config<'a>(
    index: &'a TreeIndex,
    config: &RetrievalConfig,
) -> CanopyResult<Box<dyn IRetriever + 'a>> {
    build(
        index,
        config.retriever_mode,
        config.response_mode,
        config.ordering_policy,
    )
}

fn build<'a>(
    index: &'a TreeIndex,
    mode: TreeRetrieverMode,
    response_mode: ResponseMode,
    ordering: OrderingPolicy,
) -> CanopyResult<Box<dyn IRetriever + 'a>> {
    debug!(%mode, %response_mode, ?ordering, "building retriever");
    let retriever: Box<dyn IRetriever + 'a> = match mode {
        TreeRetrieverMode::RootNodes => Box::new(
            TreeRootRetriever::from_args(index, response_mode)?.with_ordering_policy(ordering),
        ),
        TreeRetrieverMode::AllLeaf => Box::new(
            TreeAllLeafRetriever::from_args(index, response_mode)?.with_ordering_policy(ordering),
        ),
    };
    Ok(retriever)
}
