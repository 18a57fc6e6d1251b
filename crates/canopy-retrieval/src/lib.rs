//! # canopy-retrieval
//!
//! Structural retrieval over a built tree index. The answer set is fixed by
//! index construction; the query text is logged, never used to select or
//! rank.
//!
//! - [`TreeRootRetriever`]: the root answer nodes, for `simple_summarize`.
//! - [`TreeAllLeafRetriever`]: every leaf, for `tree_summarize`.
//! - [`factory`]: pick a retriever by mode and check it against the
//!   downstream response mode before construction.

pub mod all_leaf;
mod compat;
pub mod factory;
pub mod observability;
pub mod root;
pub mod sorting;

pub use all_leaf::TreeAllLeafRetriever;
pub use factory::{build_from_config, build_retriever};
pub use root::TreeRootRetriever;
pub use sorting::sorted_node_list;
