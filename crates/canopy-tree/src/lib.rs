//! # canopy-tree
//!
//! Tree index metadata: which nodes exist in a tree, how they nest, and
//! which of them form the root answer set. Node content lives in a shared
//! docstore; this crate only tracks ids.
//!
//! Summarization (building an internal node's text from its children) is
//! the caller's business. [`TreeIndexBuilder`] only records the topology.

mod builder;
mod graph;
mod index;

pub use builder::TreeIndexBuilder;
pub use graph::IndexGraph;
pub use index::TreeIndex;
