//! # canopy-core
//!
//! Foundation crate for the canopy tree index.
//! Defines nodes, query/response envelopes, errors, config, and the
//! docstore/retriever traits. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CanopyConfig;
pub use errors::{CanopyError, CanopyResult};
pub use models::{Node, NodeId, NodeWithScore, QueryBundle, ResponseMode};
