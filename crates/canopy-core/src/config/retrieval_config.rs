use serde::{Deserialize, Serialize};

use crate::models::{OrderingPolicy, ResponseMode, TreeRetrieverMode};

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Which structural retriever to build. Default: root_nodes.
    pub retriever_mode: TreeRetrieverMode,
    /// Downstream synthesis mode. Must match the retriever. Default: simple_summarize.
    pub response_mode: ResponseMode,
    /// Handling of colliding ordering keys. Default: strict.
    pub ordering_policy: OrderingPolicy,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            retriever_mode: TreeRetrieverMode::RootNodes,
            response_mode: ResponseMode::SimpleSummarize,
            ordering_policy: OrderingPolicy::Strict,
        }
    }
}

impl RetrievalConfig {
    pub fn new(retriever_mode: TreeRetrieverMode, response_mode: ResponseMode) -> Self {
        Self {
            retriever_mode,
            response_mode,
            ordering_policy: OrderingPolicy::default(),
        }
    }
}
