use std::sync::Arc;

use super::node::Node;

/// A node paired with a relevance score, handed to response synthesis.
///
/// `score` is `None` when the retriever computed no relevance at all
/// (structural retrievers). `None` is distinct from `Some(0.0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeWithScore {
    /// Shared with the docstore, not copied.
    pub node: Arc<Node>,
    pub score: Option<f64>,
}

impl NodeWithScore {
    /// Wrap a node without a score.
    pub fn unscored(node: Arc<Node>) -> Self {
        Self { node, score: None }
    }

    pub fn scored(node: Arc<Node>, score: f64) -> Self {
        Self {
            node,
            score: Some(score),
        }
    }

    pub fn is_scored(&self) -> bool {
        self.score.is_some()
    }

    pub fn id(&self) -> &str {
        self.node.id()
    }

    pub fn text(&self) -> &str {
        self.node.text()
    }
}
