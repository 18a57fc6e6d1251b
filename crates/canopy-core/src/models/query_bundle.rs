use serde::{Deserialize, Serialize};

/// A retrieval request.
///
/// Structural retrievers only read `query_str` for diagnostics. The auxiliary
/// fields are carried for retrievers that embed the query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryBundle {
    pub query_str: String,
    /// Strings to embed instead of `query_str`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_embedding_strs: Option<Vec<String>>,
    /// Precomputed query embedding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl QueryBundle {
    pub fn new(query_str: impl Into<String>) -> Self {
        Self {
            query_str: query_str.into(),
            ..Default::default()
        }
    }

    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    pub fn with_custom_embedding_strs(mut self, strs: Vec<String>) -> Self {
        self.custom_embedding_strs = Some(strs);
        self
    }

    /// Strings an embedding retriever should embed: the custom list if set,
    /// otherwise the query itself.
    pub fn embedding_strs(&self) -> Vec<String> {
        match &self.custom_embedding_strs {
            Some(strs) => strs.clone(),
            None => vec![self.query_str.clone()],
        }
    }
}

impl From<&str> for QueryBundle {
    fn from(query_str: &str) -> Self {
        Self::new(query_str)
    }
}

impl From<String> for QueryBundle {
    fn from(query_str: String) -> Self {
        Self::new(query_str)
    }
}
