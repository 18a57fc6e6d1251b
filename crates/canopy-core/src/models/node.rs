use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stable node identifier.
pub type NodeId = String;

/// Atomic unit of indexed content: leaf source text or an internal summary.
///
/// Tree links are not stored here; parent/child topology belongs to the
/// index structure that references the node. The structural ordering key
/// (`index`) is fixed at construction and only exposed read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    text: String,
    /// Position among siblings / in traversal order.
    index: usize,
    /// Source document this node was derived from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ref_doc_id: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    metadata: Map<String, Value>,
    /// blake3 hex digest of `text`.
    content_hash: String,
}

impl Node {
    /// Create a node with a fresh UUID v4 identifier.
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), text, index)
    }

    /// Create a node with a caller-supplied identifier.
    pub fn with_id(id: impl Into<NodeId>, text: impl Into<String>, index: usize) -> Self {
        let text = text.into();
        let content_hash = Self::compute_content_hash(&text);
        Self {
            id: id.into(),
            text,
            index,
            ref_doc_id: None,
            metadata: Map::new(),
            content_hash,
        }
    }

    pub fn with_ref_doc_id(mut self, ref_doc_id: impl Into<String>) -> Self {
        self.ref_doc_id = Some(ref_doc_id.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Structural ordering key.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn ref_doc_id(&self) -> Option<&str> {
        self.ref_doc_id.as_deref()
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    /// Compute the blake3 content hash for a piece of text.
    pub fn compute_content_hash(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    /// Whether the stored hash still matches the text (false after a
    /// deserialized node was tampered with).
    pub fn hash_matches(&self) -> bool {
        self.content_hash == Self::compute_content_hash(&self.text)
    }
}
