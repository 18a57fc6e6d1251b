/// Node repository errors.
#[derive(Debug, thiserror::Error)]
pub enum DocStoreError {
    #[error("node(s) not found in docstore: {}", .ids.join(", "))]
    NodeNotFound { ids: Vec<String> },

    #[error("node {id} already exists in docstore")]
    DuplicateNode { id: String },
}
