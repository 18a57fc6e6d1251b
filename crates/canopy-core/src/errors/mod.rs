mod config_error;
mod docstore_error;
mod index_error;
mod retrieval_error;

pub use config_error::ConfigError;
pub use docstore_error::DocStoreError;
pub use index_error::IndexError;
pub use retrieval_error::RetrievalError;

/// Result alias used across the workspace.
pub type CanopyResult<T> = Result<T, CanopyError>;

/// Top-level error. Each subsystem error converts into it via `?`.
#[derive(Debug, thiserror::Error)]
pub enum CanopyError {
    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("docstore error: {0}")]
    DocStoreError(#[from] DocStoreError),

    #[error("index error: {0}")]
    IndexError(#[from] IndexError),

    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),
}

impl CanopyError {
    /// Ids of missing nodes, if this is a not-found error.
    pub fn missing_node_ids(&self) -> Option<&[String]> {
        match self {
            CanopyError::DocStoreError(DocStoreError::NodeNotFound { ids }) => Some(ids),
            _ => None,
        }
    }
}
