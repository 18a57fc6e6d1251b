use crate::models::ResponseMode;

/// Configuration errors. Raised at setup time, before any query is issued.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{retriever} requires response mode '{required}', got '{requested}'")]
    IncompatibleResponseMode {
        retriever: &'static str,
        requested: ResponseMode,
        required: ResponseMode,
    },

    #[error("unknown response mode: {value}")]
    UnknownResponseMode { value: String },

    #[error("unknown retriever mode: {value}")]
    UnknownRetrieverMode { value: String },

    #[error("unknown ordering policy: {value}")]
    UnknownOrderingPolicy { value: String },

    #[error("invalid TOML configuration: {reason}")]
    InvalidToml { reason: String },
}
