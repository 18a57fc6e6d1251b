/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("ordering key {index} shared by nodes {first} and {second}")]
    OrderingContractViolation {
        index: usize,
        first: String,
        second: String,
    },
}
