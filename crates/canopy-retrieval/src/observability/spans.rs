//! Span definitions for retrieval calls.

/// Create a retrieval span tagged with the retriever's name.
#[macro_export]
macro_rules! retrieval_span {
    ($retriever:expr) => {
        tracing::info_span!("canopy.retrieval", retriever = %$retriever)
    };
}
