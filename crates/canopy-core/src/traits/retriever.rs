use crate::errors::CanopyResult;
use crate::models::{NodeWithScore, QueryBundle};

/// A retrieval strategy: query in, ordered nodes out.
pub trait IRetriever {
    fn retrieve(&self, query: &QueryBundle) -> CanopyResult<Vec<NodeWithScore>>;
}
