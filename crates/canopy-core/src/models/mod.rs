mod node;
mod node_with_score;
mod query_bundle;
mod response_mode;
mod retriever_mode;

pub use node::{Node, NodeId};
pub use node_with_score::NodeWithScore;
pub use query_bundle::QueryBundle;
pub use response_mode::ResponseMode;
pub use retriever_mode::{OrderingPolicy, TreeRetrieverMode};
