mod docstore;
mod retriever;

pub use docstore::IDocStore;
pub use retriever::IRetriever;
