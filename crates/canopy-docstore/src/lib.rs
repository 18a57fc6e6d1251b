//! # canopy-docstore
//!
//! The node repository. Owns canonical `Node` instances by id and hands out
//! shared `Arc<Node>` references; any number of tree indices may point at
//! the same store.

mod memory_store;

pub use memory_store::InMemoryDocStore;
