/// Tree index structure errors.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("node {id} is not part of the index")]
    UnknownNode { id: String },

    #[error("node {id} is already part of the index")]
    DuplicateNode { id: String },

    #[error("node {id} already has a parent")]
    AlreadyHasParent { id: String },

    #[error("index has no root nodes")]
    EmptyRoots,
}
