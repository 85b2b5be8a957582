use crate::hash::Hash;

/// error type for nanovc operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("reference not found: {0}")]
    ReferenceNotFound(String),

    #[error("commit not found: {0}")]
    CommitNotFound(String),

    #[error("no commits reachable at that offset from {0}")]
    CommitsNotFound(String),

    #[error("object {0} is not a tree")]
    InvalidTree(Hash),

    #[error("object {0} is not a commit")]
    InvalidCommit(Hash),

    #[error("unexpected tree entry type byte: {0:#04x}")]
    UnexpectedTreeEntry(u8),

    #[error("committed area is frozen and cannot be modified")]
    ImmutableContentModified,

    #[error("encoding failure: {0}")]
    EncodingFailure(String),

    #[error("invalid hash hex: {0}")]
    InvalidHash(String),

    #[error("invalid object type tag: {0:#04x}")]
    InvalidObjectType(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
