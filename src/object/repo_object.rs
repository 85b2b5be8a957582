use crate::error::{Error, Result};
use crate::hash::Hash;
use crate::object::blob::Blob;
use crate::object::commit::Commit;
use crate::object::tree::Tree;
use crate::object::types::ObjectType;

/// the three kinds of object the store can hold
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RepoObject {
    Blob(Blob),
    Tree(Tree),
    Commit(Commit),
}

impl RepoObject {
    pub fn object_type(&self) -> ObjectType {
        match self {
            RepoObject::Blob(_) => ObjectType::Blob,
            RepoObject::Tree(_) => ObjectType::Tree,
            RepoObject::Commit(_) => ObjectType::Commit,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            RepoObject::Blob(blob) => blob.encode(),
            RepoObject::Tree(tree) => tree.encode(),
            RepoObject::Commit(commit) => commit.encode(),
        }
    }

    pub fn decode(object_type: ObjectType, bytes: &[u8]) -> Result<Self> {
        Ok(match object_type {
            ObjectType::Blob => RepoObject::Blob(Blob::decode(bytes)?),
            ObjectType::Tree => RepoObject::Tree(Tree::decode(bytes)?),
            ObjectType::Commit => RepoObject::Commit(Commit::decode(bytes)?),
        })
    }

    pub fn as_blob(&self) -> Option<&Blob> {
        match self {
            RepoObject::Blob(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            RepoObject::Tree(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_commit(&self) -> Option<&Commit> {
        match self {
            RepoObject::Commit(c) => Some(c),
            _ => None,
        }
    }

    /// consume into a `Tree`, reporting `hash` (the object's own address) on mismatch
    pub fn into_tree(self, hash: Hash) -> Result<Tree> {
        match self {
            RepoObject::Tree(t) => Ok(t),
            _ => Err(Error::InvalidTree(hash)),
        }
    }

    /// consume into a `Commit`, reporting `hash` (the object's own address) on mismatch
    pub fn into_commit(self, hash: Hash) -> Result<Commit> {
        match self {
            RepoObject::Commit(c) => Ok(c),
            _ => Err(Error::InvalidCommit(hash)),
        }
    }
}
