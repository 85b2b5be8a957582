use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// the three kinds of repo object, each with a stable ASCII tag used in hashing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    Blob,
    Commit,
    Tree,
}

impl ObjectType {
    /// ASCII tag used as the first component of the hashing preimage
    pub fn tag(&self) -> &'static str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Commit => "commit",
            ObjectType::Tree => "tree",
        }
    }

    /// single-byte tag used in tree entry framing
    pub fn to_tag_byte(self) -> u8 {
        match self {
            ObjectType::Blob => b'b',
            ObjectType::Commit => b'c',
            ObjectType::Tree => b't',
        }
    }

    /// decode a tree entry tag byte; `'?'` and any other unrecognized byte
    /// yields `None` rather than an error
    pub fn from_tag_byte(byte: u8) -> Option<Self> {
        match byte {
            b'b' => Some(ObjectType::Blob),
            b'c' => Some(ObjectType::Commit),
            b't' => Some(ObjectType::Tree),
            _ => None,
        }
    }
}

/// decode a cat-file style object-type tag byte where every byte must map to
/// a known type; used when a tree/commit hash is expected to resolve to one
/// of the three kinds rather than an optional tree-entry tag.
pub fn require_tag_byte(byte: u8) -> Result<ObjectType> {
    ObjectType::from_tag_byte(byte).ok_or(Error::InvalidObjectType(byte))
}
