use crate::error::Result;
use crate::hash::Hash;
use crate::object::codec::{write_string, write_u32, write_u8, Reader};
use crate::object::types::ObjectType;

/// a single entry in a tree: a typed, named reference to another object.
/// `object_type` is `None` when the encoded tag byte was unrecognized (`'?'`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeEntry {
    pub object_type: Option<ObjectType>,
    pub name: String,
    pub hash: Hash,
}

impl TreeEntry {
    pub fn new(object_type: ObjectType, name: impl Into<String>, hash: Hash) -> Self {
        Self {
            object_type: Some(object_type),
            name: name.into(),
            hash,
        }
    }
}

/// an ordered sequence of tree entries. insertion order is canonical; entries
/// are never sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tree {
    pub entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn push(&mut self, entry: TreeEntry) {
        self.entries.push(entry);
    }

    pub fn get(&self, name: &str) -> Option<&TreeEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut TreeEntry> {
        self.entries.iter_mut().find(|e| e.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `int32 entry_count` then, per entry: tag byte, `write_string name`,
    /// `write_string hash_value`
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        write_u32(&mut buf, self.entries.len() as u32);
        for entry in &self.entries {
            let tag = entry
                .object_type
                .map(|t| t.to_tag_byte())
                .unwrap_or(b'?');
            write_u8(&mut buf, tag);
            write_string(&mut buf, &entry.name);
            write_string(&mut buf, &entry.hash.to_hex());
        }
        buf
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut reader = Reader::new(data);
        let count = reader.read_u32()?;
        let mut entries = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let tag = reader.read_u8()?;
            let object_type = ObjectType::from_tag_byte(tag);
            let name = reader.read_string()?;
            let hash_value = reader.read_string()?;
            let hash = Hash::from_hex(&hash_value)?;
            entries.push(TreeEntry {
                object_type,
                name,
                hash,
            });
        }
        Ok(Self { entries })
    }
}
