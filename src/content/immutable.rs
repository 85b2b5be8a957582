use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{Error, Result};

/// backing data for an immutable content entry; never mutated after construction
#[derive(Debug)]
pub struct ImmutableContentData {
    pub path: String,
    pub bytes: Vec<u8>,
}

pub type ImmutableContent = Rc<ImmutableContentData>;

/// the committed area: a path-indexed map of immutable content with a
/// one-way `freeze` transition. while frozen, `put_content`/`remove_content`
/// fail with `ImmutableContentModified`; `clear` unfreezes and empties in
/// one step.
#[derive(Default)]
pub struct CommittedArea {
    items: HashMap<String, ImmutableContent>,
    frozen: bool,
}

impl CommittedArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_content(&mut self, path: &str, bytes: Vec<u8>) -> Result<ImmutableContent> {
        if self.frozen {
            return Err(Error::ImmutableContentModified);
        }
        let handle = Rc::new(ImmutableContentData {
            path: path.to_string(),
            bytes,
        });
        self.items.insert(path.to_string(), handle.clone());
        Ok(handle)
    }

    pub fn get_content(&self, path: &str) -> Option<Vec<u8>> {
        self.items.get(path).map(|c| c.bytes.clone())
    }

    pub fn get_handle(&self, path: &str) -> Option<ImmutableContent> {
        self.items.get(path).cloned()
    }

    pub fn remove_content(&mut self, path: &str) -> Result<Option<ImmutableContent>> {
        if self.frozen {
            return Err(Error::ImmutableContentModified);
        }
        Ok(self.items.remove(path))
    }

    pub fn has_content(&self, path: &str) -> bool {
        self.items.contains_key(path)
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// unfreezes and empties in one step
    pub fn clear(&mut self) {
        self.items.clear();
        self.frozen = false;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn snapshot_as_map(&self) -> HashMap<String, Vec<u8>> {
        self.items
            .iter()
            .map(|(path, c)| (path.clone(), c.bytes.clone()))
            .collect()
    }

    pub fn snapshot_as_list(&self) -> Vec<(String, Vec<u8>)> {
        self.items
            .iter()
            .map(|(path, c)| (path.clone(), c.bytes.clone()))
            .collect()
    }
}
