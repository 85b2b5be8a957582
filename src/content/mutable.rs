use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// backing data for a mutable content entry
#[derive(Debug)]
pub struct MutableContentData {
    pub path: String,
    pub bytes: Vec<u8>,
}

/// a shared, aliasable handle to mutable content. callers that hold a clone
/// of this handle observe later `put_content` calls at the same path in
/// place.
pub type MutableContent = Rc<RefCell<MutableContentData>>;

/// working/staging area: a mutable list of mutable content, looked up by a
/// linear scan over `path`. the list shape, not a map, is load-bearing:
/// iteration order during `write_tree`/`add_all` is insertion order.
#[derive(Default)]
pub struct MutableArea {
    items: Vec<MutableContent>,
}

impl MutableArea {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, path: &str) -> Option<&MutableContent> {
        self.items.iter().find(|c| c.borrow().path == path)
    }

    /// mutates the existing handle's bytes in place if `path` is already
    /// present; otherwise appends a new entry. returns the (possibly shared)
    /// handle either way.
    pub fn put_content(&mut self, path: &str, bytes: Vec<u8>) -> MutableContent {
        if let Some(existing) = self.find(path) {
            existing.borrow_mut().bytes = bytes;
            existing.clone()
        } else {
            let handle = Rc::new(RefCell::new(MutableContentData {
                path: path.to_string(),
                bytes,
            }));
            self.items.push(handle.clone());
            handle
        }
    }

    pub fn get_content(&self, path: &str) -> Option<Vec<u8>> {
        self.find(path).map(|c| c.borrow().bytes.clone())
    }

    pub fn get_handle(&self, path: &str) -> Option<MutableContent> {
        self.find(path).cloned()
    }

    /// insert an existing handle directly, aliasing it rather than copying
    /// bytes. replaces any entry already at `handle`'s path so the area ends
    /// up sharing the same `Rc` as whoever handed us the handle.
    pub fn put_handle(&mut self, handle: MutableContent) -> MutableContent {
        let path = handle.borrow().path.clone();
        if let Some(slot) = self.items.iter_mut().find(|c| c.borrow().path == path) {
            *slot = handle.clone();
        } else {
            self.items.push(handle.clone());
        }
        handle
    }

    pub fn remove_content(&mut self, path: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|c| c.borrow().path != path);
        self.items.len() != before
    }

    pub fn has_content(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// iterate in insertion order, the order `write_tree`/`add_all` rely on
    pub fn iter(&self) -> impl Iterator<Item = &MutableContent> {
        self.items.iter()
    }

    pub fn snapshot_as_list(&self) -> Vec<(String, Vec<u8>)> {
        self.items
            .iter()
            .map(|c| {
                let c = c.borrow();
                (c.path.clone(), c.bytes.clone())
            })
            .collect()
    }

    pub fn snapshot_as_map(&self) -> HashMap<String, Vec<u8>> {
        self.snapshot_as_list().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_new_path_appends() {
        let mut area = MutableArea::new();
        area.put_content("/a.txt", b"one".to_vec());
        area.put_content("/b.txt", b"two".to_vec());
        assert_eq!(area.len(), 2);
    }

    #[test]
    fn test_put_existing_path_mutates_in_place() {
        let mut area = MutableArea::new();
        let handle = area.put_content("/a.txt", b"one".to_vec());
        area.put_content("/a.txt", b"two".to_vec());

        assert_eq!(area.len(), 1);
        // the earlier handle observes the new bytes
        assert_eq!(handle.borrow().bytes, b"two".to_vec());
    }

    #[test]
    fn test_remove_content() {
        let mut area = MutableArea::new();
        area.put_content("/a.txt", b"one".to_vec());
        assert!(area.remove_content("/a.txt"));
        assert!(!area.has_content("/a.txt"));
        assert!(!area.remove_content("/a.txt"));
    }

    #[test]
    fn test_snapshot_as_list_preserves_order() {
        let mut area = MutableArea::new();
        area.put_content("/z.txt", b"z".to_vec());
        area.put_content("/a.txt", b"a".to_vec());
        let list = area.snapshot_as_list();
        assert_eq!(list[0].0, "/z.txt");
        assert_eq!(list[1].0, "/a.txt");
    }

    #[test]
    fn test_clear_empties_area() {
        let mut area = MutableArea::new();
        area.put_content("/a.txt", b"one".to_vec());
        area.clear();
        assert!(area.is_empty());
    }

    #[test]
    fn test_put_handle_aliases_rather_than_copies() {
        let mut working = MutableArea::new();
        let handle = working.put_content("/a.txt", b"one".to_vec());

        let mut staging = MutableArea::new();
        staging.put_handle(handle.clone());

        handle.borrow_mut().bytes = b"two".to_vec();
        assert_eq!(staging.get_content("/a.txt"), Some(b"two".to_vec()));
    }
}
