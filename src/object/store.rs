use std::collections::HashMap;

use crate::hash::Hash;
use crate::object::repo_object::RepoObject;

/// hash-addressed object map with a two-level fan-out index mirroring git's
/// on-disk layout (first two hex chars -> remaining 38 -> object), kept purely
/// in memory here.
#[derive(Default)]
pub struct ObjectStore {
    objects: HashMap<Hash, RepoObject>,
    prefix_index: HashMap<String, HashMap<String, Hash>>,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// insert is idempotent: if `hash` is already present, the incoming
    /// object is dropped and the existing one is kept (first writer wins).
    pub fn put(&mut self, hash: Hash, object: RepoObject) {
        if self.objects.contains_key(&hash) {
            return;
        }
        let (prefix, suffix) = hash.to_path_components();
        self.prefix_index
            .entry(prefix)
            .or_default()
            .insert(suffix, hash);
        self.objects.insert(hash, object);
    }

    pub fn get(&self, hash: &Hash) -> Option<&RepoObject> {
        self.objects.get(hash)
    }

    pub fn contains(&self, hash: &Hash) -> bool {
        self.objects.contains_key(hash)
    }

    pub fn remove(&mut self, hash: &Hash) -> Option<RepoObject> {
        let removed = self.objects.remove(hash);
        if removed.is_some() {
            let (prefix, suffix) = hash.to_path_components();
            if let Some(bucket) = self.prefix_index.get_mut(&prefix) {
                bucket.remove(&suffix);
                if bucket.is_empty() {
                    self.prefix_index.remove(&prefix);
                }
            }
        }
        removed
    }

    pub fn clear(&mut self) {
        self.objects.clear();
        self.prefix_index.clear();
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// iterate hashes sharing a two-char prefix, for debug/inspection tooling
    pub fn hashes_with_prefix(&self, prefix: &str) -> impl Iterator<Item = &Hash> {
        self.prefix_index
            .get(prefix)
            .into_iter()
            .flat_map(|bucket| bucket.values())
    }
}
