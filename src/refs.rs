//! named refs (heads, tags) and the symbolic HEAD pointer.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::hash::Hash;
use crate::object::Commit;
use crate::repo::Repo;

/// create `name` in `collection` if absent, or overwrite its hash if present
pub fn update_ref(collection: &mut HashMap<String, Hash>, name: &str, hash: Hash) {
    collection.insert(name.to_string(), hash);
}

pub fn update_ref_in_heads(repo: &mut Repo, name: &str, hash: Hash) {
    update_ref(&mut repo.database.heads, name, hash);
}

pub fn update_ref_in_tags(repo: &mut Repo, name: &str, hash: Hash) {
    update_ref(&mut repo.database.tags, name, hash);
}

/// point HEAD at `name`; HEAD is created on first call
pub fn symbolic_ref(repo: &mut Repo, name: &str) {
    repo.database.head = Some(name.to_string());
}

/// return the head ref for `name`; `"HEAD"` dereferences once through
/// `HEAD.reference_name`. if HEAD's reference name is literally `"HEAD"`,
/// returns `None` (cycle guard).
pub fn resolve_reference(repo: &Repo, name_or_head: &str) -> Option<Hash> {
    if name_or_head == "HEAD" {
        let reference_name = repo.database.head.as_deref()?;
        if reference_name == "HEAD" {
            return None;
        }
        return repo.database.heads.get(reference_name).copied();
    }
    repo.database.heads.get(name_or_head).copied()
}

/// resolve a name, hash, or `"HEAD"` to the `Commit` it names.
///
/// order: `"HEAD"` dereferences through `database.head` and recurses; a
/// string that parses as a hash resolving to a `Commit` in the store wins
/// next; otherwise the name is looked up in `heads` and its hash dereferenced;
/// failing all of that, `ReferenceNotFound`.
pub fn resolve_commit(repo: &Repo, name_or_hash_or_head: &str) -> Result<Commit> {
    if name_or_hash_or_head == "HEAD" {
        let reference_name = repo
            .database
            .head
            .as_deref()
            .ok_or_else(|| Error::ReferenceNotFound("HEAD".to_string()))?;
        if reference_name == "HEAD" {
            return Err(Error::ReferenceNotFound("HEAD".to_string()));
        }
        return resolve_commit(repo, reference_name);
    }

    if let Ok(hash) = Hash::from_hex(name_or_hash_or_head) {
        if let Some(object) = repo.database.object_store.get(&hash) {
            if let Some(commit) = object.as_commit() {
                return Ok(commit.clone());
            }
        }
    }

    if let Some(hash) = repo.database.heads.get(name_or_hash_or_head) {
        if let Some(object) = repo.database.object_store.get(hash) {
            if let Some(commit) = object.as_commit() {
                return Ok(commit.clone());
            }
        }
    }

    Err(Error::ReferenceNotFound(name_or_hash_or_head.to_string()))
}
