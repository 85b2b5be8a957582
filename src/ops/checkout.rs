//! restoring a commit's tree into all three content areas.

use crate::content::path;
use crate::error::{Error, Result};
use crate::hash::Hash;
use crate::object::{Commit, ObjectType};
use crate::ops::commit::rev_list_with_depth_limit;
use crate::refs::symbolic_ref;
use crate::repo::Repo;

/// mirrors `refs::resolve_commit` but keeps the hash (needed to drive
/// `rev_list`) instead of cloning the commit, and reports `CommitNotFound`
/// rather than `ReferenceNotFound` (checkout's own failure kind).
pub(crate) fn resolve_starting_hash(repo: &Repo, name_or_hash_or_head: &str) -> Result<Hash> {
    if name_or_hash_or_head == "HEAD" {
        let reference_name = repo
            .database
            .head
            .as_deref()
            .ok_or_else(|| Error::CommitNotFound("HEAD".to_string()))?;
        if reference_name == "HEAD" {
            return Err(Error::CommitNotFound("HEAD".to_string()));
        }
        return resolve_starting_hash(repo, reference_name);
    }

    if let Ok(hash) = Hash::from_hex(name_or_hash_or_head) {
        if repo.database.object_store.get(&hash).is_some_and(|o| o.as_commit().is_some()) {
            return Ok(hash);
        }
    }

    if let Some(hash) = repo.database.heads.get(name_or_hash_or_head) {
        if repo.database.object_store.get(hash).is_some_and(|o| o.as_commit().is_some()) {
            return Ok(*hash);
        }
    }

    Err(Error::CommitNotFound(name_or_hash_or_head.to_string()))
}

/// restore `name_or_hash_or_head`, walking `revision_offset` commits back
/// through parent links (`None` restores the resolved commit itself).
///
/// `depth_limit = -revision_offset`; a non-negative `depth_limit` (that is, a
/// non-negative `revision_offset`) visits nothing and fails with
/// `CommitsNotFound`. see DESIGN.md for why the zero-offset boundary is
/// drawn here rather than only at strictly positive offsets.
pub fn checkout(repo: &mut Repo, name_or_hash_or_head: &str, revision_offset: Option<i64>) -> Result<Commit> {
    let starting_hash = resolve_starting_hash(repo, name_or_hash_or_head)?;

    let offset = revision_offset.unwrap_or(-1);
    let depth_limit = -offset;
    if depth_limit <= 0 {
        return Err(Error::CommitsNotFound(name_or_hash_or_head.to_string()));
    }

    let history = rev_list_with_depth_limit(repo, starting_hash, Some(depth_limit as usize))?;
    let (_, commit) = history
        .into_iter()
        .last()
        .ok_or_else(|| Error::CommitsNotFound(name_or_hash_or_head.to_string()))?;

    repo.working.clear();
    repo.staging.clear();
    repo.committed.clear();

    walk_tree_into_areas(repo, commit.tree_hash, "/")?;

    repo.committed.freeze();

    if name_or_hash_or_head != "HEAD" {
        symbolic_ref(repo, name_or_hash_or_head);
    }

    Ok(commit)
}

fn walk_tree_into_areas(repo: &mut Repo, tree_hash: Hash, prefix: &str) -> Result<()> {
    let object = repo
        .database
        .object_store
        .get(&tree_hash)
        .cloned()
        .ok_or(Error::InvalidTree(tree_hash))?;
    let tree = object.into_tree(tree_hash)?;

    for entry in tree.entries {
        match entry.object_type {
            Some(ObjectType::Blob) => {
                let object = repo
                    .database
                    .object_store
                    .get(&entry.hash)
                    .cloned()
                    .ok_or(Error::InvalidTree(entry.hash))?;
                let blob = object.as_blob().ok_or(Error::InvalidTree(entry.hash))?.clone();
                let abs_path = path::resolve(prefix, &entry.name);
                repo.committed.put_content(&abs_path, blob.bytes.clone())?;
                repo.staging.put_content(&abs_path, blob.bytes.clone());
                repo.working.put_content(&abs_path, blob.bytes);
            }
            Some(ObjectType::Tree) => {
                let new_prefix = path::resolve(prefix, &entry.name);
                walk_tree_into_areas(repo, entry.hash, &new_prefix)?;
            }
            Some(ObjectType::Commit) | None => {
                return Err(Error::UnexpectedTreeEntry(
                    entry.object_type.map(|t| t.to_tag_byte()).unwrap_or(b'?'),
                ));
            }
        }
    }
    Ok(())
}

/// copy a single committed-area entry back into the working area (deep copy)
pub fn checkout_path(repo: &mut Repo, path: &str) -> Option<()> {
    let bytes = repo.committed.get_content(path)?;
    repo.working.put_content(path, bytes);
    Some(())
}

/// same as `checkout_path`, for every committed-area entry whose path
/// satisfies `predicate`
pub fn checkout_pattern(repo: &mut Repo, predicate: impl Fn(&str) -> bool) {
    let matches: Vec<_> = repo
        .committed
        .snapshot_as_list()
        .into_iter()
        .filter(|(path, _)| predicate(path))
        .collect();
    for (path, bytes) in matches {
        repo.working.put_content(&path, bytes);
    }
}
