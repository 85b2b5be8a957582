//! commit construction, history traversal, and commit composition.

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset, Utc};

use crate::error::{Error, Result};
use crate::hash::Hash;
use crate::object::{Commit, RepoObject};
use crate::ops::plumbing::hash_object_write;
use crate::ops::tree::write_tree;
use crate::refs::{resolve_reference, update_ref_in_heads};
use crate::repo::Repo;

/// a projection of a `Commit` plus its own hash, as returned by `log*`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub hash: Hash,
    pub author: String,
    pub author_timestamp: DateTime<FixedOffset>,
    pub committer: String,
    pub committer_timestamp: DateTime<FixedOffset>,
    pub message: String,
}

impl From<(Hash, Commit)> for LogEntry {
    fn from((hash, commit): (Hash, Commit)) -> Self {
        Self {
            hash,
            author: commit.author,
            author_timestamp: commit.author_timestamp,
            committer: commit.committer,
            committer_timestamp: commit.committer_timestamp,
            message: commit.message,
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn commit_tree(
    repo: &mut Repo,
    tree_hash: Hash,
    message: impl Into<String>,
    author: impl Into<String>,
    author_timestamp: DateTime<FixedOffset>,
    committer: impl Into<String>,
    committer_timestamp: DateTime<FixedOffset>,
    parent_hashes: Vec<Hash>,
) -> (Hash, Commit) {
    let commit = Commit::new(
        tree_hash,
        author,
        author_timestamp,
        committer,
        committer_timestamp,
        message,
        parent_hashes,
    );
    let hash = hash_object_write(repo, RepoObject::Commit(commit.clone()));
    (hash, commit)
}

/// public top-level call: DFS pre-order over parent links from `hash`,
/// unlimited depth, each commit emitted once.
pub fn rev_list(repo: &Repo, hash: Hash) -> Result<Vec<(Hash, Commit)>> {
    rev_list_with_depth_limit(repo, hash, None)
}

/// same DFS, but `Some(n)` halts after visiting `n` commits. this is the
/// knob checkout's revision-offset walk needs; the public call above always
/// passes `None`.
pub(crate) fn rev_list_with_depth_limit(repo: &Repo, hash: Hash, depth_limit: Option<usize>) -> Result<Vec<(Hash, Commit)>> {
    let mut visited = HashSet::new();
    let mut result = Vec::new();
    let mut stack = vec![hash];

    while let Some(current) = stack.pop() {
        if let Some(limit) = depth_limit {
            if result.len() >= limit {
                break;
            }
        }
        if !visited.insert(current) {
            continue;
        }
        let object = repo
            .database
            .object_store
            .get(&current)
            .cloned()
            .ok_or(Error::InvalidCommit(current))?;
        let commit = object.into_commit(current)?;
        let parents = commit.parent_hashes.clone();
        result.push((current, commit));
        for parent in parents.into_iter().rev() {
            stack.push(parent);
        }
    }

    Ok(result)
}

pub fn log_from_commit_hash(repo: &Repo, hash: Hash) -> Result<Vec<LogEntry>> {
    Ok(rev_list(repo, hash)?.into_iter().map(LogEntry::from).collect())
}

pub fn log_from_reference_name(repo: &Repo, name: &str) -> Result<Vec<LogEntry>> {
    let hash = repo
        .database
        .heads
        .get(name)
        .copied()
        .ok_or_else(|| Error::ReferenceNotFound(name.to_string()))?;
    log_from_commit_hash(repo, hash)
}

/// dispatch on whether `name_or_hash` resolves to a commit in the store;
/// otherwise falls back to a head ref of that name
pub fn log(repo: &Repo, name_or_hash: &str) -> Result<Vec<LogEntry>> {
    if let Ok(hash) = Hash::from_hex(name_or_hash) {
        if repo
            .database
            .object_store
            .get(&hash)
            .is_some_and(|o| o.as_commit().is_some())
        {
            return log_from_commit_hash(repo, hash);
        }
    }
    log_from_reference_name(repo, name_or_hash)
}

/// snapshot the staging area into a new commit, recording HEAD's current
/// head as the sole parent (or none for a root commit).
pub fn commit_all(repo: &mut Repo, message: &str, create_snapshots: bool) -> Result<(Hash, Commit)> {
    let parents = resolve_reference(repo, "HEAD").map(|hash| vec![hash]).unwrap_or_default();
    commit_all_use_commit_parent_hashes(repo, message, create_snapshots, parents)
}

/// same as `commit_all` but takes explicit parent hashes instead of deriving
/// them from HEAD; used by the merge driver.
pub fn commit_all_use_commit_parent_hashes(
    repo: &mut Repo,
    message: &str,
    create_snapshots: bool,
    parent_hashes: Vec<Hash>,
) -> Result<(Hash, Commit)> {
    let tree_hash = write_tree(repo);

    // the committed area always wraps a fresh `Rc` per entry, so
    // `create_snapshots` has no observable effect here; it only matters for
    // `add_all`'s working-to-staging copy. kept as a parameter to mirror the
    // porcelain signature.
    let _ = create_snapshots;
    repo.committed.clear();
    for (path, bytes) in repo.staging.snapshot_as_list() {
        repo.committed.put_content(&path, bytes)?;
    }
    repo.committed.freeze();

    let now = Utc::now().fixed_offset();
    let (hash, commit) = commit_tree(
        repo,
        tree_hash,
        message,
        "author",
        now,
        "committer",
        now,
        parent_hashes,
    );

    if let Some(reference_name) = repo.database.head.clone() {
        update_ref_in_heads(repo, &reference_name, hash);
    }

    Ok((hash, commit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::stage::{add_all, put_working_area_content};

    #[test]
    fn test_commit_all_root_commit_has_no_parents() {
        let mut repo = Repo::init();
        put_working_area_content(&mut repo, "/path.txt", b"Hello World".to_vec());
        add_all(&mut repo, true);
        let (hash, commit) = commit_all(&mut repo, "Commit", true).unwrap();

        assert!(commit.parent_hashes.is_empty());
        assert_eq!(repo.database.heads.get("master"), Some(&hash));
        assert!(repo.committed.is_frozen());
        assert_eq!(
            repo.committed.get_content("/path.txt"),
            Some(b"Hello World".to_vec())
        );
    }

    #[test]
    fn test_commit_all_chains_parent_from_head() {
        let mut repo = Repo::init();
        put_working_area_content(&mut repo, "/path.txt", b"Hello World".to_vec());
        add_all(&mut repo, true);
        let (c1, _) = commit_all(&mut repo, "first", true).unwrap();

        put_working_area_content(&mut repo, "/path.txt", b"Hello Again World".to_vec());
        add_all(&mut repo, true);
        let (c2, commit2) = commit_all(&mut repo, "second", true).unwrap();

        assert_eq!(commit2.parent_hashes, vec![c1]);
        let history = rev_list(&repo, c2).unwrap();
        assert_eq!(history.iter().map(|(h, _)| *h).collect::<Vec<_>>(), vec![c2, c1]);
        assert_eq!(repo.database.heads.get("master"), Some(&c2));
    }

    #[test]
    fn test_rev_list_deduplicates_diamond_history() {
        let mut repo = Repo::init();
        let (root, _) = commit_tree(
            &mut repo,
            Hash::ZERO,
            "root",
            "a",
            Utc::now().fixed_offset(),
            "a",
            Utc::now().fixed_offset(),
            vec![],
        );
        let (left, _) = commit_tree(
            &mut repo,
            Hash::ZERO,
            "left",
            "a",
            Utc::now().fixed_offset(),
            "a",
            Utc::now().fixed_offset(),
            vec![root],
        );
        let (right, _) = commit_tree(
            &mut repo,
            Hash::ZERO,
            "right",
            "a",
            Utc::now().fixed_offset(),
            "a",
            Utc::now().fixed_offset(),
            vec![root],
        );
        let (merge, _) = commit_tree(
            &mut repo,
            Hash::ZERO,
            "merge",
            "a",
            Utc::now().fixed_offset(),
            "a",
            Utc::now().fixed_offset(),
            vec![left, right],
        );

        let history = rev_list(&repo, merge).unwrap();
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn test_log_from_reference_name_not_found() {
        let repo = Repo::init();
        assert!(matches!(
            log_from_reference_name(&repo, "nonexistent"),
            Err(Error::ReferenceNotFound(_))
        ));
    }
}
