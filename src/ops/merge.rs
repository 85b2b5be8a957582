//! three-way merge driver: common-ancestor search, per-branch diff against
//! that ancestor, and last-writer-wins application onto the destination
//! branch.

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::hash::Hash;
use crate::object::Commit;
use crate::ops::checkout::{checkout, resolve_starting_hash};
use crate::ops::commit::{commit_all, rev_list};
use crate::ops::stage::add_all;
use crate::repo::Repo;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffKind {
    Added(Vec<u8>),
    Deleted,
    Changed(Vec<u8>),
}

pub type Diff = HashMap<String, DiffKind>;

fn ancestor_hashes(repo: &Repo, hash: Hash) -> Result<Vec<Hash>> {
    Ok(rev_list(repo, hash)?.into_iter().map(|(h, _)| h).collect())
}

/// first hash in `a`'s ancestor set (DFS pre-order) that also appears in
/// `b`'s ancestor set; `None` for disjoint histories
pub fn common_ancestor(repo: &Repo, a: Hash, b: Hash) -> Result<Option<Hash>> {
    let ancestors_a = ancestor_hashes(repo, a)?;
    let ancestors_b: HashSet<Hash> = ancestor_hashes(repo, b)?.into_iter().collect();
    Ok(ancestors_a.into_iter().find(|h| ancestors_b.contains(h)))
}

fn diff_against(ancestor: &HashMap<String, Vec<u8>>, target: &HashMap<String, Vec<u8>>) -> Diff {
    let mut diff = Diff::new();
    for (path, bytes) in target {
        match ancestor.get(path) {
            None => {
                diff.insert(path.clone(), DiffKind::Added(bytes.clone()));
            }
            Some(old) if old != bytes => {
                diff.insert(path.clone(), DiffKind::Changed(bytes.clone()));
            }
            _ => {}
        }
    }
    for path in ancestor.keys() {
        if !target.contains_key(path) {
            diff.insert(path.clone(), DiffKind::Deleted);
        }
    }
    diff
}

fn apply_diff(repo: &mut Repo, diff: &Diff) {
    for (path, kind) in diff {
        match kind {
            DiffKind::Added(bytes) | DiffKind::Changed(bytes) => {
                repo.working.put_content(path, bytes.clone());
            }
            DiffKind::Deleted => {
                repo.working.remove_content(path);
            }
        }
    }
}

/// merge `a` and `b` into `destination_branch`, committing the result.
/// where both sides touch the same path, `b`'s diff wins (last-writer-wins).
pub fn merge(
    repo: &mut Repo,
    a_name_or_hash: &str,
    b_name_or_hash: &str,
    destination_branch: &str,
    message: &str,
) -> Result<(Hash, Commit)> {
    let hash_a = resolve_starting_hash(repo, a_name_or_hash)?;
    let hash_b = resolve_starting_hash(repo, b_name_or_hash)?;

    let ancestor_hash = common_ancestor(repo, hash_a, hash_b)?
        .ok_or_else(|| Error::CommitNotFound(format!("no common ancestor of {a_name_or_hash} and {b_name_or_hash}")))?;

    checkout(repo, &ancestor_hash.to_hex(), None)?;
    let ancestor_map = repo.working.snapshot_as_map();

    checkout(repo, &hash_a.to_hex(), None)?;
    let diff_a = diff_against(&ancestor_map, &repo.working.snapshot_as_map());

    checkout(repo, &hash_b.to_hex(), None)?;
    let diff_b = diff_against(&ancestor_map, &repo.working.snapshot_as_map());

    checkout(repo, destination_branch, None)?;
    apply_diff(repo, &diff_a);
    apply_diff(repo, &diff_b);

    add_all(repo, true);
    commit_all(repo, message, true)
}
