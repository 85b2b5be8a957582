//! branch creation, deletion, and the current-branch query.

use crate::refs::{resolve_reference, update_ref_in_heads};
use crate::repo::Repo;

/// create or move `name` to HEAD's current commit; a no-op if HEAD doesn't
/// resolve to a commit yet (nothing committed on the current head).
pub fn branch(repo: &mut Repo, name: &str) {
    if let Some(hash) = resolve_reference(repo, "HEAD") {
        update_ref_in_heads(repo, name, hash);
    }
}

/// remove the named heads; names with no matching head are silently skipped
pub fn branch_delete(repo: &mut Repo, names: &[&str]) {
    for name in names {
        repo.database.heads.remove(*name);
    }
}

pub fn current_branch_name(repo: &Repo) -> Option<String> {
    repo.database.head.clone()
}
