//! working-area facade and bulk staging.

use crate::repo::Repo;

pub fn put_working_area_content(repo: &mut Repo, path: &str, bytes: Vec<u8>) {
    repo.working.put_content(path, bytes);
}

pub fn get_working_area_content(repo: &Repo, path: &str) -> Option<Vec<u8>> {
    repo.working.get_content(path)
}

/// bypass the working area and place content directly in staging
pub fn stage(repo: &mut Repo, path: &str, bytes: Vec<u8>) {
    repo.staging.put_content(path, bytes);
}

/// copy every working-area item into staging. `create_snapshots` deep-copies
/// the bytes; otherwise the same handle is aliased into staging. entries
/// whose working counterpart was since deleted are left untouched in
/// staging: this never removes anything.
pub fn add_all(repo: &mut Repo, create_snapshots: bool) {
    let handles: Vec<_> = repo.working.iter().cloned().collect();
    for handle in handles {
        if create_snapshots {
            let (path, bytes) = {
                let content = handle.borrow();
                (content.path.clone(), content.bytes.clone())
            };
            repo.staging.put_content(&path, bytes);
        } else {
            repo.staging.put_handle(handle);
        }
    }
}
