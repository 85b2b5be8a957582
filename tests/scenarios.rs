//! end-to-end scenarios exercising the public API across a full
//! init → stage → commit → branch → merge lifecycle.

use nanovc::ops;
use nanovc::Repo;

#[test]
fn scenario_new_commit_branch_and_merge_lifecycle() {
    let mut repo = Repo::init();

    // create a file and commit it as the root commit
    ops::put_working_area_content(&mut repo, "/path.txt", b"Hello World".to_vec());
    ops::add_all(&mut repo, true);
    let (c1_hash, c1) = ops::commit_all(&mut repo, "Commit", true).unwrap();

    assert!(c1.parent_hashes.is_empty());
    assert_eq!(ops::rev_list(&repo, c1_hash).unwrap().len(), 1);
    assert_eq!(repo.committed.get_content("/path.txt"), Some(b"Hello World".to_vec()));
    assert!(repo.committed.is_frozen());

    // modify the file and commit again, chaining onto the root commit
    ops::put_working_area_content(&mut repo, "/path.txt", b"Hello Again World".to_vec());
    ops::add_all(&mut repo, true);
    let (c2_hash, c2) = ops::commit_all(&mut repo, "Commit", true).unwrap();

    assert_eq!(c2.parent_hashes, vec![c1_hash]);
    let history = ops::rev_list(&repo, c2_hash).unwrap();
    assert_eq!(history.iter().map(|(h, _)| *h).collect::<Vec<_>>(), vec![c2_hash, c1_hash]);
    assert_eq!(repo.database.heads.get("master"), Some(&c2_hash));

    // delete the file and commit. add_all never removes a staging entry
    // whose working counterpart vanished; the caller removes it explicitly.
    repo.working.remove_content("/path.txt");
    ops::add_all(&mut repo, true);
    assert!(repo.staging.has_content("/path.txt"));
    repo.staging.remove_content("/path.txt");

    let (c3_hash, _c3) = ops::commit_all(&mut repo, "Commit", true).unwrap();
    assert!(repo.committed.is_empty());
    let tree = repo
        .database
        .object_store
        .get(&ops::resolve_commit(&repo, &c3_hash.to_hex()).unwrap().tree_hash)
        .unwrap()
        .as_tree()
        .unwrap();
    assert!(tree.is_empty());

    // create a branch and check it out, then commit independently on it
    ops::branch(&mut repo, "Branch1");
    ops::checkout(&mut repo, "Branch1", None).unwrap();
    ops::put_working_area_content(&mut repo, "/path.txt", b"Modified".to_vec());
    ops::add_all(&mut repo, true);
    let (cb_hash, _cb) = ops::commit_all(&mut repo, "Commit", true).unwrap();

    assert_eq!(ops::current_branch_name(&repo), Some("Branch1".to_string()));
    assert_eq!(repo.database.heads.get("Branch1"), Some(&cb_hash));
    assert_eq!(repo.database.heads.get("master"), Some(&c3_hash));
}

#[test]
fn scenario_three_way_merge_with_common_ancestor() {
    let mut repo = Repo::init();
    ops::put_working_area_content(&mut repo, "/path.txt", b"base".to_vec());
    ops::add_all(&mut repo, true);
    let (c1_hash, _c1) = ops::commit_all(&mut repo, "Commit", true).unwrap();

    ops::branch(&mut repo, "Branch1");
    ops::branch(&mut repo, "Branch2");

    ops::checkout(&mut repo, "Branch1", None).unwrap();
    ops::put_working_area_content(&mut repo, "/path.txt", b"from branch1".to_vec());
    ops::add_all(&mut repo, true);
    let (c2_hash, _c2) = ops::commit_all(&mut repo, "Commit", true).unwrap();

    ops::checkout(&mut repo, "Branch2", None).unwrap();
    ops::put_working_area_content(&mut repo, "/path.txt", b"from branch2".to_vec());
    ops::add_all(&mut repo, true);
    let (c3_hash, _c3) = ops::commit_all(&mut repo, "Commit", true).unwrap();

    let ancestor = ops::common_ancestor(&repo, c2_hash, c3_hash).unwrap();
    assert_eq!(ancestor, Some(c1_hash));

    ops::merge(&mut repo, "Branch2", "Branch1", "Branch1", "merge").unwrap();
    assert_eq!(repo.committed.get_content("/path.txt"), Some(b"from branch1".to_vec()));
}

#[test]
fn scenario_idempotent_object_store() {
    let mut repo = Repo::init();
    let h1 = ops::hash_object_write_string(&mut repo, "duplicate payload");
    let h2 = ops::hash_object_write_string(&mut repo, "duplicate payload");

    assert_eq!(h1, h2);
    assert_eq!(repo.database.object_store.len(), 1);
}
