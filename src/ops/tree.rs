//! folding the staging area into a tree and expanding a tree back out.

use std::collections::HashMap;

use crate::content::path;
use crate::error::{Error, Result};
use crate::hash::Hash;
use crate::object::{ObjectType, Tree, TreeEntry};
use crate::ops::plumbing::hash_object_write_blob;
use crate::repo::Repo;

/// fold the staging area into a single root tree, returning its hash. every
/// intermediate directory and leaf blob is written to the object store
/// before the root is hashed, so the whole tree is reachable on return.
pub fn write_tree(repo: &mut Repo) -> Hash {
    let mut trees: HashMap<String, Tree> = HashMap::new();
    trees.insert("/".to_string(), Tree::new());
    let mut creation_order = vec!["/".to_string()];
    let mut dir_parent: HashMap<String, (String, String)> = HashMap::new();
    let mut pending_blobs: Vec<(String, String, Vec<u8>)> = Vec::new();

    for (item_path, bytes) in repo.staging.snapshot_as_list() {
        let parts = path::split_into_parts(&item_path);
        let Some((leaf_name, dir_parts)) = parts.split_last() else {
            continue;
        };

        let mut current_dir = "/".to_string();
        for segment in dir_parts {
            let child_dir = path::resolve(&current_dir, segment);
            if !trees.contains_key(&child_dir) {
                trees.insert(child_dir.clone(), Tree::new());
                creation_order.push(child_dir.clone());
                dir_parent.insert(child_dir.clone(), (current_dir.clone(), segment.clone()));
                trees
                    .get_mut(&current_dir)
                    .unwrap()
                    .push(TreeEntry::new(ObjectType::Tree, segment.clone(), Hash::ZERO));
            }
            current_dir = child_dir;
        }

        let parent_tree = trees.get_mut(&current_dir).unwrap();
        if parent_tree.get(leaf_name).is_none() {
            parent_tree.push(TreeEntry::new(ObjectType::Blob, leaf_name.clone(), Hash::ZERO));
        }
        pending_blobs.push((current_dir, leaf_name.clone(), bytes));
    }

    for (dir_path, leaf_name, bytes) in pending_blobs {
        let hash = hash_object_write_blob(repo, bytes);
        trees.get_mut(&dir_path).unwrap().get_mut(&leaf_name).unwrap().hash = hash;
    }

    let mut root_hash = Hash::ZERO;
    for dir_path in creation_order.iter().rev() {
        let tree = trees.get(dir_path).unwrap().clone();
        let hash = crate::ops::plumbing::hash_object_write(
            repo,
            crate::object::RepoObject::Tree(tree),
        );
        match dir_parent.get(dir_path) {
            Some((parent_path, name)) => {
                trees.get_mut(parent_path).unwrap().get_mut(name).unwrap().hash = hash;
            }
            None => root_hash = hash,
        }
    }

    root_hash
}

/// expand a tree (and recursively its subtrees) back into the staging area,
/// returning the flattened `(absolute_path, bytes)` list in traversal order.
pub fn read_tree(repo: &mut Repo, root_tree_hash: Hash, prefix_path: &str) -> Result<Vec<(String, Vec<u8>)>> {
    let object = repo
        .database
        .object_store
        .get(&root_tree_hash)
        .cloned()
        .ok_or(Error::InvalidTree(root_tree_hash))?;
    let tree = object.into_tree(root_tree_hash)?;

    let mut result = Vec::new();
    read_tree_into(repo, &tree, prefix_path, &mut result)?;
    Ok(result)
}

fn read_tree_into(repo: &mut Repo, tree: &Tree, prefix: &str, result: &mut Vec<(String, Vec<u8>)>) -> Result<()> {
    for entry in &tree.entries {
        match entry.object_type {
            Some(ObjectType::Blob) => {
                let object = repo
                    .database
                    .object_store
                    .get(&entry.hash)
                    .cloned()
                    .ok_or(Error::InvalidTree(entry.hash))?;
                let blob = object
                    .as_blob()
                    .ok_or(Error::InvalidTree(entry.hash))?
                    .clone();
                let abs_path = path::resolve(prefix, &entry.name);
                repo.staging.put_content(&abs_path, blob.bytes.clone());
                result.push((abs_path, blob.bytes));
            }
            Some(ObjectType::Tree) => {
                let object = repo
                    .database
                    .object_store
                    .get(&entry.hash)
                    .cloned()
                    .ok_or(Error::InvalidTree(entry.hash))?;
                let subtree = object.into_tree(entry.hash)?;
                let new_prefix = path::resolve(prefix, &entry.name);
                read_tree_into(repo, &subtree, &new_prefix, result)?;
            }
            // Commit entries (submodules) and unrecognized tag bytes are
            // ignored here; only checkout's walk treats them as an error.
            Some(ObjectType::Commit) | None => {}
        }
    }
    Ok(())
}
