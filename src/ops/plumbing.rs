//! low-level object and index operations.

use crate::hash::Hash;
use crate::object::{Blob, ObjectType, RepoObject};
use crate::repo::Repo;

/// compute a content hash without touching the store
pub fn hash_object(object_type: ObjectType, bytes: &[u8]) -> Hash {
    crate::hash::hash_object(object_type, bytes)
}

/// look up an object by hash
pub fn cat_file(repo: &Repo, hash: &Hash) -> Option<RepoObject> {
    repo.database.object_store.get(hash).cloned()
}

/// look up just an object's type, without cloning its payload
pub fn cat_file_type(repo: &Repo, hash: &Hash) -> Option<ObjectType> {
    repo.database.object_store.get(hash).map(|o| o.object_type())
}

/// hash and insert an object; idempotent
pub fn hash_object_write(repo: &mut Repo, object: RepoObject) -> Hash {
    let bytes = object.encode();
    let hash = hash_object(object.object_type(), &bytes);
    repo.database.object_store.put(hash, object);
    hash
}

pub fn hash_object_write_blob(repo: &mut Repo, bytes: Vec<u8>) -> Hash {
    hash_object_write(repo, RepoObject::Blob(Blob::new(bytes)))
}

pub fn hash_object_write_string(repo: &mut Repo, s: &str) -> Hash {
    hash_object_write_blob(repo, s.as_bytes().to_vec())
}

/// fetch an object's serialized bytes by hash and stage them at `staging_path`
pub fn update_index_add_cache_info(repo: &mut Repo, hash: &Hash, staging_path: &str) -> Option<()> {
    let object = repo.database.object_store.get(hash)?.clone();
    repo.staging.put_content(staging_path, object.encode());
    Some(())
}

/// copy working content to staging by reference (no byte copy)
pub fn update_index_add(repo: &mut Repo, path: &str) -> Option<()> {
    let handle = repo.working.get_handle(path)?;
    repo.staging.put_handle(handle);
    Some(())
}
