//! the repo object model: Blob/Tree/Commit, their binary encodings, and the
//! in-memory hash-addressed store.

pub mod blob;
pub mod codec;
pub mod commit;
pub mod repo_object;
pub mod store;
pub mod tree;
pub mod types;

pub use blob::Blob;
pub use commit::Commit;
pub use repo_object::RepoObject;
pub use store::ObjectStore;
pub use tree::{Tree, TreeEntry};
pub use types::ObjectType;
