//! nanovc - an in-memory, content-addressed version control engine
//!
//! a "nano" reimagining of Git's object model and command set operating
//! entirely over process memory rather than a filesystem. each repo is an
//! independent, self-contained aggregate: object store, three content areas
//! (working/staging/committed), named refs, and a symbolic HEAD.
//!
//! # Core concepts
//!
//! - **Blob**: a content-addressed byte payload
//! - **Tree**: an ordered list of named, typed entries (Blob/Tree/Commit)
//! - **Commit**: a tree snapshot plus authorship metadata and parent links
//! - **Head**: a named pointer to a commit hash; **HEAD** names the current head
//!
//! # Hash format
//!
//! SHA-1 over `<type tag> <length marker>\0<payload>`. see [`hash::hash_object`].
//!
//! # Example usage
//!
//! ```
//! use nanovc::ops;
//!
//! let mut repo = nanovc::init();
//! ops::put_working_area_content(&mut repo, "/path.txt", b"Hello World".to_vec());
//! ops::add_all(&mut repo, true);
//! let (_, commit) = ops::commit_all(&mut repo, "initial commit", true).unwrap();
//! assert!(commit.is_root());
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod hash;
pub mod object;
pub mod ops;
pub mod refs;
pub mod repo;

pub use config::Config;
pub use error::{Error, Result};
pub use hash::Hash;
pub use object::{Blob, Commit, ObjectStore, ObjectType, RepoObject, Tree, TreeEntry};
pub use repo::Repo;

/// convenience constructor equivalent to [`Repo::init`]
pub fn init() -> Repo {
    Repo::init()
}
