use std::collections::HashMap;

use crate::config::Config;
use crate::content::{CommittedArea, MutableArea};
use crate::hash::Hash;
use crate::object::ObjectStore;

/// the load-bearing and ambient state shared by a repo's operations: HEAD,
/// the named ref collections, the object store, and the non-load-bearing
/// description/config/hooks/info slots.
pub struct Database {
    pub description: String,
    pub config: Config,
    /// HEAD's reference name, if any. `None` means no checkout has
    /// occurred and no branch has been named yet.
    pub head: Option<String>,
    pub heads: HashMap<String, Hash>,
    pub tags: HashMap<String, Hash>,
    pub object_store: ObjectStore,
    /// placeholder for hook scripts; the in-memory engine never invokes any
    pub hooks: Vec<String>,
    /// placeholder for ignore patterns
    pub info: Vec<String>,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            description: String::new(),
            config: Config::default(),
            head: None,
            heads: HashMap::new(),
            tags: HashMap::new(),
            object_store: ObjectStore::new(),
            hooks: Vec::new(),
            info: Vec::new(),
        }
    }
}

/// a single in-memory repository: the three content areas plus the database
/// of refs and objects. not thread-safe (see crate-level docs).
pub struct Repo {
    pub working: MutableArea,
    pub staging: MutableArea,
    pub committed: CommittedArea,
    pub database: Database,
}

impl Repo {
    /// creates a repo with HEAD symbolically pointing at `"master"`; the
    /// `master` head itself is created lazily on first commit.
    pub fn init() -> Self {
        tracing::info!("initializing repository");
        let mut database = Database::default();
        database.head = Some("master".to_string());
        Self {
            working: MutableArea::new(),
            staging: MutableArea::new(),
            committed: CommittedArea::new(),
            database,
        }
    }
}

impl Default for Repo {
    fn default() -> Self {
        Self::init()
    }
}
