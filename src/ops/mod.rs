//! the operation surface: plumbing over the object store and refs,
//! porcelain over content areas and commit composition.

pub mod branch;
pub mod checkout;
pub mod commit;
pub mod merge;
pub mod plumbing;
pub mod stage;
pub mod status;
pub mod tree;

pub use branch::{branch, branch_delete, current_branch_name};
pub use checkout::{checkout, checkout_path, checkout_pattern};
pub use commit::{commit_all, commit_all_use_commit_parent_hashes, commit_tree, log, log_from_commit_hash, log_from_reference_name, rev_list, LogEntry};
pub use merge::{common_ancestor, merge, Diff, DiffKind};
pub use plumbing::{
    cat_file, cat_file_type, hash_object, hash_object_write, hash_object_write_blob,
    hash_object_write_string, update_index_add, update_index_add_cache_info,
};
pub use stage::{add_all, get_working_area_content, put_working_area_content, stage};
pub use status::{status, Status};
pub use tree::{read_tree, write_tree};

pub use crate::refs::{
    resolve_commit, resolve_reference, symbolic_ref, update_ref_in_heads, update_ref_in_tags,
};
