//! status reporting. a contract stub: this always returns an empty shape,
//! and tests check it is callable, not its contents.

use crate::repo::Repo;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Status {
    pub working_area_entries: Vec<String>,
    pub staging_area_entries: Vec<String>,
}

pub fn status(_repo: &Repo) -> Status {
    Status::default()
}
