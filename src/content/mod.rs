//! path-keyed content areas: the mutable working/staging lists and the
//! immutable, freezable committed map.

pub mod immutable;
pub mod mutable;
pub mod path;

pub use immutable::{CommittedArea, ImmutableContent, ImmutableContentData};
pub use mutable::{MutableArea, MutableContent, MutableContentData};
