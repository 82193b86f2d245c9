//! Repository addressing types.
//!
//! These are the shapes request layers embed when calling repository
//! methods. Building them is left to [`AtUri`](crate::AtUri).

mod types;

pub use types::SoftRef;
