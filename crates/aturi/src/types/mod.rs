//! Core AT Protocol types.
//!
//! These types enforce protocol invariants at construction time,
//! so an invalid URI or record key cannot be built.

mod at_uri;
mod rkey;

pub use at_uri::AtUri;
pub use rkey::{MAX_RKEY_LENGTH, Rkey, validate_rkey};
