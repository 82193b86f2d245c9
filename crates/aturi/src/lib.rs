//! aturi - AT Protocol URI references.
//!
//! This library parses, resolves, validates and serializes `at://`
//! references (`at://<authority>[/<collection>[/<rkey>]]`), and checks record
//! keys against the record key grammar.
//!
//! # Example
//!
//! ```
//! use aturi::AtUri;
//!
//! # fn example() -> Result<(), aturi::Error> {
//! let base = AtUri::parse("at://alice.bsky.social")?;
//! let post = AtUri::parse_with_base("app.bsky.feed.post/3jui7kd54zh2y", &base)?;
//!
//! let params = post.soft_ref();
//! assert_eq!(params.repo, "alice.bsky.social");
//! assert_eq!(post.to_uri_string()?, "at://alice.bsky.social/app.bsky.feed.post/3jui7kd54zh2y");
//!
//! assert!(!AtUri::can_parse("https://bsky.app"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod error;
pub mod repo;
pub mod resolve;
pub mod traits;
pub mod types;

// Re-export primary types at crate root for convenience
pub use error::{Error, InvariantError, ReferenceForm, ResolveError, RkeyError, SerializeError};
pub use repo::SoftRef;
pub use resolve::{MAX_RELATIVE_SEGMENTS, MAX_SEGMENTS, SCHEME, SCHEME_PREFIX, Segments};
pub use traits::AsReference;
pub use types::{AtUri, MAX_RKEY_LENGTH, Rkey, validate_rkey};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
