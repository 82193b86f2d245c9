//! Error types for the aturi library.
//!
//! Each component reports its own error type so callers can branch on the
//! failure kind. The crate-level [`Error`] joins them for callers that only
//! need to propagate.

use std::fmt;
use thiserror::Error;

/// The unified error type for aturi operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A reference string could not be resolved (scheme or arity).
    #[error("malformed reference: {0}")]
    Resolve(#[from] ResolveError),

    /// Parts were supplied in a combination that violates the URI invariants.
    #[error("invalid construction: {0}")]
    Invariant(#[from] InvariantError),

    /// A URI could not be rendered to its canonical string form.
    #[error("serialization failed: {0}")]
    Serialize(#[from] SerializeError),

    /// A record key did not match the record key grammar.
    #[error("invalid rkey: {0}")]
    Rkey(#[from] RkeyError),
}

/// Which of the resolver's inputs a failure refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceForm {
    /// The lowest-priority string: the base when one is given, otherwise the
    /// reference itself. Always rooted.
    Base,

    /// A reference carrying its own `at://` scheme, overriding the base.
    Rooted,

    /// A reference without a scheme, merged onto the base.
    Relative,
}

impl fmt::Display for ReferenceForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceForm::Base => write!(f, "base"),
            ReferenceForm::Rooted => write!(f, "rooted"),
            ReferenceForm::Relative => write!(f, "relative"),
        }
    }
}

/// Errors from splitting and merging reference strings.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The base reference does not begin with the `at:` scheme token.
    #[error("'{value}' must start with 'at://' (first segment is '{found}')")]
    Scheme { value: String, found: String },

    /// Too many path segments for the given form.
    #[error("{form} reference '{value}' has {count} segments, at most {max} allowed")]
    Arity {
        form: ReferenceForm,
        value: String,
        count: usize,
        max: usize,
    },
}

impl ResolveError {
    /// Returns the reference form for arity errors.
    pub fn form(&self) -> Option<ReferenceForm> {
        match self {
            ResolveError::Arity { form, .. } => Some(*form),
            ResolveError::Scheme { .. } => None,
        }
    }
}

/// Construction-time invariant violations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("collection '{collection}' given without an authority")]
    CollectionWithoutAuthority { collection: String },

    #[error("rkey '{rkey}' given without a collection")]
    RkeyWithoutCollection { rkey: String },
}

/// Errors rendering a URI to a string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SerializeError {
    #[error("URI has no authority")]
    MissingAuthority,
}

/// Record key grammar violations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RkeyError {
    #[error("cannot be empty")]
    Empty,

    #[error("length {len} exceeds maximum of {max} characters")]
    TooLong { len: usize, max: usize },

    #[error("'{value}' is reserved")]
    Reserved { value: String },

    #[error("'{value}' contains invalid character {ch:?}")]
    InvalidCharacter { value: String, ch: char },
}
