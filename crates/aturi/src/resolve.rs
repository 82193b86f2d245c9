//! Reference resolution.
//!
//! A reference is split on `/` with empty tokens discarded. Rooted references
//! start with the `at:` token and carry at most an authority, a collection
//! and an rkey after it. Relative references carry at most a collection and
//! an rkey and are merged onto a rooted base.

use tracing::trace;

use crate::error::{ReferenceForm, ResolveError};

/// The scheme token as it appears after splitting on `/`.
pub const SCHEME: &str = "at:";

/// The prefix of every canonical AT URI.
pub const SCHEME_PREFIX: &str = "at://";

/// Maximum number of segments in a rooted reference, scheme included.
pub const MAX_SEGMENTS: usize = 4;

/// Maximum number of segments in a relative reference.
pub const MAX_RELATIVE_SEGMENTS: usize = 2;

/// Resolved path segments of a reference, by position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Segments<'a> {
    pub scheme: Option<&'a str>,
    pub authority: Option<&'a str>,
    pub collection: Option<&'a str>,
    pub rkey: Option<&'a str>,
}

fn tokens(reference: &str) -> Vec<&str> {
    reference.split('/').filter(|t| !t.is_empty()).collect()
}

fn arity(form: ReferenceForm, value: &str, count: usize, max: usize) -> ResolveError {
    ResolveError::Arity {
        form,
        value: value.to_string(),
        count,
        max,
    }
}

fn rooted<'a>(tokens: &[&'a str]) -> Segments<'a> {
    Segments {
        scheme: tokens.first().copied(),
        authority: tokens.get(1).copied(),
        collection: tokens.get(2).copied(),
        rkey: tokens.get(3).copied(),
    }
}

/// Splits a rooted reference into its segments.
///
/// # Errors
///
/// Fails with an arity error when there are more than [`MAX_SEGMENTS`]
/// segments, and with a scheme error when the first segment is not `at:`.
pub fn split(reference: &str) -> Result<Segments<'_>, ResolveError> {
    let parts = tokens(reference);

    if parts.len() > MAX_SEGMENTS {
        return Err(arity(
            ReferenceForm::Base,
            reference,
            parts.len(),
            MAX_SEGMENTS,
        ));
    }

    match parts.first() {
        Some(&SCHEME) => Ok(rooted(&parts)),
        found => Err(ResolveError::Scheme {
            value: reference.to_string(),
            found: found.copied().unwrap_or_default().to_string(),
        }),
    }
}

/// Merges `reference` onto already-split `base` segments.
///
/// A rooted reference replaces the base entirely. A relative reference keeps
/// the base's scheme and authority and is overlaid from the collection slot:
/// its first segment replaces the collection and its second, if present,
/// the rkey. Slots the reference does not reach keep the base's value.
///
/// # Errors
///
/// Fails with an arity error when a rooted reference has more than
/// [`MAX_SEGMENTS`] segments or a relative one more than
/// [`MAX_RELATIVE_SEGMENTS`].
pub fn merge<'a>(base: Segments<'a>, reference: &'a str) -> Result<Segments<'a>, ResolveError> {
    let parts = tokens(reference);

    if parts.first() == Some(&SCHEME) {
        if parts.len() > MAX_SEGMENTS {
            return Err(arity(
                ReferenceForm::Rooted,
                reference,
                parts.len(),
                MAX_SEGMENTS,
            ));
        }
        trace!(reference, "rooted reference overrides base");
        return Ok(rooted(&parts));
    }

    if parts.len() > MAX_RELATIVE_SEGMENTS {
        return Err(arity(
            ReferenceForm::Relative,
            reference,
            parts.len(),
            MAX_RELATIVE_SEGMENTS,
        ));
    }

    let mut merged = base;
    if let Some(&collection) = parts.first() {
        merged.collection = Some(collection);
    }
    if let Some(&rkey) = parts.get(1) {
        merged.rkey = Some(rkey);
    }
    Ok(merged)
}

/// Resolves `reference` against an optional `base`.
///
/// Without a base the reference must itself be rooted. With one, the base
/// must be rooted and the reference is merged onto it.
///
/// # Errors
///
/// Propagates the failures of [`split`] and [`merge`].
pub fn resolve<'a>(
    reference: &'a str,
    base: Option<&'a str>,
) -> Result<Segments<'a>, ResolveError> {
    match base {
        None => split(reference),
        Some(base) => merge(split(base)?, reference),
    }
}
