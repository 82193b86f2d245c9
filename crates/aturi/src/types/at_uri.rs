//! AT URI type.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument, trace};

use crate::error::{Error, InvariantError, SerializeError};
use crate::repo::SoftRef;
use crate::resolve::{self, SCHEME_PREFIX};
use crate::traits::AsReference;

/// An AT Protocol URI reference.
///
/// AT URIs address an account's repository, a collection within it, and a
/// record within the collection.
/// Format: `at://<authority>[/<collection>[/<rkey>]]`
///
/// A collection is only ever present alongside an authority, and an rkey
/// only alongside a collection. Absent parts are empty strings.
///
/// # Example
///
/// ```
/// use aturi::AtUri;
///
/// let base = AtUri::parse("at://did:plc:z72i7hdynmk6r22z27h6tvur").unwrap();
/// let uri = base.resolve("app.bsky.feed.post/3jui7kd54zh2y").unwrap();
/// assert_eq!(uri.collection(), "app.bsky.feed.post");
/// assert_eq!(uri.rkey(), "3jui7kd54zh2y");
/// assert_eq!(
///     uri.to_uri_string().unwrap(),
///     "at://did:plc:z72i7hdynmk6r22z27h6tvur/app.bsky.feed.post/3jui7kd54zh2y"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AtUri {
    authority: String,
    collection: String,
    rkey: String,
}

impl AtUri {
    /// Create an AT URI from its components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Invariant`] if a collection is given without an
    /// authority, or an rkey without a collection.
    pub fn new(
        authority: &str,
        collection: Option<&str>,
        rkey: Option<&str>,
    ) -> Result<Self, Error> {
        let collection = collection.unwrap_or_default();
        let rkey = rkey.unwrap_or_default();

        if !collection.is_empty() && authority.is_empty() {
            return Err(InvariantError::CollectionWithoutAuthority {
                collection: collection.to_string(),
            }
            .into());
        }

        if !rkey.is_empty() && collection.is_empty() {
            return Err(InvariantError::RkeyWithoutCollection {
                rkey: rkey.to_string(),
            }
            .into());
        }

        Ok(Self {
            authority: authority.to_string(),
            collection: collection.to_string(),
            rkey: rkey.to_string(),
        })
    }

    /// Parse a rooted reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference is not a valid `at://` reference,
    /// or if `reference` is an [`AtUri`] that cannot be serialized.
    pub fn parse<R: AsReference + ?Sized>(reference: &R) -> Result<Self, Error> {
        let reference = reference.as_reference()?;
        Self::from_references(&reference, None)
    }

    /// Parse `reference` resolved against `base`.
    ///
    /// A rooted reference ignores the base. A relative reference of at most
    /// two segments is overlaid onto the base's collection and rkey: a single
    /// segment replaces the collection and keeps the base's rkey.
    ///
    /// # Errors
    ///
    /// Returns an error if either input fails to serialize, resolution fails,
    /// or the resolved parts violate the URI invariants.
    pub fn parse_with_base<R, B>(reference: &R, base: &B) -> Result<Self, Error>
    where
        R: AsReference + ?Sized,
        B: AsReference + ?Sized,
    {
        let reference = reference.as_reference()?;
        let base = base.as_reference()?;
        Self::from_references(&reference, Some(&*base))
    }

    /// Returns true if [`AtUri::parse`] would succeed.
    pub fn can_parse<R: AsReference + ?Sized>(reference: &R) -> bool {
        Self::parse(reference).is_ok()
    }

    /// Returns true if [`AtUri::parse_with_base`] would succeed.
    pub fn can_parse_with_base<R, B>(reference: &R, base: &B) -> bool
    where
        R: AsReference + ?Sized,
        B: AsReference + ?Sized,
    {
        Self::parse_with_base(reference, base).is_ok()
    }

    /// Resolve `reference` using this URI as the base.
    ///
    /// # Errors
    ///
    /// See [`AtUri::parse_with_base`].
    pub fn resolve<R: AsReference + ?Sized>(&self, reference: &R) -> Result<Self, Error> {
        Self::parse_with_base(reference, self)
    }

    #[instrument(level = "trace", err(level = "debug"))]
    fn from_references(reference: &str, base: Option<&str>) -> Result<Self, Error> {
        let segments = resolve::resolve(reference, base)?;
        trace!(?segments, "resolved segments");

        Self::new(
            segments.authority.unwrap_or_default(),
            segments.collection,
            segments.rkey,
        )
    }

    /// Returns the authority (the repository's DID or handle).
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Returns the collection, empty when absent.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Returns the record key, empty when absent.
    pub fn rkey(&self) -> &str {
        &self.rkey
    }

    /// Returns true if a collection is present.
    pub fn has_collection(&self) -> bool {
        !self.collection.is_empty()
    }

    /// Returns true if a record key is present.
    pub fn has_rkey(&self) -> bool {
        !self.rkey.is_empty()
    }

    /// Projects this URI into request parameters.
    pub fn soft_ref(&self) -> SoftRef {
        SoftRef {
            repo: self.authority.clone(),
            collection: self.collection.clone(),
            rkey: self.rkey.clone(),
        }
    }

    /// Render the canonical string form.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::MissingAuthority`] if the authority is empty.
    pub fn to_uri_string(&self) -> Result<String, SerializeError> {
        if self.authority.is_empty() {
            debug!("refusing to serialize URI without authority");
            return Err(SerializeError::MissingAuthority);
        }

        let len = self.authority.len() + self.collection.len() + self.rkey.len();
        let mut out = String::with_capacity(SCHEME_PREFIX.len() + len + 2);
        out.push_str(SCHEME_PREFIX);
        out.push_str(&self.authority);

        if self.collection.is_empty() {
            return Ok(out);
        }
        out.push('/');
        out.push_str(&self.collection);

        if !self.rkey.is_empty() {
            out.push('/');
            out.push_str(&self.rkey);
        }

        Ok(out)
    }
}

impl FromStr for AtUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for AtUri {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Serialize for AtUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let s = self.to_uri_string().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for AtUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AtUri::parse(&s).map_err(serde::de::Error::custom)
    }
}
