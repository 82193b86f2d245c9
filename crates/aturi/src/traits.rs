//! Conversion of reference-like values into reference strings.

use std::borrow::Cow;

use crate::error::SerializeError;
use crate::types::AtUri;

/// A value that can be read as a reference string.
///
/// Strings convert for free. An [`AtUri`] has to be serialized first, which
/// fails when it has no authority.
pub trait AsReference {
    /// Returns the string form of this reference.
    fn as_reference(&self) -> Result<Cow<'_, str>, SerializeError>;
}

impl AsReference for str {
    fn as_reference(&self) -> Result<Cow<'_, str>, SerializeError> {
        Ok(Cow::Borrowed(self))
    }
}

impl AsReference for String {
    fn as_reference(&self) -> Result<Cow<'_, str>, SerializeError> {
        Ok(Cow::Borrowed(self.as_str()))
    }
}

impl AsReference for AtUri {
    fn as_reference(&self) -> Result<Cow<'_, str>, SerializeError> {
        self.to_uri_string().map(Cow::Owned)
    }
}
