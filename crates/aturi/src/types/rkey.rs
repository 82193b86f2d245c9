//! Record Key (rkey) type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, RkeyError};

/// Maximum length of a record key, inclusive.
pub const MAX_RKEY_LENGTH: usize = 512;

/// Checks `candidate` against the record key grammar.
///
/// Returns the input unchanged when it is 1 to 512 characters drawn from
/// `A-Z a-z 0-9 . - _ ~ :` and is not `.` or `..`, otherwise `None`.
///
/// # Example
///
/// ```
/// use aturi::validate_rkey;
///
/// assert_eq!(validate_rkey("3jui7kd54zh2y"), Some("3jui7kd54zh2y"));
/// assert_eq!(validate_rkey("a/b"), None);
/// ```
pub fn validate_rkey(candidate: &str) -> Option<&str> {
    check(candidate).ok().map(|()| candidate)
}

fn is_rkey_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '~' | ':')
}

fn check(s: &str) -> Result<(), RkeyError> {
    if s.is_empty() {
        return Err(RkeyError::Empty);
    }

    if let Some(ch) = s.chars().find(|c| !is_rkey_char(*c)) {
        return Err(RkeyError::InvalidCharacter {
            value: s.to_string(),
            ch,
        });
    }

    // All characters are ASCII past this point, so bytes == chars.
    if s.len() > MAX_RKEY_LENGTH {
        return Err(RkeyError::TooLong {
            len: s.len(),
            max: MAX_RKEY_LENGTH,
        });
    }

    if s == "." || s == ".." {
        return Err(RkeyError::Reserved {
            value: s.to_string(),
        });
    }

    Ok(())
}

/// A validated AT Protocol Record Key (rkey).
///
/// Record keys identify individual records within a collection. The schema
/// layer treats them as opaque storage keys; this type only guarantees the
/// grammar.
///
/// # Example
///
/// ```
/// use aturi::Rkey;
///
/// let rkey = Rkey::new("self").unwrap();
/// assert_eq!(rkey.as_str(), "self");
/// assert!(Rkey::new("..").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rkey(String);

impl Rkey {
    /// Create a new rkey from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Rkey`] describing the first grammar violation.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        check(&s)?;
        Ok(Self(s))
    }

    /// Returns the rkey string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Rkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Rkey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Rkey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Rkey> for String {
    fn from(rkey: Rkey) -> Self {
        rkey.0
    }
}

impl AsRef<str> for Rkey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_tid_rkey() {
        let rkey = Rkey::new("3jui7kd54zh2y").unwrap();
        assert_eq!(rkey.as_str(), "3jui7kd54zh2y");
    }

    #[test]
    fn valid_self_rkey() {
        assert_eq!(validate_rkey("self"), Some("self"));
    }

    #[test]
    fn valid_punctuation() {
        for key in ["a.b", "a-b", "a_b", "a~b", "a:b", "A.Z-0_9~:"] {
            assert_eq!(validate_rkey(key), Some(key), "{key}");
        }
    }

    #[test]
    fn length_boundary() {
        let max = "a".repeat(MAX_RKEY_LENGTH);
        assert_eq!(validate_rkey(&max), Some(max.as_str()));

        let over = "a".repeat(MAX_RKEY_LENGTH + 1);
        assert_eq!(validate_rkey(&over), None);
        assert_eq!(
            Rkey::new(over).unwrap_err(),
            Error::Rkey(RkeyError::TooLong { len: 513, max: 512 })
        );
    }

    #[test]
    fn invalid_empty() {
        assert_eq!(validate_rkey(""), None);
        assert_eq!(Rkey::new("").unwrap_err(), Error::Rkey(RkeyError::Empty));
    }

    #[test]
    fn invalid_dot() {
        assert_eq!(validate_rkey("."), None);
        assert_eq!(validate_rkey(".."), None);
        assert!(validate_rkey("...").is_some());
    }

    #[test]
    fn invalid_character() {
        for key in [
            "test/key", "a#b", "a@b", "a b", "a\tb", "a+b", "a[b", "a]b", "a(b", "a)b", "a\"b",
            "é",
        ] {
            assert_eq!(validate_rkey(key), None, "{key:?}");
        }

        let err = Rkey::new("test/key").unwrap_err();
        assert_eq!(
            err,
            Error::Rkey(RkeyError::InvalidCharacter {
                value: "test/key".to_string(),
                ch: '/',
            })
        );
    }

    #[test]
    fn serde_rejects_invalid() {
        let rkey: Rkey = serde_json::from_str("\"self\"").unwrap();
        assert_eq!(rkey.as_str(), "self");
        assert!(serde_json::from_str::<Rkey>("\"a b\"").is_err());
    }
}
