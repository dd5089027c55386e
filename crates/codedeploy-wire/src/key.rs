//! Parameter keys

use crate::error::{WireError, WireResult};

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::str::FromStr;

/// A validated parameter key as supplied by the caller.
///
/// Keys are snake_case or hyphen-case identifiers, possibly already partially
/// camelCased (`no_change_needed`, `no-change-needed`, `noChangeNeeded`).
/// Only ASCII letters, digits, `_` and `-` are accepted, and at least one
/// letter or digit is required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawKey(Cow<'static, str>);

impl RawKey {
    /// Creates a new `RawKey`, validating its characters.
    ///
    /// # Errors
    /// Returns [`WireError::InvalidKey`] if the key has no ASCII alphanumeric
    /// or contains a character other than an ASCII alphanumeric, `_` or `-`.
    ///
    /// # Examples
    /// ```
    /// # use codedeploy_wire::RawKey;
    /// let key = RawKey::new("application_name").unwrap();
    /// assert_eq!(key.as_str(), "application_name");
    ///
    /// assert!(RawKey::new("with space").is_err());
    /// assert!(RawKey::new("").is_err());
    /// assert!(RawKey::new("__").is_err());
    /// ```
    pub fn new(s: impl Into<String>) -> WireResult<Self> {
        let s = s.into();
        if is_valid_key(&s) {
            Ok(Self(Cow::Owned(s)))
        } else {
            Err(WireError::invalid_key(s))
        }
    }

    /// Creates a `RawKey` from a string literal.
    ///
    /// In a const context an invalid literal fails to compile.
    ///
    /// # Panics
    /// Panics if `s` is not a valid key (see [`is_valid_key`]).
    #[must_use]
    pub const fn from_static(s: &'static str) -> Self {
        assert!(is_valid_key(s), "invalid parameter key");
        Self(Cow::Borrowed(s))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.0.into_owned()
    }
}

/// Checks whether `s` is a usable parameter key.
///
/// # Examples
/// ```
/// # use codedeploy_wire::key::is_valid_key;
/// assert!(is_valid_key("deployment_group_name"));
/// assert!(is_valid_key("ec2-tag-filters"));
/// assert!(is_valid_key("nextToken"));
/// assert!(!is_valid_key(""));
/// assert!(!is_valid_key("a.b"));
/// assert!(!is_valid_key("_-_"));
/// ```
#[must_use]
pub const fn is_valid_key(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut has_word = false;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_alphanumeric() {
            has_word = true;
        } else if b != b'_' && b != b'-' {
            return false;
        }
        i += 1;
    }
    has_word
}

impl AsRef<str> for RawKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RawKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RawKey {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RawKey {
    type Error = WireError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl serde::Serialize for RawKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for RawKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
