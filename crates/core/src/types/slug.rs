//! URL slug type for catalog entries.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    /// Shorter than [`Slug::MIN_LENGTH`].
    #[error("slug must be at least {min} characters")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// Contains a character other than `a-z`, `0-9` or `-`, or has a hyphen
    /// at either end or two hyphens in a row.
    #[error("slug may only contain lowercase letters, digits and single hyphens")]
    InvalidFormat,
}

/// A catalog slug such as `blue-shirt-v2`.
///
/// Lowercase ASCII alphanumeric segments joined by single hyphens. No
/// leading, trailing or doubled hyphens.
///
/// ```
/// use loomline_core::Slug;
///
/// assert!(Slug::parse("blue-shirt-v2").is_ok());
/// assert!(Slug::parse("Blue-Shirt").is_err());
/// assert!(Slug::parse("blue--shirt").is_err());
/// assert!(Slug::parse("-blue").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Minimum slug length.
    pub const MIN_LENGTH: usize = 2;

    /// Parse a `Slug` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`SlugError::TooShort`] or [`SlugError::InvalidFormat`].
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.chars().count() < Self::MIN_LENGTH {
            return Err(SlugError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }

        if !is_valid_pattern(s) {
            return Err(SlugError::InvalidFormat);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Return `true` when `value` matches `^[a-z0-9]+(?:-[a-z0-9]+)*$`.
#[must_use]
pub fn is_valid_pattern(value: &str) -> bool {
    value.split('-').all(|segment| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
    })
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
