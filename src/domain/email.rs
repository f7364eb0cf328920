//! Email value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const SEPARATOR: char = '@';

/// A validated email address.
///
/// An `Email` holds exactly one `@`, never in the first or last position.
/// It is the natural key of a contact: two contacts are the same record
/// when their emails are equal.
///
/// # Example
///
/// ```
/// use hubspot_list_sync::domain::Email;
///
/// let email = Email::new("user@example.com").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// assert_eq!(email.domain(), "example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new Email, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` when the value does not hold
    /// exactly one `@` or when the `@` is leading or trailing.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    fn is_valid(email: &str) -> bool {
        email.matches(SEPARATOR).count() == 1
            && !email.starts_with(SEPARATOR)
            && !email.ends_with(SEPARATOR)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Everything after the `@`.
    pub fn domain(&self) -> &str {
        self.0
            .split_once(SEPARATOR)
            .map(|(_, domain)| domain)
            .unwrap_or_default()
    }
}

impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Email::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
