//! Contact model representing a person to synchronize.

use crate::domain::{Email, ValidationError};
use chrono::{DateTime, Utc};
use std::hash::{Hash, Hasher};

/// A contact record.
///
/// Contacts are immutable once built. Identity is the email address:
/// two contacts with the same email are equal regardless of their names,
/// gender or creation time.
#[derive(Debug, Clone)]
pub struct Contact {
    name: String,
    lastname: String,
    email: Email,
    gender: Option<String>,
    timestamp: DateTime<Utc>,
}

impl Contact {
    /// Create a new contact, validating the email.
    ///
    /// The creation timestamp defaults to now.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if `email` is not a valid address.
    pub fn new(
        name: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: name.into(),
            lastname: lastname.into(),
            email: Email::new(email)?,
            gender: None,
            timestamp: Utc::now(),
        })
    }

    /// Set the gender.
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Override the creation timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lastname(&self) -> &str {
        &self.lastname
    }

    /// The email address as a string slice.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// The domain part of the email address.
    pub fn email_domain(&self) -> &str {
        self.email.domain()
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email
    }
}

impl Eq for Contact {}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.email.hash(state);
    }
}
