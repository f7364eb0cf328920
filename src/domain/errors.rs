//! Domain validation errors.

use std::fmt;

/// Errors that can occur while constructing domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided email address is invalid.
    InvalidEmail(String),

    /// A list name was requested from an empty contact collection.
    EmptyListNameDerivation,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(email) => write!(
                f,
                "Invalid email, must contain '@' and cannot start or end with '@': {}",
                email
            ),
            Self::EmptyListNameDerivation => {
                write!(f, "Cannot generate list name because there is no contact")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidEmail("nope".to_string());
        assert!(err.to_string().starts_with("Invalid email"));
        assert!(err.to_string().ends_with("nope"));

        assert_eq!(
            ValidationError::EmptyListNameDerivation.to_string(),
            "Cannot generate list name because there is no contact"
        );
    }
}
