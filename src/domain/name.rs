//! Name value object.

use super::errors::ValidationError;
use std::fmt;

/// A contact's name.
///
/// Names are validated to be non-empty and never change once constructed.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Name;
///
/// let name = Name::new("Alice").unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the provided name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !Self::is_valid(&name) {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Check whether `name` would be accepted by [`Name::new`].
    pub fn is_valid(name: &str) -> bool {
        !name.is_empty()
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
