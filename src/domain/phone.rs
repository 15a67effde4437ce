//! Phone value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::hash::{Hash, Hasher};

static PHONE_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("phone pattern is valid"));

/// A phone number of exactly ten digits.
///
/// Two phones are equal when their digits are equal.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Phone;
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(Phone::new("050-123-4567").is_err());
/// ```
#[derive(Debug, Clone, Eq)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the input is exactly
    /// ten ASCII digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Check whether `phone` would be accepted by [`Phone::new`].
    pub fn is_valid(phone: &str) -> bool {
        // `\d` is Unicode-aware in the regex crate
        phone.is_ascii() && PHONE_FORMAT.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        digits_of(&self.0)
    }

    /// Compare against a raw string by digits.
    pub fn matches(&self, raw: &str) -> bool {
        self.digits_only() == digits_of(raw)
    }
}

fn digits_of(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

impl PartialEq for Phone {
    fn eq(&self, other: &Self) -> bool {
        self.digits_only() == other.digits_only()
    }
}

impl Hash for Phone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits_only().hash(state);
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
