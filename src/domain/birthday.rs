//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// `strftime` pattern for birthdays and congratulation dates.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts single-digit days and months, so the shape is checked first
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday pattern is valid"));

/// A birthday in `DD.MM.YYYY` form, parsed to a calendar date at construction.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("29.02.2000").unwrap();
/// assert_eq!(birthday.as_str(), "29.02.2000");
/// assert!(Birthday::new("29.02.2001").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    value: String,
    date: NaiveDate,
}

impl Birthday {
    /// Parse a birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input is not shaped
    /// `DD.MM.YYYY` or does not name a real calendar day.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        match Self::parse(&value) {
            Some(date) => Ok(Self { value, date }),
            None => Err(ValidationError::InvalidBirthday(value)),
        }
    }

    /// Check whether `value` would be accepted by [`Birthday::new`].
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_some()
    }

    fn parse(value: &str) -> Option<NaiveDate> {
        if !BIRTHDAY_SHAPE.is_match(value) {
            return None;
        }
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).ok()
    }

    /// The birthday as originally entered.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// Feb 29 birthdays fall on Feb 28 in non-leap years.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day()).or_else(|| {
            if self.date.month() == 2 && self.date.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
