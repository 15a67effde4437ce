//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{BookError, BookResult};
use std::fmt;

/// A contact: one name, any number of phones, and an optional birthday.
///
/// The name is fixed at creation. Phones keep the order they were added in
/// and are not required to be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone after validating it.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove the first phone matching `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<()> {
        let index = self.position_of(phone)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the first phone matching `old_phone` with `new_phone`.
    ///
    /// The new number is validated before anything changes.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> BookResult<()> {
        let index = self.position_of(old_phone)?;
        self.phones[index] = Phone::new(new_phone)?;
        Ok(())
    }

    /// Find the first phone matching `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.matches(phone))
    }

    /// Set or replace the birthday.
    pub fn add_birthday(&mut self, birthday: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Phones joined with `"; "`.
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn position_of(&self, phone: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p.matches(phone))
            .ok_or_else(|| BookError::PhoneNotFound {
                phone: phone.to_string(),
                name: self.name.to_string(),
            })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: {}", self.name, self.phones_joined())?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
