//! In-memory address book keyed by contact name.

use super::record::Record;
use crate::domain::BIRTHDAY_FORMAT;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use indexmap::IndexMap;
use tracing::debug;

/// A contact whose birthday falls inside the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Birthday occurrence moved off the weekend to the following Monday
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Congratulation date rendered as `DD.MM.YYYY`.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format(BIRTHDAY_FORMAT).to_string()
    }
}

/// All records of a session, iterated in insertion order.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name, replacing any record with that name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        debug!(name = %key, "storing record");
        self.records.insert(key, record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`. Returns whether one existed.
    pub fn delete(&mut self, name: &str) -> bool {
        let removed = self.records.shift_remove(name).is_some();
        debug!(name, removed, "deleting record");
        removed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Every record rendered on its own line, or `"No contacts saved."`.
    pub fn all_contacts(&self) -> String {
        if self.is_empty() {
            return "No contacts saved.".to_string();
        }

        self.records()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Contacts whose next birthday lies within `window_days` days of `today`,
    /// both ends inclusive.
    ///
    /// A birthday that already passed this year counts from next year. A
    /// Saturday or Sunday birthday is congratulated the following Monday.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        self.records()
            .filter_map(|record| {
                let birthday = record.birthday()?;

                let mut occurrence = birthday.in_year(today.year())?;
                if occurrence < today {
                    occurrence = birthday.in_year(today.year() + 1)?;
                }

                let delta = (occurrence - today).num_days();
                if !(0..=i64::from(window_days)).contains(&delta) {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: congratulation_date(occurrence)?,
                })
            })
            .collect()
    }
}

fn congratulation_date(occurrence: NaiveDate) -> Option<NaiveDate> {
    match occurrence.weekday() {
        Weekday::Sat => occurrence.checked_add_days(Days::new(2)),
        Weekday::Sun => occurrence.checked_add_days(Days::new(1)),
        _ => Some(occurrence),
    }
}
