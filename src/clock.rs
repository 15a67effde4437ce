//! Source of "today" for date-dependent commands.

use chrono::{Local, NaiveDate};

/// Provides the current calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the date from the local system time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
