//! Shared helpers for integration tests.

use chrono::NaiveDate;
use contact_assistant::{Assistant, Config, FixedClock};

/// Monday, 10 June 2024.
#[allow(dead_code)]
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

/// An assistant with default configuration whose clock is pinned to `today`.
#[allow(dead_code)]
pub fn assistant_on(today: NaiveDate) -> Assistant {
    Assistant::with_clock(Config::default(), Box::new(FixedClock(today)))
}

/// Run each line in order and return the text of the last reply.
#[allow(dead_code)]
pub fn run_lines(assistant: &mut Assistant, lines: &[&str]) -> String {
    let mut last = String::new();
    for line in lines {
        last = assistant.handle_line(line).text().to_string();
    }
    last
}
