//! Contact Assistant - an interactive command-line address book.
//!
//! Contacts live in memory for the duration of a session. Commands add and
//! edit contacts, show phone numbers and birthdays, and list who should be
//! congratulated during the coming week.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (name, phone, birthday)
//! - **book**: Records and the insertion-ordered address book
//! - **commands**: Command registry, argument schemas and handlers
//! - **assistant**: Session state and error-to-reply rendering
//! - **repl**: The line-oriented interactive loop
//! - **config**: Configuration from environment variables
//! - **clock**: Source of today's date
//! - **error**: Custom error types

pub mod assistant;
pub mod book;
pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod repl;

pub use assistant::{parse_input, Assistant};
pub use book::{AddressBook, Record, UpcomingBirthday};
pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::{Command, Param, Registry, Reply};
pub use config::Config;
pub use error::{BookError, CommandError, ConfigError};
