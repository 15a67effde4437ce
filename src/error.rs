//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror`. The `Display`
//! text of every variant is exactly what the user sees, so handlers can
//! propagate with `?` and the dispatcher renders whatever comes back.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by address book and record operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No record exists under the given name
    #[error("Contact not found.")]
    ContactNotFound,

    /// The record has no phone matching the given number
    #[error("Phone {phone} not found for contact {name}.")]
    PhoneNotFound { phone: String, name: String },

    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors produced while dispatching a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command name is not registered
    #[error("Invalid command.")]
    UnknownCommand(String),

    /// Arguments did not satisfy the command's schema; carries the usage text
    #[error("{0}")]
    Usage(String),

    /// The handler failed on the address book
    #[error(transparent)]
    Book(#[from] BookError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Book(BookError::Validation(err))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
