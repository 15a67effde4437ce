//! Command handling for the assistant.
//!
//! - **registry**: command table, argument schemas and dispatch
//! - **handlers**: the built-in commands

pub mod handlers;
pub mod registry;

pub use handlers::default_registry;
pub use registry::{dispatch, Command, Handler, Param, Registry, Validator};

use crate::book::AddressBook;
use crate::clock::Clock;
use crate::config::Config;

/// Everything a handler may touch while it runs.
pub struct Context<'a> {
    pub book: &'a mut AddressBook,
    pub registry: &'a Registry,
    pub clock: &'a dyn Clock,
    pub config: &'a Config,
}

/// Outcome of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading commands
    Message(String),

    /// Print the text and end the session
    Exit(String),
}

impl Reply {
    pub fn message(text: impl Into<String>) -> Self {
        Reply::Message(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Reply::Message(text) | Reply::Exit(text) => text,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit(_))
    }
}
