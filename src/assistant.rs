//! The assistant session: one address book plus the command table.

use crate::book::AddressBook;
use crate::clock::{Clock, SystemClock};
use crate::commands::{default_registry, dispatch, Context, Registry, Reply};
use crate::config::Config;
use crate::error::{CommandError, CommandResult};
use tracing::{debug, warn};

/// Split an input line into a lowercased command and its arguments.
///
/// A blank line yields an empty command name.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default().to_lowercase();
    let args = parts.map(str::to_string).collect();
    (command, args)
}

/// A single interactive session.
///
/// All errors are caught here and rendered as reply text, so nothing a user
/// types can end the session except `exit` or `close`.
pub struct Assistant {
    registry: Registry,
    book: AddressBook,
    clock: Box<dyn Clock>,
    config: Config,
}

impl Assistant {
    /// Create a session that reads today's date from the system clock.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Create a session with a custom date source.
    pub fn with_clock(config: Config, clock: Box<dyn Clock>) -> Self {
        Self {
            registry: default_registry(&config),
            book: AddressBook::new(),
            clock,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Parse and run one line of input.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let (command, args) = parse_input(line);
        self.execute(&command, &args)
    }

    /// Run `command` with `args`, rendering any error as the reply.
    pub fn execute(&mut self, command: &str, args: &[String]) -> Reply {
        debug!(command, args = args.len(), "dispatching command");

        match self.try_execute(command, args) {
            Ok(reply) => reply,
            Err(err) => {
                match &err {
                    CommandError::UnknownCommand(name) => warn!(command = %name, "unknown command"),
                    CommandError::Usage(_) => warn!(command, "arguments rejected"),
                    CommandError::Book(e) => debug!(command, error = %e, "command failed"),
                }
                Reply::Message(err.to_string())
            }
        }
    }

    fn try_execute(&mut self, name: &str, args: &[String]) -> CommandResult<Reply> {
        let command = self
            .registry
            .get(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;

        let mut ctx = Context {
            book: &mut self.book,
            registry: &self.registry,
            clock: self.clock.as_ref(),
            config: &self.config,
        };
        dispatch(command, &mut ctx, args)
    }
}
