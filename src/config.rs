//! Configuration management for the contact assistant.
//!
//! Every setting has a default, so the assistant runs with no environment at
//! all. Values may be overridden through environment variables or a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Largest accepted look-ahead for the `birthdays` command.
const MAX_UPCOMING_DAYS: u32 = 366;

/// Configuration for an assistant session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prompt printed before each input line (default: "Enter a command: ")
    pub prompt: String,

    /// Days ahead inspected by `birthdays` (default: 7)
    pub upcoming_days: u32,

    /// Column width for command names in `help` (default: 20)
    pub help_column_width: usize,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_PROMPT`: Prompt text (default: "Enter a command: ")
    /// - `UPCOMING_BIRTHDAYS_DAYS`: Birthday look-ahead in days, 0-366 (default: 7)
    /// - `HELP_COLUMN_WIDTH`: Padding of command names in help (default: 20)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or(defaults.prompt);
        let upcoming_days = Self::parse_env_u32("UPCOMING_BIRTHDAYS_DAYS", defaults.upcoming_days)?;
        let help_column_width =
            Self::parse_env_usize("HELP_COLUMN_WIDTH", defaults.help_column_width)?;

        if upcoming_days > MAX_UPCOMING_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "UPCOMING_BIRTHDAYS_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_UPCOMING_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            prompt,
            upcoming_days,
            help_column_width,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "Enter a command: ".to_string(),
            upcoming_days: 7,
            help_column_width: 20,
            log_level: "error".to_string(),
        }
    }
}
