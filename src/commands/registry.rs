//! Command registry, argument schemas, and dispatch.
//!
//! Every command is registered once at startup with its handler, its help
//! text, and (optionally) the positional parameters it expects. Typed names
//! may use hyphens (`add-birthday`); the registry keys commands by their
//! underscore form (`add_birthday`) so both spellings resolve to one entry.

use super::{Context, Reply};
use crate::error::{CommandError, CommandResult};
use std::collections::HashMap;
use std::fmt;

/// Predicate that decides whether a raw argument is acceptable.
pub type Validator = fn(&str) -> bool;

/// Function executing one command.
pub type Handler = fn(&mut Context<'_>, &[String]) -> CommandResult<Reply>;

/// One positional parameter in a command schema.
#[derive(Clone, Copy)]
pub struct Param {
    /// Name shown in usage text
    pub name: &'static str,

    /// Check applied to the argument; `None` only requires presence
    pub validator: Option<Validator>,
}

impl Param {
    /// A parameter that only has to be present.
    pub fn any(name: &'static str) -> Self {
        Self {
            name,
            validator: None,
        }
    }

    /// A parameter whose value must satisfy `validator`.
    pub fn checked(name: &'static str, validator: Validator) -> Self {
        Self {
            name,
            validator: Some(validator),
        }
    }

    fn accepts(&self, arg: Option<&str>) -> bool {
        match (arg, self.validator) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(value), Some(validator)) => validator(value),
        }
    }
}

/// A registered command.
#[derive(Clone)]
pub struct Command {
    /// Hyphenated name as typed by the user
    pub name: &'static str,

    /// One-line description shown by `help`
    pub help: String,

    /// Positional parameters; `None` means the command takes no arguments
    pub params: Option<Vec<Param>>,

    pub handler: Handler,
}

impl Command {
    pub fn new(name: &'static str, help: impl Into<String>, handler: Handler) -> Self {
        Self {
            name,
            help: help.into(),
            params: None,
            handler,
        }
    }

    /// Attach a parameter schema.
    pub fn with_params(mut self, params: Vec<Param>) -> Self {
        self.params = Some(params);
        self
    }

    /// `Usage: <name> <p1> <p2> ...`
    pub fn usage(&self) -> String {
        let params = self.params.as_deref().unwrap_or_default();
        if params.is_empty() {
            return format!("Usage: {}", self.name);
        }

        let names = params.iter().map(|p| p.name).collect::<Vec<_>>();
        format!("Usage: {} <{}>", self.name, names.join("> <"))
    }

    /// Check `args` against the schema.
    ///
    /// With a schema, each declared parameter must be present and accepted
    /// by its validator; trailing extra arguments are ignored. Without one,
    /// no arguments are allowed.
    pub fn validate(&self, args: &[String]) -> CommandResult<()> {
        let Some(params) = &self.params else {
            if args.is_empty() {
                return Ok(());
            }
            return Err(CommandError::Usage(self.usage()));
        };

        let failed = params
            .iter()
            .enumerate()
            .filter(|(index, param)| !param.accepts(args.get(*index).map(String::as_str)))
            .map(|(_, param)| param.name)
            .collect::<Vec<_>>();

        if failed.is_empty() {
            return Ok(());
        }

        Err(CommandError::Usage(format!(
            "{}: {}\n{}\nInvalid fields: {}",
            self.name,
            self.help,
            self.usage(),
            failed.join(" ")
        )))
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Param")
            .field("name", &self.name)
            .field("checked", &self.validator.is_some())
            .finish()
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("help", &self.help)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Validate `args` against `command`'s schema, then run its handler.
pub fn dispatch(command: &Command, ctx: &mut Context<'_>, args: &[String]) -> CommandResult<Reply> {
    command.validate(args)?;
    (command.handler)(ctx, args)
}

/// Internal key for a typed command name.
pub fn internal_name(name: &str) -> String {
    name.replace('-', "_")
}

/// All commands known to a session.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    commands: HashMap<String, Command>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `command`, replacing any command registered under the same name.
    pub fn register(&mut self, command: Command) {
        self.commands.insert(internal_name(command.name), command);
    }

    /// Look up a command by its typed name.
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(&internal_name(name))
    }

    /// Every command, sorted by hyphenated name.
    pub fn commands(&self) -> Vec<&Command> {
        let mut commands = self.commands.values().collect::<Vec<_>>();
        commands.sort_by_key(|c| c.name);
        commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_ctx: &mut Context<'_>, _args: &[String]) -> CommandResult<Reply> {
        Ok(Reply::Message("ok".to_string()))
    }

    fn is_digits(value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn schema_command() -> Command {
        Command::new("add-thing", "Add a thing", noop)
            .with_params(vec![Param::any("name"), Param::checked("count", is_digits)])
    }

    #[test]
    fn test_param_accepts() {
        let any = Param::any("name");
        assert!(any.accepts(Some("")));
        assert!(!any.accepts(None));

        let digits = Param::checked("count", is_digits);
        assert!(digits.accepts(Some("42")));
        assert!(!digits.accepts(Some("forty")));
        assert!(!digits.accepts(None));
    }

    #[test]
    fn test_usage_lists_params_in_order() {
        assert_eq!(schema_command().usage(), "Usage: add-thing <name> <count>");
        assert_eq!(Command::new("all", "", noop).usage(), "Usage: all");
    }

    #[test]
    fn test_validate_accepts_good_args() {
        assert!(schema_command().validate(&args(&["x", "12"])).is_ok());
    }

    #[test]
    fn test_validate_ignores_trailing_args() {
        assert!(schema_command().validate(&args(&["x", "12", "extra"])).is_ok());
    }

    #[test]
    fn test_validate_reports_missing_and_invalid_fields() {
        let err = schema_command().validate(&args(&[])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "add-thing: Add a thing\nUsage: add-thing <name> <count>\nInvalid fields: name count"
        );

        let err = schema_command().validate(&args(&["x", "many"])).unwrap_err();
        assert!(err.to_string().ends_with("Invalid fields: count"));
    }

    #[test]
    fn test_validate_without_schema_rejects_args() {
        let command = Command::new("hello", "Greet", noop);
        assert!(command.validate(&[]).is_ok());
        assert_eq!(
            command.validate(&args(&["there"])),
            Err(CommandError::Usage("Usage: hello".to_string()))
        );
    }

    #[test]
    fn test_registry_normalizes_hyphens() {
        let mut registry = Registry::new();
        registry.register(schema_command());

        assert!(registry.get("add-thing").is_some());
        assert!(registry.get("add_thing").is_some());
        assert!(registry.get("addthing").is_none());
    }

    #[test]
    fn test_registry_commands_sorted_by_name() {
        let mut registry = Registry::new();
        for name in ["phone", "add-birthday", "all", "add"] {
            registry.register(Command::new(name, "", noop));
        }

        let names: Vec<_> = registry.commands().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["add", "add-birthday", "all", "phone"]);
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = Registry::new();
        registry.register(Command::new("hello", "first", noop));
        registry.register(Command::new("hello", "second", noop));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("hello").unwrap().help, "second");
    }
}
