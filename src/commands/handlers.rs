//! Handlers for every built-in command.
//!
//! Handlers run only after their arguments passed the registry's schema
//! check, and report failures through `CommandError` so the dispatcher can
//! turn them into plain replies.

use super::registry::{Command, Param, Registry};
use super::{Context, Reply};
use crate::book::Record;
use crate::config::Config;
use crate::domain::{Birthday, Name, Phone};
use crate::error::{BookError, CommandError, CommandResult};

pub const GREETING: &str = "How can I help you?";
pub const GOODBYE_MESSAGE: &str = "Good bye!";

/// Days covered by the default birthday window.
const WEEK: u32 = 7;

/// `"next week"` for the default window, `"next N days"` otherwise.
pub fn window_phrase(days: u32) -> String {
    match days {
        WEEK => "next week".to_string(),
        1 => "next day".to_string(),
        n => format!("next {} days", n),
    }
}

/// Build the registry holding every built-in command.
pub fn default_registry(config: &Config) -> Registry {
    let mut registry = Registry::new();

    registry.register(
        Command::new("add", "Add new contact or phone to existing contact", add)
            .with_params(vec![Param::any("name"), Param::checked("phone", Phone::is_valid)]),
    );
    registry.register(
        Command::new("change", "Change phone number for existing contact", change).with_params(
            vec![
                Param::any("name"),
                Param::checked("old_phone", Phone::is_valid),
                Param::checked("new_phone", Phone::is_valid),
            ],
        ),
    );
    registry.register(
        Command::new("phone", "Show phone numbers for contact", phone)
            .with_params(vec![Param::any("name")]),
    );
    registry.register(
        Command::new("remove-phone", "Remove phone number from contact", remove_phone)
            .with_params(vec![Param::any("name"), Param::checked("phone", Phone::is_valid)]),
    );
    registry.register(
        Command::new("delete", "Delete contact from address book", delete)
            .with_params(vec![Param::any("name")]),
    );
    registry.register(Command::new("all", "Show all contacts in address book", all));
    registry.register(
        Command::new(
            "add-birthday",
            "Add birthday to contact (format: DD.MM.YYYY)",
            add_birthday,
        )
        .with_params(vec![
            Param::any("name"),
            Param::checked("birthday", Birthday::is_valid),
        ]),
    );
    registry.register(
        Command::new("show-birthday", "Show birthday for contact", show_birthday)
            .with_params(vec![Param::any("name")]),
    );
    registry.register(Command::new(
        "birthdays",
        format!("Show birthdays in {}", window_phrase(config.upcoming_days)),
        birthdays,
    ));
    registry.register(Command::new("hello", "Greet the bot", hello));
    registry.register(Command::new("exit", "Exit the application", exit));
    registry.register(Command::new("close", "Exit the application", exit));
    registry.register(Command::new("help", "Show all available commands", help));

    registry
}

fn arg(args: &[String], index: usize) -> CommandResult<&str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| CommandError::Usage("Enter the argument for the command".to_string()))
}

fn record_mut<'b>(ctx: &'b mut Context<'_>, name: &str) -> CommandResult<&'b mut Record> {
    Ok(ctx.book.find_mut(name).ok_or(BookError::ContactNotFound)?)
}

fn add(ctx: &mut Context<'_>, args: &[String]) -> CommandResult<Reply> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    let message = if ctx.book.contains(name) {
        "Contact updated."
    } else {
        ctx.book.add_record(Record::new(Name::new(name)?));
        "Contact added."
    };

    record_mut(ctx, name)?.add_phone(phone)?;
    Ok(Reply::message(message))
}

fn change(ctx: &mut Context<'_>, args: &[String]) -> CommandResult<Reply> {
    let name = arg(args, 0)?;
    let old_phone = arg(args, 1)?;
    let new_phone = arg(args, 2)?;

    record_mut(ctx, name)?.edit_phone(old_phone, new_phone)?;
    Ok(Reply::message("Contact updated."))
}

fn phone(ctx: &mut Context<'_>, args: &[String]) -> CommandResult<Reply> {
    let name = arg(args, 0)?;
    let record = ctx.book.find(name).ok_or(BookError::ContactNotFound)?;

    if record.phones().is_empty() {
        return Ok(Reply::message(format!("No phones for contact {}.", name)));
    }

    Ok(Reply::message(format!("{}: {}", name, record.phones_joined())))
}

fn remove_phone(ctx: &mut Context<'_>, args: &[String]) -> CommandResult<Reply> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    record_mut(ctx, name)?.remove_phone(phone)?;
    Ok(Reply::message("Phone removed."))
}

fn delete(ctx: &mut Context<'_>, args: &[String]) -> CommandResult<Reply> {
    let name = arg(args, 0)?;

    if !ctx.book.delete(name) {
        return Err(BookError::ContactNotFound.into());
    }
    Ok(Reply::message("Contact deleted."))
}

fn all(ctx: &mut Context<'_>, _args: &[String]) -> CommandResult<Reply> {
    Ok(Reply::message(ctx.book.all_contacts()))
}

fn add_birthday(ctx: &mut Context<'_>, args: &[String]) -> CommandResult<Reply> {
    let name = arg(args, 0)?;
    let birthday = arg(args, 1)?;

    record_mut(ctx, name)?.add_birthday(birthday)?;
    Ok(Reply::message(format!("Birthday added for {}.", name)))
}

fn show_birthday(ctx: &mut Context<'_>, args: &[String]) -> CommandResult<Reply> {
    let name = arg(args, 0)?;
    let record = ctx.book.find(name).ok_or(BookError::ContactNotFound)?;

    match record.birthday() {
        Some(birthday) => Ok(Reply::message(format!("{}: {}", name, birthday))),
        None => Ok(Reply::message(format!("No birthday set for {}.", name))),
    }
}

fn birthdays(ctx: &mut Context<'_>, _args: &[String]) -> CommandResult<Reply> {
    let upcoming = ctx
        .book
        .upcoming_birthdays(ctx.clock.today(), ctx.config.upcoming_days);

    if upcoming.is_empty() {
        return Ok(Reply::message(format!(
            "No upcoming birthdays in the {}.",
            window_phrase(ctx.config.upcoming_days)
        )));
    }

    let mut lines = vec!["Upcoming birthdays:".to_string()];
    lines.extend(
        upcoming
            .iter()
            .map(|item| format!("{}: {}", item.name, item.formatted_date())),
    );
    Ok(Reply::message(lines.join("\n")))
}

fn hello(_ctx: &mut Context<'_>, _args: &[String]) -> CommandResult<Reply> {
    Ok(Reply::message(GREETING))
}

fn exit(_ctx: &mut Context<'_>, _args: &[String]) -> CommandResult<Reply> {
    Ok(Reply::Exit(GOODBYE_MESSAGE.to_string()))
}

fn help(ctx: &mut Context<'_>, _args: &[String]) -> CommandResult<Reply> {
    let width = ctx.config.help_column_width;

    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(
        ctx.registry
            .commands()
            .into_iter()
            .map(|command| format!("  {:<width$} {}", command.name, command.help)),
    );
    Ok(Reply::message(lines.join("\n")))
}
