//! Behavior of each command as seen through the assistant.

mod fixtures;

use contact_assistant::Reply;
use fixtures::*;

#[test]
fn test_add_then_phone() {
    let mut assistant = assistant_on(monday());
    assert_eq!(assistant.handle_line("add John 1234567890").text(), "Contact added.");
    assert_eq!(assistant.handle_line("phone John").text(), "John: 1234567890");
}

#[test]
fn test_add_twice_updates_same_record() {
    let mut assistant = assistant_on(monday());
    assistant.handle_line("add John 1234567890");
    assert_eq!(
        assistant.handle_line("add John 5555555555").text(),
        "Contact updated."
    );

    assert_eq!(assistant.book().len(), 1);
    assert_eq!(
        assistant.handle_line("phone John").text(),
        "John: 1234567890; 5555555555"
    );
}

#[test]
fn test_add_invalid_phone_shows_usage() {
    let mut assistant = assistant_on(monday());
    assert_eq!(
        assistant.handle_line("add John 12345").text(),
        "add: Add new contact or phone to existing contact\n\
         Usage: add <name> <phone>\n\
         Invalid fields: phone"
    );
    assert!(assistant.book().is_empty());
}

#[test]
fn test_add_missing_arguments_shows_usage() {
    let mut assistant = assistant_on(monday());
    let reply = assistant.handle_line("add");
    assert!(reply.text().ends_with("Invalid fields: name phone"));
}

#[test]
fn test_change_missing_contact() {
    let mut assistant = assistant_on(monday());
    assert_eq!(
        assistant.handle_line("change John 1234567890 0987654321").text(),
        "Contact not found."
    );
}

#[test]
fn test_change_unknown_phone() {
    let mut assistant = assistant_on(monday());
    assistant.handle_line("add John 1234567890");
    assert_eq!(
        assistant.handle_line("change John 1111111111 0987654321").text(),
        "Phone 1111111111 not found for contact John."
    );
}

#[test]
fn test_change_replaces_exactly_once() {
    let mut assistant = assistant_on(monday());
    let last = run_lines(
        &mut assistant,
        &[
            "add John 1234567890",
            "add John 1234567890",
            "change John 1234567890 0987654321",
        ],
    );
    assert_eq!(last, "Contact updated.");
    assert_eq!(
        assistant.handle_line("phone John").text(),
        "John: 0987654321; 1234567890"
    );
}

#[test]
fn test_phone_messages() {
    let mut assistant = assistant_on(monday());
    assert_eq!(assistant.handle_line("phone John").text(), "Contact not found.");

    run_lines(&mut assistant, &["add John 1234567890", "remove-phone John 1234567890"]);
    assert_eq!(
        assistant.handle_line("phone John").text(),
        "No phones for contact John."
    );
}

#[test]
fn test_all_empty_and_single() {
    let mut assistant = assistant_on(monday());
    assert_eq!(assistant.handle_line("all").text(), "No contacts saved.");

    assistant.handle_line("add John 1234567890");
    assert_eq!(
        assistant.handle_line("all").text(),
        "Contact name: John, phones: 1234567890"
    );
}

#[test]
fn test_all_lists_in_insertion_order_with_birthdays() {
    let mut assistant = assistant_on(monday());
    let last = run_lines(
        &mut assistant,
        &[
            "add Zoe 1111111111",
            "add Adam 2222222222",
            "add-birthday Adam 01.01.1990",
            "all",
        ],
    );
    assert_eq!(
        last,
        "Contact name: Zoe, phones: 1111111111\n\
         Contact name: Adam, phones: 2222222222, birthday: 01.01.1990"
    );
}

#[test]
fn test_all_rejects_arguments() {
    let mut assistant = assistant_on(monday());
    assert_eq!(assistant.handle_line("all please").text(), "Usage: all");
}

#[test]
fn test_birthday_commands() {
    let mut assistant = assistant_on(monday());
    assert_eq!(
        assistant.handle_line("add-birthday John 12.06.1990").text(),
        "Contact not found."
    );

    assistant.handle_line("add John 1234567890");
    assert_eq!(
        assistant.handle_line("show-birthday John").text(),
        "No birthday set for John."
    );
    assert_eq!(
        assistant.handle_line("add-birthday John 12.06.1990").text(),
        "Birthday added for John."
    );
    assert_eq!(
        assistant.handle_line("show-birthday John").text(),
        "John: 12.06.1990"
    );
    assert_eq!(
        assistant.handle_line("show-birthday Jane").text(),
        "Contact not found."
    );
}

#[test]
fn test_add_birthday_invalid_date_shows_usage() {
    let mut assistant = assistant_on(monday());
    assistant.handle_line("add John 1234567890");
    assert_eq!(
        assistant.handle_line("add-birthday John 30.02.2024").text(),
        "add-birthday: Add birthday to contact (format: DD.MM.YYYY)\n\
         Usage: add-birthday <name> <birthday>\n\
         Invalid fields: birthday"
    );
}

#[test]
fn test_delete_contact() {
    let mut assistant = assistant_on(monday());
    assistant.handle_line("add John 1234567890");
    assert_eq!(assistant.handle_line("delete John").text(), "Contact deleted.");
    assert_eq!(assistant.handle_line("delete John").text(), "Contact not found.");
    assert_eq!(assistant.handle_line("all").text(), "No contacts saved.");
}

#[test]
fn test_remove_phone_unknown() {
    let mut assistant = assistant_on(monday());
    assistant.handle_line("add John 1234567890");
    assert_eq!(
        assistant.handle_line("remove-phone John 0000000000").text(),
        "Phone 0000000000 not found for contact John."
    );
}

#[test]
fn test_hello_and_exit() {
    let mut assistant = assistant_on(monday());
    assert_eq!(
        assistant.handle_line("hello"),
        Reply::Message("How can I help you?".to_string())
    );
    assert_eq!(assistant.handle_line("exit"), Reply::Exit("Good bye!".to_string()));
    assert_eq!(assistant.handle_line("close"), Reply::Exit("Good bye!".to_string()));
    assert_eq!(assistant.handle_line("close now").text(), "Usage: close");
}

#[test]
fn test_help_lists_each_command_once_sorted() {
    let mut assistant = assistant_on(monday());
    let help = assistant.handle_line("help").text().to_string();

    let mut lines = help.lines();
    assert_eq!(lines.next(), Some("Available commands:"));

    let names: Vec<&str> = lines
        .map(|line| line.split_whitespace().next().unwrap())
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(names, sorted);
    assert_eq!(names.len(), assistant.registry().len());
}

#[test]
fn test_help_pads_names() {
    let mut assistant = assistant_on(monday());
    let help = assistant.handle_line("help").text().to_string();
    assert!(help.contains(&format!("  {:<20} {}", "add-birthday", "Add birthday to contact (format: DD.MM.YYYY)")));
    assert!(help.contains("  hello                Greet the bot"));
}
