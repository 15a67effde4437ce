//! Contact records and the address book that holds them.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday};
pub use record::Record;
