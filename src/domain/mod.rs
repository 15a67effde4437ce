//! Domain value objects.
//!
//! Type-safe wrappers for the fields of a contact. Each one validates its
//! input at construction time and also exposes the check as a plain
//! `fn(&str) -> bool` so command arguments can be screened before dispatch.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
