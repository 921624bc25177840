//! Phonebook Core Library
//!
//! Provides the platform-independent part of the phonebook application:
//! - Record model and field validation
//! - `RecordStore`, the ordered in-memory phonebook
//! - XML persistence (parse / serialize a whole document)
//! - `NavigationController`, the state machine behind the single-record form
//!
//! The user interface is abstracted through the [`Form`] trait, so the same
//! controller drives the terminal front end and the tests.

pub mod error;
pub mod services;
pub mod store;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{parse_document, serialize_document, NavigationController};
pub use store::RecordStore;
pub use traits::Form;
pub use types::{Action, DisplayState, LoadOutcome, Record, RecordField};
