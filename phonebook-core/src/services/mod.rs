//! Service layer
//!
//! - `validation`: field pattern checks
//! - `xml_codec`: phonebook document parse / serialize
//! - `navigation`: the record form state machine

mod navigation;
pub mod validation;
mod xml_codec;

pub use navigation::{
    NavigationController, EXIT_MESSAGE, EXIT_TITLE, SERIALIZATION_ERROR_TITLE,
    VALIDATION_ERROR_TITLE,
};
pub use validation::{is_valid_name, is_valid_phone, is_valid_state, validate_record};
pub use xml_codec::{parse_document, serialize_document};
