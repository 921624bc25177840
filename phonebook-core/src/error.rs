//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::{Action, RecordField};

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A form field failed its pattern check
    #[error("Validation error: {}", field.message())]
    Validation { field: RecordField },

    /// The phonebook document could not be read or parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Reading or writing the phonebook file failed
    #[error("IO error: {0}")]
    Io(String),

    /// The XML writer failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Index outside the record store (internal bookkeeping fault)
    #[error("Index {index} out of range for {len} records")]
    IndexOutOfRange { index: usize, len: usize },

    /// The action is currently disabled in the form
    #[error("Action not available: {0:?}")]
    ActionUnavailable(Action),
}

impl CoreError {
    /// Whether it is expected behavior (user input, damaged file, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation { .. }
            | Self::Parse(_)
            | Self::Io(_)
            | Self::ActionUnavailable(_) => true,
            Self::Serialization(_) | Self::IndexOutOfRange { .. } => false,
        }
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
