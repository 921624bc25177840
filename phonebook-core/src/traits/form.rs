//! Record form abstract Trait

use crate::types::{DisplayState, Record};

/// The single-record edit view driven by the `NavigationController`.
///
/// Platform implementation:
/// - TUI: `FormState` (ratatui text inputs + modal dialogs)
/// - Tests: recording mocks
pub trait Form {
    /// Current text of the three input fields, possibly mid-edit and invalid.
    fn read_fields(&self) -> Record;

    /// Show `state`: replace the field contents and update the editability,
    /// button states, "N of M" counter and file label.
    fn render(&mut self, state: &DisplayState);

    /// Blocking error notice.
    fn show_error(&mut self, title: &str, message: &str);

    /// Blocking yes/no question; `true` only for an explicit "yes".
    fn confirm(&mut self, title: &str, message: &str) -> bool;
}
