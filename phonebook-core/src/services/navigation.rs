//! Navigation and validation state machine behind the record form.
//!
//! The session is fully described by `(current_index, pending_new, store.len())`.
//! While `pending_new` is set the record being typed occupies the slot one past
//! the end of the store, so `current_index == store.len()`.

use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::services::validation::validate_record;
use crate::services::xml_codec::{parse_document, serialize_document};
use crate::store::RecordStore;
use crate::traits::Form;
use crate::types::{Action, DisplayState, LoadOutcome, Record};
use crate::utils::fs;

/// Title of the validation failure dialog
pub const VALIDATION_ERROR_TITLE: &str = "Invalid value";
/// Title of the load/save failure dialog
pub const SERIALIZATION_ERROR_TITLE: &str = "Phonebook serialization failure";
/// Title of the exit confirmation
pub const EXIT_TITLE: &str = "Exit";
/// Question asked before exiting
pub const EXIT_MESSAGE: &str = "Are you sure you want to exit?";

/// Mediates every user action between the form and the record store.
pub struct NavigationController<F: Form> {
    store: RecordStore,
    current_index: usize,
    pending_new: bool,
    /// Add/Save stay disabled until the first load
    session_open: bool,
    file_name: Option<String>,
    form: F,
}

impl<F: Form> NavigationController<F> {
    /// Create a controller around `form` and render the initial empty state.
    pub fn new(form: F) -> Self {
        let mut controller = Self {
            store: RecordStore::new(),
            current_index: 0,
            pending_new: false,
            session_open: false,
            file_name: None,
            form,
        };
        controller.refresh();
        controller
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_pending_new(&self) -> bool {
        self.pending_new
    }

    pub fn is_session_open(&self) -> bool {
        self.session_open
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Mutable access for the front end to feed keystrokes into the form.
    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    // ===== Actions =====

    /// Replace the phonebook with the document in `bytes`.
    ///
    /// A document that does not parse is not an error for the caller: the
    /// phonebook silently becomes empty and the form shows a one-time notice.
    pub fn load(&mut self, file_name: &str, bytes: &[u8]) -> LoadOutcome {
        let outcome = match parse_document(bytes) {
            Ok(records) => {
                let count = records.len();
                self.store.replace_all(records);
                log::info!("File {file_name} loaded with {count} records");
                LoadOutcome::Loaded(count)
            }
            Err(err) => self.recover_empty(file_name, &err),
        };
        self.finish_load(file_name);
        outcome
    }

    /// Read `path` and load it; an unreadable file follows the same recovery
    /// policy as a damaged one.
    pub fn load_file(&mut self, path: &Path) -> LoadOutcome {
        let file_name = fs::display_name(path);
        match fs::read_bytes(path) {
            Ok(bytes) => self.load(&file_name, &bytes),
            Err(err) => {
                let outcome = self.recover_empty(&file_name, &err);
                self.finish_load(&file_name);
                outcome
            }
        }
    }

    /// Commit the current record and serialize the whole phonebook.
    ///
    /// An explicitly empty phonebook is saved without looking at the fields.
    pub fn save(&mut self) -> CoreResult<Vec<u8>> {
        self.ensure_enabled(Action::Save)?;
        if !self.store.is_empty() || self.pending_new {
            self.commit_current()?;
        }

        let bytes = serialize_document(self.store.records()).inspect_err(|err| {
            log::error!("Failed to serialize phonebook: {err}");
            self.form.show_error(SERIALIZATION_ERROR_TITLE, &err.to_string());
        })?;
        self.refresh();
        Ok(bytes)
    }

    /// Persist a document produced by [`save`](Self::save) to `path`.
    ///
    /// On failure the error is shown and returned; the in-memory phonebook is
    /// left untouched.
    pub fn write_document(&mut self, path: &Path, bytes: &[u8]) -> CoreResult<()> {
        let file_name = fs::display_name(path);
        if let Err(err) = fs::write_bytes(path, bytes) {
            log::warn!("Failed to save {file_name}: {err}");
            self.form.show_error(
                SERIALIZATION_ERROR_TITLE,
                &format!("File {file_name} could not be saved: {err}"),
            );
            return Err(err);
        }

        log::info!("File {file_name} saved with {} records", self.store.len());
        self.file_name = Some(file_name);
        self.refresh();
        Ok(())
    }

    /// [`save`](Self::save) followed by [`write_document`](Self::write_document).
    pub fn save_to(&mut self, path: &Path) -> CoreResult<()> {
        let bytes = self.save()?;
        self.write_document(path, &bytes)
    }

    /// Start a new record one past the end of the phonebook.
    pub fn add(&mut self) -> CoreResult<()> {
        self.ensure_enabled(Action::Add)?;
        // 待提交的新记录被追加，已有记录的修改被原地写回
        if self.pending_new || !self.store.is_empty() {
            self.commit_current()?;
        }

        self.current_index = self.store.len();
        self.pending_new = true;
        self.refresh();
        Ok(())
    }

    /// Drop the pending record, or remove the shown record from the phonebook.
    pub fn delete(&mut self) -> CoreResult<()> {
        self.ensure_enabled(Action::Delete)?;
        if self.pending_new {
            self.pending_new = false;
        } else {
            let removed = self.store.remove_at(self.current_index)?;
            log::debug!("Deleted record {}", removed.name);
        }

        if self.current_index > 0 {
            self.current_index -= 1;
        }
        self.refresh();
        Ok(())
    }

    pub fn previous(&mut self) -> CoreResult<()> {
        self.ensure_enabled(Action::Previous)?;
        self.commit_current()?;
        self.current_index -= 1;
        self.refresh();
        Ok(())
    }

    /// Never available while a new record is pending: there is nothing past it.
    pub fn next(&mut self) -> CoreResult<()> {
        self.ensure_enabled(Action::Next)?;
        // 即使字段未变也会原地写回，写回是幂等的
        self.commit_current()?;
        self.current_index += 1;
        self.refresh();
        Ok(())
    }

    /// Ask for confirmation; `true` means the caller should terminate.
    pub fn exit(&mut self) -> bool {
        let confirmed = self.form.confirm(EXIT_TITLE, EXIT_MESSAGE);
        if confirmed {
            log::info!("Exit confirmed");
        }
        confirmed
    }

    // ===== State =====

    /// Whether the button for `action` is enabled in the current state.
    pub fn is_enabled(&self, action: Action) -> bool {
        let len = self.store.len();
        match action {
            Action::Load | Action::Exit => true,
            Action::Save | Action::Add => self.session_open,
            Action::Delete => len > 0 || self.pending_new,
            Action::Previous => self.current_index != 0,
            Action::Next => self.current_index + 1 < len,
        }
    }

    /// Everything the form should show right now.
    pub fn display_state(&self) -> DisplayState {
        let len = self.store.len();
        let (fields, editable) = match self.store.get(self.current_index) {
            Ok(record) => (record.clone(), true),
            Err(_) => (Record::default(), self.pending_new),
        };
        let position = if len == 0 && !self.pending_new {
            self.current_index
        } else {
            self.current_index + 1
        };
        let total = if self.pending_new { len + 1 } else { len };

        DisplayState {
            fields,
            editable,
            has_previous: self.is_enabled(Action::Previous),
            has_next: self.is_enabled(Action::Next),
            can_delete: self.is_enabled(Action::Delete),
            can_add: self.is_enabled(Action::Add),
            can_save: self.is_enabled(Action::Save),
            position,
            total,
            file_name: self.file_name.clone(),
        }
    }

    fn ensure_enabled(&self, action: Action) -> CoreResult<()> {
        if self.is_enabled(action) {
            Ok(())
        } else {
            Err(CoreError::ActionUnavailable(action))
        }
    }

    /// Validate the form fields and write them into the store: appended when a
    /// new record is pending, otherwise over the shown record.
    fn commit_current(&mut self) -> CoreResult<()> {
        let fields = self.form.read_fields();
        if let Err(field) = validate_record(&fields) {
            log::debug!("Rejected {} value {:?}", field.label(), fields.field(field));
            self.form.show_error(VALIDATION_ERROR_TITLE, field.message());
            return Err(CoreError::Validation { field });
        }

        if self.pending_new {
            self.store.insert_at(self.store.len(), fields)?;
            self.pending_new = false;
        } else {
            self.store.update(self.current_index, fields)?;
        }
        Ok(())
    }

    fn recover_empty(&mut self, file_name: &str, err: &CoreError) -> LoadOutcome {
        log::warn!("File {file_name} is damaged ({err}). Creating new Phonebook!");
        self.store.replace_all(Vec::new());
        self.form.show_error(
            SERIALIZATION_ERROR_TITLE,
            &format!("File {file_name} is damaged. Creating new Phonebook"),
        );
        LoadOutcome::Recovered(err.to_string())
    }

    fn finish_load(&mut self, file_name: &str) {
        self.current_index = 0;
        self.pending_new = false;
        self.session_open = true;
        self.file_name = Some(file_name.to_string());
        self.refresh();
    }

    fn refresh(&mut self) {
        let state = self.display_state();
        self.form.render(&state);
    }
}
