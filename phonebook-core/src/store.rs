//! Ordered in-memory phonebook

use crate::error::{CoreError, CoreResult};
use crate::types::Record;

/// The phonebook: an ordered, index-addressable list of records.
///
/// Only the operations below mutate the list; no live mutable handle is ever
/// handed out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current contents and install `records` as-is.
    pub fn replace_all(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> CoreResult<&Record> {
        self.records.get(index).ok_or(CoreError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    /// Insert at `index`; `index == len()` appends.
    pub fn insert_at(&mut self, index: usize, record: Record) -> CoreResult<()> {
        if index > self.records.len() {
            return Err(self.out_of_range(index));
        }
        self.records.insert(index, record);
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> CoreResult<Record> {
        if index >= self.records.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.records.remove(index))
    }

    /// Overwrite the record at `index` in place.
    pub fn update(&mut self, index: usize, record: Record) -> CoreResult<()> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(CoreError::IndexOutOfRange { index, len })?;
        *slot = record;
        Ok(())
    }

    /// Read-only view of all records, in display order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    fn out_of_range(&self, index: usize) -> CoreError {
        CoreError::IndexOutOfRange {
            index,
            len: self.records.len(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(name, "New York", "(212) 555 - 1234")
    }

    #[test]
    fn append_and_get_preserve_order() {
        let mut store = RecordStore::new();
        store.insert_at(0, record("Alice")).unwrap();
        store.insert_at(1, record("Bob")).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().name, "Alice");
        assert_eq!(store.get(1).unwrap().name, "Bob");
    }

    #[test]
    fn insert_past_end_is_out_of_range() {
        let mut store = RecordStore::new();
        let err = store.insert_at(1, record("Alice")).unwrap_err();
        assert_eq!(err, CoreError::IndexOutOfRange { index: 1, len: 0 });
        assert!(store.is_empty());
    }

    #[test]
    fn get_remove_update_reject_bad_index() {
        let mut store = RecordStore::new();
        store.replace_all(vec![record("Alice")]);

        assert!(matches!(
            store.get(1),
            Err(CoreError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(store.remove_at(1).is_err());
        assert!(store.update(5, record("Bob")).is_err());
        assert_eq!(store.records(), &[record("Alice")]);
    }

    #[test]
    fn update_overwrites_in_place() {
        let mut store = RecordStore::new();
        store.replace_all(vec![record("Alice"), record("Bob")]);
        store.update(1, record("Carol")).unwrap();

        let names: Vec<&str> = store.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Carol"]);
    }

    #[test]
    fn replace_all_discards_previous_contents() {
        let mut store = RecordStore::new();
        store.replace_all(vec![record("Alice"), record("Bob")]);
        store.replace_all(Vec::new());
        assert!(store.is_empty());
    }

    #[test]
    fn remove_returns_removed_record() {
        let mut store = RecordStore::new();
        store.replace_all(vec![record("Alice"), record("Bob")]);
        let removed = store.remove_at(0).unwrap();
        assert_eq!(removed.name, "Alice");
        assert_eq!(store.get(0).unwrap().name, "Bob");
    }
}
