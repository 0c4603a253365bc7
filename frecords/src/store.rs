//! Record storage contract and the in-memory implementation.
//!
//! ```rust
//! use fcommon::FormType;
//! use frecords::{FieldValues, InMemoryRecordStore, Record, RecordStore};
//!
//! let store = InMemoryRecordStore::new();
//! let record = Record::create(FormType::user_info(), FieldValues::new().with("name", "Ada"));
//! let id = record.id.clone();
//!
//! store.insert(record).expect("fresh id");
//! assert!(store.delete(&id).expect("delete"));
//! assert!(!store.delete(&id).expect("second delete is a no-op"));
//! ```

use std::sync::Mutex;

use fcommon::RecordId;

use crate::{FieldValues, Record, RecordError, RecordGroup, group_by_form_type};

pub trait RecordStore: Send + Sync {
    /// Appends a record. Its id must not already be held.
    fn insert(&self, record: Record) -> Result<(), RecordError>;

    /// Replaces the values of an existing record, keeping its id and form type.
    ///
    /// Returns `Ok(false)` when no record carries `id`; nothing is created.
    fn update(&self, id: &RecordId, values: FieldValues) -> Result<bool, RecordError>;

    /// Removes a record. Returns `Ok(false)` when it was already gone.
    fn delete(&self, id: &RecordId) -> Result<bool, RecordError>;

    fn get(&self, id: &RecordId) -> Result<Option<Record>, RecordError>;

    /// All records in insertion order.
    fn list(&self) -> Result<Vec<Record>, RecordError>;

    fn list_grouped_by_type(&self) -> Result<Vec<RecordGroup>, RecordError> {
        Ok(group_by_form_type(self.list()?))
    }

    fn len(&self) -> Result<usize, RecordError> {
        Ok(self.list()?.len())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: Mutex<Vec<Record>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Record>>, RecordError> {
        self.records
            .lock()
            .map_err(|_| RecordError::storage("record store lock poisoned"))
    }
}

impl RecordStore for InMemoryRecordStore {
    fn insert(&self, record: Record) -> Result<(), RecordError> {
        let mut records = self.lock()?;
        if records.iter().any(|existing| existing.id == record.id) {
            return Err(RecordError::conflict(format!(
                "record '{}' already exists",
                record.id
            )));
        }

        records.push(record);
        Ok(())
    }

    fn update(&self, id: &RecordId, values: FieldValues) -> Result<bool, RecordError> {
        let mut records = self.lock()?;
        match records.iter_mut().find(|record| &record.id == id) {
            Some(record) => {
                record.values = values;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, id: &RecordId) -> Result<bool, RecordError> {
        let mut records = self.lock()?;
        let before = records.len();
        records.retain(|record| &record.id != id);
        Ok(records.len() != before)
    }

    fn get(&self, id: &RecordId) -> Result<Option<Record>, RecordError> {
        let records = self.lock()?;
        Ok(records.iter().find(|record| &record.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Record>, RecordError> {
        Ok(self.lock()?.clone())
    }

    fn len(&self) -> Result<usize, RecordError> {
        Ok(self.lock()?.len())
    }
}
