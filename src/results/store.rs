//! The results store.
//!
//! Holds the list of completed games while the results view is open, plus
//! the informer flag that tells the game view a result just landed. The
//! whole list lives under one storage key and is rewritten on every new
//! result.

use thiserror::Error;
use tracing::{debug, warn};

use super::record::{NewResult, ResultRecord};
use crate::core::clock::Clock;
use crate::storage::{KeyValueStorage, StorageError};

/// Failures while recording a result.
#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("results storage failed: {0}")]
    Storage(#[from] StorageError),

    #[error("could not encode results: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Completed-game records and informer visibility.
#[derive(Debug)]
pub struct ResultsStore<S: KeyValueStorage, C: Clock> {
    storage: S,
    clock: C,
    key: String,
    records: Option<Vec<ResultRecord>>,
    informer_visible: bool,
}

impl<S: KeyValueStorage, C: Clock> ResultsStore<S, C> {
    pub fn new(storage: S, clock: C, key: impl Into<String>) -> Self {
        Self {
            storage,
            clock,
            key: key.into(),
            records: None,
            informer_visible: false,
        }
    }

    /// Read the persisted list into memory.
    ///
    /// A missing key, unreadable storage or malformed text leaves the
    /// in-memory records as they were.
    pub fn load_results(&mut self) {
        match self.read_stored() {
            Ok(Some(records)) => {
                debug!(count = records.len(), "results loaded");
                self.records = Some(records);
            }
            Ok(None) => {}
            Err(err) => warn!(key = %self.key, error = %err, "could not read results"),
        }
    }

    /// Forget the in-memory list and hide the informer. Storage is untouched.
    pub fn unload_results(&mut self) {
        self.records = None;
        self.informer_visible = false;
    }

    /// Append a result and rewrite the stored list.
    ///
    /// If nothing is loaded yet, the stored list is read first so earlier
    /// results are kept. Malformed stored text starts a new list, but a
    /// failed read aborts before anything is written. The record stays in
    /// memory even if the write fails.
    pub fn record_new_result(&mut self, new: NewResult) -> Result<ResultRecord, ResultsError> {
        let record = new.into_record(self.clock.now_ms());

        if self.records.is_none() {
            self.records = Some(self.read_stored()?.unwrap_or_default());
        }
        self.informer_visible = true;
        let records = self.records.get_or_insert_with(Vec::new);
        records.push(record.clone());

        let text = serde_json::to_string(&*records)?;
        self.storage.set(&self.key, &text)?;

        debug!(id = %record.id, duration_ms = record.duration_ms, "result recorded");
        Ok(record)
    }

    pub fn dismiss_informer(&mut self) {
        self.informer_visible = false;
    }

    /// Stored list, or `None` if the key is missing or holds malformed text.
    fn read_stored(&self) -> Result<Option<Vec<ResultRecord>>, StorageError> {
        let Some(text) = self.storage.get(&self.key)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Option<Vec<ResultRecord>>>(&text) {
            Ok(records) => Ok(records),
            Err(err) => {
                warn!(key = %self.key, error = %err, "ignoring malformed results");
                Ok(None)
            }
        }
    }

    // === Queries ===

    /// Loaded records in completion order, or `None` if not loaded.
    #[must_use]
    pub fn records(&self) -> Option<&[ResultRecord]> {
        self.records.as_deref()
    }

    #[must_use]
    pub fn is_informer_visible(&self) -> bool {
        self.informer_visible
    }

    /// Fastest loaded result. Earliest wins a tie.
    #[must_use]
    pub fn best_result(&self) -> Option<&ResultRecord> {
        self.records
            .as_ref()?
            .iter()
            .reduce(|best, r| if r.duration_ms < best.duration_ms { r } else { best })
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::core::ids::ResultId;
    use crate::storage::InMemoryStorage;
    use std::cell::Cell;

    const KEY: &str = "card-game-results";

    /// In-memory storage whose next `failures` reads return an error.
    #[derive(Debug, Default)]
    struct FlakyStorage {
        inner: InMemoryStorage,
        failures: Cell<u32>,
    }

    impl KeyValueStorage for FlakyStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            if self.failures.get() > 0 {
                self.failures.set(self.failures.get() - 1);
                return Err(StorageError::Read {
                    key: key.to_string(),
                    source: std::io::Error::other("disk unavailable"),
                });
            }
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.inner.set(key, value)
        }
    }


    fn store() -> ResultsStore<InMemoryStorage, ManualClock> {
        ResultsStore::new(InMemoryStorage::new(), ManualClock::new(500), KEY)
    }

    #[test]
    fn test_load_missing_leaves_absent() {
        let mut store = store();
        store.load_results();
        assert!(store.records().is_none());
    }

    #[test]
    fn test_load_malformed_leaves_absent() {
        let mut storage = InMemoryStorage::new();
        storage.set(KEY, "{not json").unwrap();
        let mut store = ResultsStore::new(storage, ManualClock::new(0), KEY);

        store.load_results();
        assert!(store.records().is_none());
    }

    #[test]
    fn test_load_null_leaves_absent() {
        let mut storage = InMemoryStorage::new();
        storage.set(KEY, "null").unwrap();
        let mut store = ResultsStore::new(storage, ManualClock::new(0), KEY);

        store.load_results();
        assert!(store.records().is_none());
    }

    #[test]
    fn test_record_sets_informer_and_persists() {
        let mut store = store();
        let record = store
            .record_new_result(NewResult::new(3_000).with_id("r1"))
            .unwrap();

        assert_eq!(record.completed_at, 500);
        assert!(store.is_informer_visible());
        assert_eq!(store.records().unwrap(), &[record.clone()]);

        let stored: Vec<ResultRecord> =
            serde_json::from_str(store.storage().raw(KEY).unwrap()).unwrap();
        assert_eq!(stored, vec![record]);
    }

    #[test]
    fn test_record_keeps_earlier_stored_results() {
        let mut first = store();
        first.record_new_result(NewResult::new(1).with_id("a")).unwrap();

        let storage = first.storage().clone();
        let mut second = ResultsStore::new(storage, ManualClock::new(0), KEY);
        second.record_new_result(NewResult::new(2).with_id("b")).unwrap();

        let ids: Vec<_> = second.records().unwrap().iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![ResultId::from("a"), ResultId::from("b")]);
    }

    #[test]
    fn test_unload_and_dismiss() {
        let mut store = store();
        store.record_new_result(NewResult::new(1)).unwrap();

        store.dismiss_informer();
        assert!(!store.is_informer_visible());

        store.record_new_result(NewResult::new(2)).unwrap();
        store.unload_results();
        assert!(store.records().is_none());
        assert!(!store.is_informer_visible());

        // Storage survives unloading
        store.load_results();
        assert_eq!(store.records().unwrap().len(), 2);
    }

    #[test]
    fn test_best_result() {
        let mut store = store();
        assert!(store.best_result().is_none());

        store.record_new_result(NewResult::new(900).with_id("slow")).unwrap();
        store.record_new_result(NewResult::new(300).with_id("fast")).unwrap();
        store.record_new_result(NewResult::new(300).with_id("tie")).unwrap();

        assert_eq!(store.best_result().unwrap().id, ResultId::from("fast"));
    }

    #[test]
    fn test_read_failure_does_not_overwrite() {
        let mut storage = FlakyStorage::default();
        let stored = r#"[{"id":"a","completedAt":1,"durationMs":10},{"id":"b","completedAt":2,"durationMs":20}]"#;
        storage.inner.set(KEY, stored).unwrap();
        storage.failures.set(1);
        let mut store = ResultsStore::new(storage, ManualClock::new(0), KEY);

        let err = store.record_new_result(NewResult::new(9)).unwrap_err();
        assert!(matches!(err, ResultsError::Storage(StorageError::Read { .. })));
        assert_eq!(store.storage().inner.raw(KEY), Some(stored));
        assert!(store.records().is_none());
        assert!(!store.is_informer_visible());

        // Next attempt reads the earlier results and appends
        store.record_new_result(NewResult::new(9).with_id("c")).unwrap();
        let ids: Vec<_> = store.records().unwrap().iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![ResultId::from("a"), ResultId::from("b"), ResultId::from("c")]);
    }

    #[test]
    fn test_load_read_failure_leaves_absent() {
        let storage = FlakyStorage::default();
        storage.failures.set(1);
        let mut store = ResultsStore::new(storage, ManualClock::new(0), KEY);

        store.load_results();
        assert!(store.records().is_none());
    }
}
