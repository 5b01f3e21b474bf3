//! Translation store: the latest record per key
//!
//! Export and import use a JSON array of records. Import is all-or-nothing:
//! a document that fails to parse, or any entry missing a required field,
//! leaves the store untouched.

use std::collections::{HashMap, HashSet};

use crate::error::{TranslatorError, TranslatorResult};
use crate::model::TranslationRecord;
use tracing::{debug, error};

#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    records: HashMap<String, TranslationRecord>,
    imported: HashSet<String>,
}

impl TranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the record stored under `record.key`
    pub fn upsert(&mut self, record: TranslationRecord) -> Option<TranslationRecord> {
        self.imported.remove(&record.key);
        self.records.insert(record.key.clone(), record)
    }

    /// Whether the record under `key` came from the last import touching it
    pub fn is_imported(&self, key: &str) -> bool {
        self.imported.contains(key)
    }

    pub fn get(&self, key: &str) -> Option<&TranslationRecord> {
        self.records.get(key)
    }

    /// All records, in no particular order
    pub fn get_all(&self) -> Vec<&TranslationRecord> {
        self.records.values().collect()
    }

    /// Most recently updated records first
    pub fn recent(&self, limit: usize) -> Vec<&TranslationRecord> {
        let mut records = self.get_all();
        records.sort_by(|a, b| {
            b.last_updated
                .cmp(&a.last_updated)
                .then_with(|| a.key.cmp(&b.key))
        });
        records.truncate(limit);
        records
    }

    pub fn keys(&self) -> Vec<&str> {
        self.records.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.imported.clear();
    }

    /// Pretty-printed JSON array of every record, sorted by key
    pub fn export_all(&self) -> TranslatorResult<String> {
        let mut records = self.get_all();
        records.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(serde_json::to_string_pretty(&records)?)
    }

    /// Merge an exported document into the store, overwriting by key
    ///
    /// Every record is validated before any is stored. Returns the number of
    /// records imported.
    pub fn import_all(&mut self, json: &str) -> TranslatorResult<usize> {
        let records: Vec<TranslationRecord> = serde_json::from_str(json).map_err(|e| {
            error!(error = %e, "failed to import translations");
            TranslatorError::ImportParse(e.to_string())
        })?;

        if let Some(problem) = records.iter().find_map(|r| r.validate().err()) {
            error!(error = %problem, "rejected translation import");
            return Err(TranslatorError::ImportParse(problem));
        }

        let count = records.len();
        for record in records {
            let key = record.key.clone();
            self.upsert(record);
            self.imported.insert(key);
        }
        debug!(count, total = self.len(), "imported translations");
        Ok(count)
    }
}
