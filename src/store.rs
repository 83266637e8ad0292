//! Extension store: the ordered, in-memory list of all records.

use std::collections::HashSet;

use crate::error::{ExtmanError, ExtmanResult};
use crate::extension::{ExtensionId, ExtensionRecord};
use crate::filter::FilterCounts;
use crate::seed;

/// Owns every extension record. Ids are unique; the list only shrinks.
#[derive(Debug, Clone, Default)]
pub struct ExtensionStore {
    records: Vec<ExtensionRecord>,
}

impl ExtensionStore {
    /// Build a store from an arbitrary record list.
    pub fn new(records: Vec<ExtensionRecord>) -> ExtmanResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(ExtmanError::DuplicateId(record.id));
            }
        }
        Ok(Self { records })
    }

    /// Store seeded with the built-in extension list.
    pub fn seeded() -> Self {
        Self {
            records: seed::records(),
        }
    }

    pub fn records(&self) -> &[ExtensionRecord] {
        &self.records
    }

    pub fn get(&self, id: ExtensionId) -> Option<&ExtensionRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn counts(&self) -> FilterCounts {
        FilterCounts::of(&self.records)
    }

    /// Flip `is_active` on the record with `id`.
    /// Returns false (and changes nothing) if no such record exists.
    pub fn toggle(&mut self, id: ExtensionId) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.is_active = !record.is_active;
                true
            }
            None => false,
        }
    }

    /// Delete the record with `id`.
    /// Returns false (and changes nothing) if no such record exists.
    pub fn remove(&mut self, id: ExtensionId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two() -> ExtensionStore {
        ExtensionStore::new(vec![
            ExtensionRecord::new(1, "one", "", "", true),
            ExtensionRecord::new(2, "two", "", "", false),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = ExtensionStore::new(vec![
            ExtensionRecord::new(1, "one", "", "", true),
            ExtensionRecord::new(1, "again", "", "", false),
        ]);
        assert!(matches!(result, Err(ExtmanError::DuplicateId(ExtensionId(1)))));
    }

    #[test]
    fn test_seeded() {
        let store = ExtensionStore::seeded();
        assert_eq!(store.len(), 12);
        assert_eq!(store.get(ExtensionId(1)).unwrap().name, "DevLens");
    }

    #[test]
    fn test_toggle_involution() {
        let mut store = two();
        assert!(store.toggle(ExtensionId(2)));
        assert!(store.get(ExtensionId(2)).unwrap().is_active);
        assert!(store.toggle(ExtensionId(2)));
        assert!(!store.get(ExtensionId(2)).unwrap().is_active);
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut store = two();
        let before = store.records().to_vec();
        assert!(!store.toggle(ExtensionId(99)));
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_remove_idempotent() {
        let mut once = two();
        once.remove(ExtensionId(1));

        let mut twice = two();
        assert!(twice.remove(ExtensionId(1)));
        assert!(!twice.remove(ExtensionId(1)));

        assert_eq!(once.records(), twice.records());
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut store = ExtensionStore::seeded();
        store.remove(ExtensionId(2));
        let ids: Vec<u32> = store.records().iter().take(3).map(|r| r.id.0).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_counts_follow_mutations() {
        let mut store = two();
        assert_eq!(store.counts().active, 1);
        store.toggle(ExtensionId(2));
        assert_eq!(store.counts().active, 2);
        store.remove(ExtensionId(1));
        assert_eq!(store.counts().all, 1);
    }
}
