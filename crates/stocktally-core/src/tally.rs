//! # Tally Store
//!
//! The insertion-ordered mapping from scanned code to tally entry.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Tally Store Operations                              │
//! │                                                                         │
//! │  Operator Action          Store Call              State Change          │
//! │  ───────────────          ──────────              ────────────          │
//! │                                                                         │
//! │  Scan new code ──────────► record() ────────────► push entry, count=1  │
//! │                                                                         │
//! │  Scan same code ─────────► record() ────────────► count += 1           │
//! │                                                                         │
//! │  Blank scan ─────────────► record() ────────────► (no-op, None)        │
//! │                                                                         │
//! │  Clear action ───────────► clear() ─────────────► entries.clear()      │
//! │                                                                         │
//! │  Display / export ───────► snapshot() ──────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one entry per code; `count` equals the number of accepted
//!   scans of that code since the last clear.
//! - Entries keep first-scan order, so display and export are reproducible.
//! - A label, once set, is never overwritten (sticky-first-label).
//!
//! Entries live in a `Vec` and are located by a linear scan. The store
//! holds one entry per *distinct* product in a counting session, so the
//! scan is short, and the `Vec` gives insertion order without a second
//! index to keep in sync.

use serde::{Deserialize, Serialize};

use crate::types::TallyEntry;

/// The in-memory tally: code → entry, in first-scan order.
///
/// Process-lifetime only. Created empty, mutated by [`record`], reset by
/// [`clear`], never persisted.
///
/// [`record`]: TallyStore::record
/// [`clear`]: TallyStore::clear
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TallyStore {
    entries: Vec<TallyEntry>,
}

impl TallyStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        TallyStore {
            entries: Vec::new(),
        }
    }

    /// Records one accepted scan of `code`.
    ///
    /// ## Behavior
    /// - Blank or whitespace-only `code`: no-op, returns `None`. This is
    ///   the "ignore blank scan" policy, not an error.
    /// - New code: inserts an entry with `count = 1` and the given label.
    /// - Existing code: increments `count`; a supplied label fills an
    ///   absent one but never replaces a present one.
    ///
    /// ## Returns
    /// The entry after the update, or `None` when the scan was blank.
    pub fn record(&mut self, code: &str, label: Option<String>) -> Option<&TallyEntry> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }

        // Check if the code has been scanned before
        if let Some(entry) = self.entries.iter_mut().find(|e| e.code == code) {
            entry.count += 1;
            if entry.label.is_none() {
                if let Some(label) = label {
                    entry.label = Some(label);
                }
            }
            // Reborrow immutably for the return value
            return self.entries.iter().find(|e| e.code == code);
        }

        self.entries.push(TallyEntry::new(code, label));
        self.entries.last()
    }

    /// Empties the store unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Read-only view of all entries in first-scan order.
    pub fn snapshot(&self) -> &[TallyEntry] {
        &self.entries
    }

    /// Looks up a single entry by code.
    pub fn get(&self, code: &str) -> Option<&TallyEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    /// Number of distinct codes tallied.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been tallied since the last clear.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total units across all codes.
    pub fn total_units(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new_code() {
        let mut store = TallyStore::new();
        let entry = store.record("A123", None).unwrap();

        assert_eq!(entry.code, "A123");
        assert_eq!(entry.count, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_record_same_code_increments() {
        let mut store = TallyStore::new();
        for _ in 0..5 {
            store.record("A123", None);
        }

        assert_eq!(store.len(), 1); // Still one distinct code
        assert_eq!(store.get("A123").unwrap().count, 5);
        assert_eq!(store.total_units(), 5);
    }

    #[test]
    fn test_record_blank_is_noop() {
        let mut store = TallyStore::new();

        assert!(store.record("", None).is_none());
        assert!(store.record("   ", None).is_none());
        assert!(store.record("\t\n", None).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_record_trims_code() {
        let mut store = TallyStore::new();
        store.record("  A123  ", None);
        store.record("A123", None);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("A123").unwrap().count, 2);
    }

    #[test]
    fn test_record_keeps_first_label() {
        let mut store = TallyStore::new();
        store.record("A123", Some("Widget".to_string()));
        store.record("A123", Some("Renamed Widget".to_string()));

        // Sticky-first-label: the second resolution does not overwrite
        assert_eq!(store.get("A123").unwrap().label.as_deref(), Some("Widget"));
        assert_eq!(store.get("A123").unwrap().count, 2);
    }

    #[test]
    fn test_record_fills_absent_label() {
        let mut store = TallyStore::new();
        store.record("A123", None);
        store.record("A123", Some("Widget".to_string()));

        assert_eq!(store.get("A123").unwrap().label.as_deref(), Some("Widget"));
    }

    #[test]
    fn test_snapshot_keeps_insertion_order() {
        let mut store = TallyStore::new();
        store.record("C3", None);
        store.record("A1", None);
        store.record("B2", None);
        store.record("A1", None); // Re-scan must not reorder

        let codes: Vec<&str> = store.snapshot().iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["C3", "A1", "B2"]);

        // Stable across repeated calls with no intervening mutation
        let again: Vec<&str> = store.snapshot().iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, again);
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = TallyStore::new();
        store.record("A123", None);
        store.record("B456", None);
        assert!(!store.is_empty());

        store.clear();
        assert!(store.is_empty());
        assert!(store.snapshot().is_empty());
        assert_eq!(store.total_units(), 0);
    }

    #[test]
    fn test_scenario_two_codes() {
        // Scan "A123", "A123", "B456" → [{A123, 2}, {B456, 1}]; clear → []
        let mut store = TallyStore::new();
        store.record("A123", None);
        store.record("A123", None);
        store.record("B456", None);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].code, "A123");
        assert_eq!(snapshot[0].count, 2);
        assert_eq!(snapshot[1].code, "B456");
        assert_eq!(snapshot[1].count, 1);

        store.clear();
        assert!(store.snapshot().is_empty());
    }
}
