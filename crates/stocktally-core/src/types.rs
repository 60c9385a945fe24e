//! # Domain Types
//!
//! Core domain types used throughout Stock Tally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                │
//! │  │     TallyEntry      │        │     ScanOutcome     │                │
//! │  │  ─────────────────  │        │  ─────────────────  │                │
//! │  │  code   (key)       │        │  Ignored            │                │
//! │  │  label  (optional)  │        │  Recorded(entry)    │                │
//! │  │  count  (≥ 1)       │        └─────────────────────┘                │
//! │  │  first_seen         │                                               │
//! │  └─────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The scanned code is the business key; there is no synthetic ID. One
//! entry exists per distinct code, and its `count` is the number of
//! accepted scans since the last clear.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Tally Entry
// =============================================================================

/// One tallied barcode: the running count plus the optionally resolved name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    /// The scanned identifier, already trimmed. Unique within a store.
    pub code: String,

    /// Resolved product name; absent until a lookup succeeds for this code.
    /// Sticky: once set it is never overwritten by a later lookup.
    pub label: Option<String>,

    /// Number of accepted scans of this code since the last clear.
    /// Starts at 1 on first insertion.
    pub count: u64,

    /// When this code was first scanned. Display only; never exported.
    pub first_seen: DateTime<Utc>,
}

impl TallyEntry {
    /// Creates the entry for a code's first accepted scan.
    pub fn new(code: impl Into<String>, label: Option<String>) -> Self {
        TallyEntry {
            code: code.into(),
            label,
            count: 1,
            first_seen: Utc::now(),
        }
    }

    /// Whether a product name has been resolved for this code.
    #[inline]
    pub fn is_labelled(&self) -> bool {
        self.label.is_some()
    }
}

// =============================================================================
// Scan Outcome
// =============================================================================

/// What happened to a single scan that did not error.
///
/// Blank input is *ignored*, not recorded and not an error, so callers and
/// tests can tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The input was empty or whitespace-only; the store is untouched.
    Ignored,
    /// The scan was tallied; the entry is the post-update state.
    Recorded(TallyEntry),
}

impl ScanOutcome {
    /// Whether this scan changed the store.
    #[inline]
    pub fn is_recorded(&self) -> bool {
        matches!(self, ScanOutcome::Recorded(_))
    }

    /// The recorded entry, if any.
    pub fn entry(&self) -> Option<&TallyEntry> {
        match self {
            ScanOutcome::Recorded(entry) => Some(entry),
            ScanOutcome::Ignored => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_starts_at_one() {
        let entry = TallyEntry::new("A123", None);
        assert_eq!(entry.count, 1);
        assert!(!entry.is_labelled());
    }

    #[test]
    fn test_labelled_entry() {
        let entry = TallyEntry::new("A123", Some("Widget".to_string()));
        assert!(entry.is_labelled());
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(!ScanOutcome::Ignored.is_recorded());
        assert!(ScanOutcome::Ignored.entry().is_none());

        let outcome = ScanOutcome::Recorded(TallyEntry::new("A123", None));
        assert!(outcome.is_recorded());
        assert_eq!(outcome.entry().map(|e| e.code.as_str()), Some("A123"));
    }
}
