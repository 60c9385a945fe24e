//! # Scan Pipeline
//!
//! Turns one raw scanned string into at most one tally update.
//!
//! ## Scan Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        handle_scan Flow                                 │
//! │                                                                         │
//! │  raw input "  8412345678905\n"                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  trim ──► empty? ──► Ok(Ignored)                 (store untouched)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lookup configured?                                                     │
//! │       │                                                                 │
//! │       ├── no ────────────────────────────► record(code, None)          │
//! │       │                                                                 │
//! │       └── yes ──► resolve(code)                                        │
//! │                      │                                                  │
//! │                      ├── Err(Unavailable) ──► Err(LookupFailed)        │
//! │                      │                          (store untouched)      │
//! │                      ├── Ok(None) ──────────► Err(CodeNotFound)        │
//! │                      │                          (store untouched)      │
//! │                      └── Ok(Some(name)) ────► record(code, Some(name)) │
//! │                                                                         │
//! │  record ──────────────────────────────────► Ok(Recorded(entry))        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The resolve happens *before* the record, so a failed lookup leaves the
//! store exactly as it was: a scan is never partially applied.

use std::sync::Arc;

use crate::error::{InputError, ScanResult};
use crate::lookup::LookupPort;
use crate::tally::TallyStore;
use crate::types::ScanOutcome;

/// Drives scans through normalization, lookup, and the tally store.
///
/// Two modes, fixed at construction:
/// - **plain**: no lookup port; every non-blank scan is recorded with no
///   label (tally-only counting)
/// - **with lookup**: codes the backend does not know are warned about and
///   NOT tallied
pub struct ScanHandler {
    lookup: Option<Arc<dyn LookupPort>>,
}

impl ScanHandler {
    /// Plain tally mode: every non-blank scan is recorded unconditionally.
    pub fn plain() -> Self {
        ScanHandler { lookup: None }
    }

    /// Lookup mode: scans are tallied only when the code resolves.
    pub fn with_lookup(lookup: Arc<dyn LookupPort>) -> Self {
        ScanHandler {
            lookup: Some(lookup),
        }
    }

    /// Whether a lookup port is configured.
    pub fn has_lookup(&self) -> bool {
        self.lookup.is_some()
    }

    /// Handles one raw scan.
    ///
    /// ## Returns
    /// * `Ok(ScanOutcome::Ignored)` - blank input, store untouched
    /// * `Ok(ScanOutcome::Recorded(entry))` - tallied; `entry` is the
    ///   post-update state for this code
    /// * `Err(InputError::LookupFailed)` - backend unreachable, not tallied
    /// * `Err(InputError::CodeNotFound)` - code unknown, not tallied
    pub async fn handle_scan(
        &self,
        store: &mut TallyStore,
        raw_input: &str,
    ) -> ScanResult<ScanOutcome> {
        let code = raw_input.trim();
        if code.is_empty() {
            return Ok(ScanOutcome::Ignored);
        }

        let label = match &self.lookup {
            None => None,
            Some(port) => match port.resolve(code).await? {
                Some(name) => Some(name),
                None => {
                    return Err(InputError::CodeNotFound {
                        code: code.to_string(),
                    })
                }
            },
        };

        match store.record(code, label) {
            Some(entry) => Ok(ScanOutcome::Recorded(entry.clone())),
            // record() re-trims; code is already non-blank here, so this
            // arm is unreachable, but blank-as-ignored stays the contract.
            None => Ok(ScanOutcome::Ignored),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::MemoryLookup;

    #[tokio::test]
    async fn test_plain_mode_records_every_scan() {
        let handler = ScanHandler::plain();
        let mut store = TallyStore::new();

        // For all N: count after N scans equals N
        for expected in 1..=4u64 {
            let outcome = handler.handle_scan(&mut store, "A123").await.unwrap();
            assert_eq!(outcome.entry().unwrap().count, expected);
        }
        assert!(store.get("A123").unwrap().label.is_none());
    }

    #[tokio::test]
    async fn test_blank_scan_is_ignored() {
        let handler = ScanHandler::plain();
        let mut store = TallyStore::new();

        let outcome = handler.handle_scan(&mut store, "   \t").await.unwrap();
        assert_eq!(outcome, ScanOutcome::Ignored);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_scan_trims_whitespace() {
        let handler = ScanHandler::plain();
        let mut store = TallyStore::new();

        handler.handle_scan(&mut store, "  A123 \n").await.unwrap();
        assert_eq!(store.get("A123").unwrap().count, 1);
    }

    #[tokio::test]
    async fn test_resolved_code_is_tallied_with_label() {
        let lookup = MemoryLookup::new().with_entry("A123", "Widget");
        let handler = ScanHandler::with_lookup(Arc::new(lookup));
        let mut store = TallyStore::new();

        let outcome = handler.handle_scan(&mut store, "A123").await.unwrap();
        let entry = outcome.entry().unwrap();
        assert_eq!(entry.label.as_deref(), Some("Widget"));
        assert_eq!(entry.count, 1);
    }

    #[tokio::test]
    async fn test_unknown_code_is_not_tallied() {
        let lookup = MemoryLookup::new().with_entry("A123", "Widget");
        let handler = ScanHandler::with_lookup(Arc::new(lookup));
        let mut store = TallyStore::new();

        // Scenario: scan "A123" then "Z999"
        handler.handle_scan(&mut store, "A123").await.unwrap();
        let err = handler.handle_scan(&mut store, "Z999").await.unwrap_err();

        assert!(matches!(err, InputError::CodeNotFound { ref code } if code == "Z999"));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].code, "A123");
        assert_eq!(snapshot[0].label.as_deref(), Some("Widget"));
        assert_eq!(snapshot[0].count, 1);
    }

    #[tokio::test]
    async fn test_unavailable_lookup_rejects_scan() {
        let handler = ScanHandler::with_lookup(Arc::new(MemoryLookup::unavailable()));
        let mut store = TallyStore::new();

        let err = handler.handle_scan(&mut store, "A123").await.unwrap_err();
        assert!(matches!(err, InputError::LookupFailed(_)));

        // The rejected scan must not be partially applied
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_failed_lookup_does_not_touch_existing_count() {
        let mut store = TallyStore::new();

        let ok = ScanHandler::with_lookup(Arc::new(
            MemoryLookup::new().with_entry("A123", "Widget"),
        ));
        ok.handle_scan(&mut store, "A123").await.unwrap();

        let down = ScanHandler::with_lookup(Arc::new(MemoryLookup::unavailable()));
        down.handle_scan(&mut store, "A123").await.unwrap_err();

        assert_eq!(store.get("A123").unwrap().count, 1);
    }
}
