//! # State Module
//!
//! The application-state object owning the tally for the whole session.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      State Ownership                                    │
//! │                                                                         │
//! │  run() loop (single owner)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────┐                      │
//! │  │                 AppState                     │                      │
//! │  │                                              │                      │
//! │  │  store: TallyStore      ← THE tally          │                      │
//! │  │  handler: ScanHandler   ← plain / lookup     │                      │
//! │  └──────────────────────────────────────────────┘                      │
//! │       │                 │                                               │
//! │       │ &mut            │ &                                             │
//! │       ▼                 ▼                                               │
//! │  scan / clear      render / export                                     │
//! │                                                                         │
//! │  Events are serialized by the stdin loop, so no lock is needed:        │
//! │  one event runs to completion before the next is read.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stocktally_core::{ScanHandler, ScanOutcome, ScanResult, TallyStore};

/// Session state: the tally store plus the configured scan pipeline.
pub struct AppState {
    store: TallyStore,
    handler: ScanHandler,
}

impl AppState {
    /// Creates a fresh session around the given scan pipeline.
    pub fn new(handler: ScanHandler) -> Self {
        AppState {
            store: TallyStore::new(),
            handler,
        }
    }

    /// Read access to the tally, for rendering and export.
    pub fn store(&self) -> &TallyStore {
        &self.store
    }

    /// Whether scans go through a lookup backend.
    pub fn has_lookup(&self) -> bool {
        self.handler.has_lookup()
    }

    /// Drives one raw scan through the pipeline into the store.
    pub async fn scan(&mut self, raw_input: &str) -> ScanResult<ScanOutcome> {
        self.handler.handle_scan(&mut self.store, raw_input).await
    }

    /// Empties the tally.
    pub fn clear(&mut self) {
        self.store.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
