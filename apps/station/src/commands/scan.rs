//! # Scan and Clear Commands
//!
//! Thin wrappers over the state object; all policy lives in the core.

use tracing::{debug, info};

use crate::state::AppState;
use stocktally_core::{ScanOutcome, ScanResult};

/// Handles one scanned line.
///
/// ## Returns
/// The pipeline outcome verbatim; the loop decides how to present it.
/// Rejected scans (`LookupFailed`, `CodeNotFound`) come back as errors and
/// have NOT changed the tally.
pub async fn scan(state: &mut AppState, raw_input: &str) -> ScanResult<ScanOutcome> {
    debug!(raw = %raw_input.trim(), "scan command");

    let outcome = state.scan(raw_input).await?;
    if let Some(entry) = outcome.entry() {
        info!(code = %entry.code, count = entry.count, "Scan tallied");
    }
    Ok(outcome)
}

/// Empties the tally unconditionally.
pub fn clear(state: &mut AppState) {
    let dropped = state.store().len();
    state.clear();
    info!(dropped, "Tally cleared");
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use stocktally_core::{InputError, MemoryLookup, ScanHandler};

    #[tokio::test]
    async fn test_scan_then_clear() {
        let mut state = AppState::new(ScanHandler::plain());

        let outcome = scan(&mut state, "A123").await.unwrap();
        assert!(outcome.is_recorded());

        clear(&mut state);
        assert!(state.store().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_scan_surfaces_and_leaves_tally_alone() {
        let lookup = MemoryLookup::new().with_entry("A123", "Widget");
        let mut state = AppState::new(ScanHandler::with_lookup(Arc::new(lookup)));

        scan(&mut state, "A123").await.unwrap();
        let err = scan(&mut state, "Z999").await.unwrap_err();

        assert!(matches!(err, InputError::CodeNotFound { .. }));
        assert_eq!(state.store().len(), 1);
    }
}
