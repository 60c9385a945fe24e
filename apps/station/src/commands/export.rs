//! # Export Commands
//!
//! Project the tally once, hand the rows to a writer, report the path.
//!
//! Both commands write to fixed filenames in the working directory. A
//! failed write leaves the tally untouched; the operator fixes the
//! destination and exports again.

use std::path::PathBuf;

use tracing::debug;

use crate::state::AppState;
use stocktally_core::export::to_rows;
use stocktally_export::{
    write_document, write_tabular, ExportError, DOCUMENT_FILENAME, SPREADSHEET_FILENAME,
};

/// Writes the spreadsheet artifact; returns the path written.
pub fn export_spreadsheet(state: &AppState) -> Result<PathBuf, ExportError> {
    let rows = to_rows(state.store());
    debug!(rows = rows.len(), "export spreadsheet command");

    let destination = PathBuf::from(SPREADSHEET_FILENAME);
    write_tabular(&rows, &destination)?;
    Ok(destination)
}

/// Writes the document artifact; returns the path written.
pub fn export_document(state: &AppState) -> Result<PathBuf, ExportError> {
    let rows = to_rows(state.store());
    debug!(rows = rows.len(), "export document command");

    let destination = PathBuf::from(DOCUMENT_FILENAME);
    write_document(&rows, &destination)?;
    Ok(destination)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stocktally_core::ScanHandler;

    #[tokio::test]
    async fn test_exports_write_fixed_filenames() {
        // The working directory is process-global; point it at a sandbox
        let dir = tempfile::tempdir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        let mut state = AppState::new(ScanHandler::plain());
        state.scan("A123").await.unwrap();
        state.scan("A123").await.unwrap();
        state.scan("B456").await.unwrap();

        let xlsx = export_spreadsheet(&state).unwrap();
        let pdf = export_document(&state).unwrap();

        assert_eq!(xlsx, PathBuf::from(SPREADSHEET_FILENAME));
        assert_eq!(pdf, PathBuf::from(DOCUMENT_FILENAME));
        assert!(dir.path().join(SPREADSHEET_FILENAME).exists());
        assert!(dir.path().join(DOCUMENT_FILENAME).exists());

        // A failed export must not clear the tally either way
        assert_eq!(state.store().len(), 2);
    }
}
