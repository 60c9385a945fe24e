//! # Export Error Types
//!
//! One failure mode: the destination could not be written.

use std::fmt::Display;
use std::path::Path;

use thiserror::Error;

/// Export operation errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination could not be written.
    ///
    /// ## When This Occurs
    /// - Destination directory missing or not writable
    /// - File locked by a spreadsheet/PDF viewer
    /// - Disk full
    ///
    /// The tally store is untouched by a failed export; the operator can
    /// fix the destination and export again.
    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: String, reason: String },
}

impl ExportError {
    /// Creates a WriteFailed for a destination and underlying cause.
    pub fn write_failed(path: &Path, reason: impl Display) -> Self {
        ExportError::WriteFailed {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_the_destination() {
        let err = ExportError::write_failed(Path::new("stock_tally.xlsx"), "permission denied");
        assert_eq!(
            err.to_string(),
            "failed to write stock_tally.xlsx: permission denied"
        );
    }
}
