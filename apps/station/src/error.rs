//! # Station Error Type
//!
//! The error type for the station's fatal path: startup and the input
//! stream itself.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Station                            │
//! │                                                                         │
//! │  Per-event errors (NEVER fatal, printed and the loop continues):       │
//! │                                                                         │
//! │    InputError::LookupFailed  ──► "lookup failed ... (not tallied)"     │
//! │    InputError::CodeNotFound  ──► "unknown code ... (not tallied)"      │
//! │    ExportError::WriteFailed  ──► "export failed: ..."                  │
//! │                                                                         │
//! │  Fatal errors (this type, reported once, process exits):               │
//! │                                                                         │
//! │    ConfigError  ──► lookup requested but misconfigured                 │
//! │    DbError      ──► the pool could not even be constructed             │
//! │    io::Error    ──► stdin is gone                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Per-event errors are handled right at the loop - wrapping them here
//! would only blur the "caught at the boundary nearest their cause" line.

use thiserror::Error;

use stocktally_db::{ConfigError, DbError};

/// Fatal station errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// The lookup environment is set but unusable.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The catalog pool could not be constructed.
    #[error("database error: {0}")]
    Db(#[from] DbError),

    /// The input stream failed.
    #[error("terminal input error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: AppError = ConfigError::MissingRequired("STOCKTALLY_DB_NAME".to_string()).into();
        assert_eq!(
            err.to_string(),
            "configuration error: missing required configuration: STOCKTALLY_DB_NAME"
        );
    }
}
