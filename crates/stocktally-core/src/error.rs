//! # Error Types
//!
//! Domain-specific error types for stocktally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stocktally-core errors (this file)                                    │
//! │  ├── LookupError  - The lookup backend could not answer                │
//! │  └── InputError   - A scan was rejected (nothing was recorded)         │
//! │                                                                         │
//! │  stocktally-db errors (separate crate)                                 │
//! │  └── DbError      - Database operation failures                        │
//! │                                                                         │
//! │  stocktally-export errors (separate crate)                             │
//! │  └── ExportError  - Destination could not be written                   │
//! │                                                                         │
//! │  Flow: DbError → LookupError → InputError → station notification       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the scanned code, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Lookup Error
// =============================================================================

/// Errors raised by a [`crate::lookup::LookupPort`] implementation.
///
/// "Code not found" is NOT an error at this level: a reachable backend that
/// has no row for a code answers `Ok(None)`.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The backing service could not be reached or could not answer.
    ///
    /// ## When This Occurs
    /// - Database host is down or unreachable
    /// - Credentials were rejected
    /// - The query itself failed mid-flight
    #[error("lookup backend unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// Input Error
// =============================================================================

/// Errors raised while handling a single scan.
///
/// A scan that errors is rejected whole: the tally store is never left
/// partially updated.
#[derive(Debug, Error)]
pub enum InputError {
    /// The lookup backend failed, so the scan was not tallied.
    ///
    /// ## User Workflow
    /// ```text
    /// Scan "8412345678905"
    ///      │
    ///      ▼
    /// resolve() ──► LookupError::Unavailable
    ///      │
    ///      ▼
    /// Station shows: "lookup failed ... (not tallied)"
    /// Count for the code is unchanged.
    /// ```
    #[error("lookup failed: {0}")]
    LookupFailed(#[from] LookupError),

    /// The backend is reachable but knows nothing about this code.
    ///
    /// ## When This Occurs
    /// - Mistyped or damaged barcode
    /// - Product missing from the catalog
    ///
    /// The scan is not tallied; the operator is warned instead.
    #[error("unknown code: {code}")]
    CodeNotFound { code: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for scan results.
pub type ScanResult<T> = Result<T, InputError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = InputError::CodeNotFound {
            code: "8412345678905".to_string(),
        };
        assert_eq!(err.to_string(), "unknown code: 8412345678905");
    }

    #[test]
    fn test_lookup_error_converts_to_input_error() {
        let lookup_err = LookupError::Unavailable("connection refused".to_string());
        let input_err: InputError = lookup_err.into();
        assert!(matches!(input_err, InputError::LookupFailed(_)));
        assert_eq!(
            input_err.to_string(),
            "lookup failed: lookup backend unavailable: connection refused"
        );
    }
}
