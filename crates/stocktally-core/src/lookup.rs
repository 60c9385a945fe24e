//! # Lookup Port
//!
//! The boundary interface between the scan pipeline and whatever resolves
//! a code to a product name.
//!
//! ## Why a Port?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Lookup Port Seam                                  │
//! │                                                                         │
//! │  ScanHandler ──► dyn LookupPort ──┬──► ProductRepository (Postgres)    │
//! │                                   │     (stocktally-db)                │
//! │                                   │                                     │
//! │                                   └──► MemoryLookup (this module)      │
//! │                                         (tests, offline use)           │
//! │                                                                         │
//! │  The core never learns which backend answered.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! - `Ok(Some(name))` - the code is known; `name` is the display label
//! - `Ok(None)` - the backend is healthy but the code is unknown
//! - `Err(Unavailable)` - the backend could not be reached or could not
//!   answer; the caller must treat the scan as rejected

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::LookupError;

/// Resolves a scanned code to an optional display label.
///
/// Implementations must be cheap to call repeatedly: the station issues at
/// most one resolve per scan event, serialized by the input loop.
#[async_trait]
pub trait LookupPort: Send + Sync {
    /// Resolves `code` to a product name, or `None` if the code is unknown.
    async fn resolve(&self, code: &str) -> Result<Option<String>, LookupError>;
}

// =============================================================================
// In-Memory Lookup
// =============================================================================

/// A `HashMap`-backed [`LookupPort`].
///
/// ## Usage
/// ```rust
/// use stocktally_core::MemoryLookup;
///
/// let lookup = MemoryLookup::new().with_entry("A123", "Widget");
/// ```
///
/// Doubles as the test fake: `unavailable()` builds one whose every call
/// fails, for exercising the rejected-scan path.
#[derive(Debug, Clone, Default)]
pub struct MemoryLookup {
    names: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryLookup {
    /// Creates an empty lookup that knows no codes.
    pub fn new() -> Self {
        MemoryLookup::default()
    }

    /// Adds one code → name mapping (builder style).
    pub fn with_entry(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.names.insert(code.into(), name.into());
        self
    }

    /// Creates a lookup whose every resolve fails with `Unavailable`.
    pub fn unavailable() -> Self {
        MemoryLookup {
            names: HashMap::new(),
            unavailable: true,
        }
    }
}

#[async_trait]
impl LookupPort for MemoryLookup {
    async fn resolve(&self, code: &str) -> Result<Option<String>, LookupError> {
        if self.unavailable {
            return Err(LookupError::Unavailable(
                "in-memory lookup marked unavailable".to_string(),
            ));
        }
        Ok(self.names.get(code).cloned())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_lookup_known_code() {
        let lookup = MemoryLookup::new().with_entry("A123", "Widget");

        let name = lookup.resolve("A123").await.unwrap();
        assert_eq!(name.as_deref(), Some("Widget"));
    }

    #[tokio::test]
    async fn test_memory_lookup_unknown_code_is_none_not_error() {
        let lookup = MemoryLookup::new().with_entry("A123", "Widget");

        let name = lookup.resolve("Z999").await.unwrap();
        assert!(name.is_none());
    }

    #[tokio::test]
    async fn test_unavailable_lookup_fails() {
        let lookup = MemoryLookup::unavailable();

        let err = lookup.resolve("A123").await.unwrap_err();
        assert!(matches!(err, LookupError::Unavailable(_)));
    }
}
