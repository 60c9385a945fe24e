//! # Product Repository
//!
//! The single pass-through query: barcode in, product name out.
//!
//! ## Lookup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a Resolve Works                                  │
//! │                                                                         │
//! │  Operator scans: "8412345678905"                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SELECT name FROM products WHERE barcode = $1                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ products (external catalog table)       │                           │
//! │  │                                         │                           │
//! │  │ 8412345678905 | Widget 330ml            │ ← one row or none         │
//! │  │ 8412345678912 | Widget 500ml            │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Some("Widget 330ml")  /  None ("not found", not an error)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is read-only from this side; this crate never writes to it.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::error::DbResult;
use stocktally_core::error::LookupError;
use stocktally_core::lookup::LookupPort;

/// Repository for the product catalog lookup.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
/// let name = repo.find_name_by_code("8412345678905").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: PgPool) -> Self {
        ProductRepository { pool }
    }

    /// Resolves a barcode to its product name.
    ///
    /// ## Arguments
    /// * `code` - The scanned barcode, already trimmed
    ///
    /// ## Returns
    /// * `Ok(Some(name))` - code is in the catalog
    /// * `Ok(None)` - catalog reachable, code unknown
    /// * `Err(DbError)` - catalog unreachable or query failed
    pub async fn find_name_by_code(&self, code: &str) -> DbResult<Option<String>> {
        debug!(code = %code, "Looking up product name");

        let name: Option<String> =
            sqlx::query_scalar("SELECT name FROM products WHERE barcode = $1")
                .bind(code)
                .fetch_optional(&self.pool)
                .await?;

        debug!(code = %code, found = name.is_some(), "Lookup answered");
        Ok(name)
    }

    /// Counts catalog products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// LookupPort Implementation
// =============================================================================

/// The database-backed side of the core's lookup seam.
///
/// Any [`crate::error::DbError`] collapses to `LookupError::Unavailable`:
/// from the scan pipeline's point of view there is exactly one failure
/// mode, "the backend could not answer".
#[async_trait]
impl LookupPort for ProductRepository {
    async fn resolve(&self, code: &str) -> Result<Option<String>, LookupError> {
        self.find_name_by_code(code)
            .await
            .map_err(|e| LookupError::Unavailable(e.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, LookupConfig};
    use std::time::Duration;

    // No catalog runs in the test environment; the lazy pool lets us assert
    // the unreachable-backend contract without one.
    #[tokio::test]
    async fn test_unreachable_catalog_is_unavailable_not_panic() {
        let config = LookupConfig::new("127.0.0.1", "catalog", "scanner")
            .port(1) // nothing listens here
            .acquire_timeout(Duration::from_millis(200));
        let db = Database::connect_lazy(&config).unwrap();

        let err = db.products().resolve("A123").await.unwrap_err();
        assert!(matches!(err, LookupError::Unavailable(_)));
    }
}
