//! # stocktally-db: Product Lookup Backend
//!
//! This crate provides the database-backed side of the core's `LookupPort`:
//! a read-only PostgreSQL catalog mapping barcodes to product names.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Stock Tally Data Flow                              │
//! │                                                                         │
//! │  Station scan event                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ScanHandler (stocktally-core)                                         │
//! │       │  resolve(code)                                                  │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stocktally-db (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌──────────────────┐   ┌──────────────┐  │   │
//! │  │   │   Database    │   │ ProductRepository│   │ LookupConfig │  │   │
//! │  │   │   (pool.rs)   │◄──│ (repository/)    │   │  (env vars)  │  │   │
//! │  │   │   PgPool      │   │ name by barcode  │   │              │  │   │
//! │  │   └───────────────┘   └──────────────────┘   └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PostgreSQL product catalog (external, read-only)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool, env-driven configuration
//! - [`error`] - Database and configuration error types
//! - [`repository`] - The product-name repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stocktally_db::{Database, LookupConfig};
//!
//! // Lookup mode is on only when the host variable is set
//! if let Some(config) = LookupConfig::from_env()? {
//!     let db = Database::connect_lazy(&config)?;
//!     let name = db.products().find_name_by_code("8412345678905").await?;
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, DbError};
pub use pool::{Database, LookupConfig};
pub use repository::product::ProductRepository;
