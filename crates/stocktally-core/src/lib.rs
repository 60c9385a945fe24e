//! # stocktally-core: Pure Business Logic for Stock Tally
//!
//! This crate is the **heart** of Stock Tally. It contains the whole
//! scan-to-tally-to-rows pipeline as pure logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Stock Tally Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Station (terminal loop)                        │   │
//! │  │    scan line ──► :clear ──► :export xlsx ──► :export pdf        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stocktally-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   tally   │  │   scan    │  │  export   │  │   │
//! │  │   │TallyEntry │  │TallyStore │  │ScanHandler│  │ExportRow  │  │   │
//! │  │   │ScanOutcome│  │  record   │  │handle_scan│  │ to_rows   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO FILES • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │         ┌──────────────────────┴───────────────────────┐               │
//! │         ▼                                              ▼               │
//! │  ┌──────────────────┐                       ┌───────────────────────┐  │
//! │  │  stocktally-db   │                       │  stocktally-export    │  │
//! │  │  LookupPort impl │                       │  xlsx + pdf writers   │  │
//! │  └──────────────────┘                       └───────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (TallyEntry, ScanOutcome)
//! - [`tally`] - The insertion-ordered tally store
//! - [`lookup`] - The LookupPort seam (plus an in-memory implementation)
//! - [`scan`] - The scan pipeline: normalize, resolve, record
//! - [`export`] - Export row projection shared by every writer
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Database, terminal, file system access is FORBIDDEN here
//! 3. **Atomic Records**: A scan either fully applies to the store or not at all
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod export;
pub mod lookup;
pub mod scan;
pub mod tally;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stocktally_core::TallyStore` instead of
// `use stocktally_core::tally::TallyStore`

pub use error::{InputError, LookupError, ScanResult};
pub use export::{to_rows, ExportRow};
pub use lookup::{LookupPort, MemoryLookup};
pub use scan::ScanHandler;
pub use tally::TallyStore;
pub use types::{ScanOutcome, TallyEntry};
