//! # stocktally-export: Spreadsheet and Document Writers
//!
//! Renders export rows into the two artifacts the station produces.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Stock Tally Export Flow                            │
//! │                                                                         │
//! │  Station command (:export xlsx / :export pdf)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  to_rows(&store)  (stocktally-core, pure)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 stocktally-export (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────────────┐      ┌─────────────────────────┐     │   │
//! │  │   │   spreadsheet.rs    │      │      document.rs        │     │   │
//! │  │   │   write_tabular     │      │      write_document     │     │   │
//! │  │   │   stock_tally.xlsx  │      │      stock_tally.pdf    │     │   │
//! │  │   └─────────────────────┘      └─────────────────────────┘     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Files in the working directory                                        │
//! │                                                                         │
//! │  A failed write surfaces ExportError::WriteFailed and touches          │
//! │  NOTHING else - the tally store is not this crate's to mutate.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`spreadsheet`] - tabular `.xlsx` writer
//! - [`document`] - paginated, bordered `.pdf` writer
//! - [`error`] - export error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod document;
pub mod error;
pub mod spreadsheet;

// =============================================================================
// Re-exports
// =============================================================================

pub use document::{write_document, DOCUMENT_FILENAME, DOCUMENT_TITLE};
pub use error::ExportError;
pub use spreadsheet::{write_tabular, SPREADSHEET_FILENAME};
