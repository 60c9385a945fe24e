//! # Export Row Projection
//!
//! The single projection of a tally snapshot that every writer consumes.
//!
//! ## Why One Projection?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Export Data Flow                                   │
//! │                                                                         │
//! │  TallyStore ──► to_rows() ──► Vec<ExportRow> ──┬──► spreadsheet (.xlsx)│
//! │                                                │                        │
//! │                                                └──► document (.pdf)    │
//! │                                                                         │
//! │  Both writers read the SAME rows, so the two outputs can never         │
//! │  diverge in content or order.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Column titles live here too: the writers must agree on them as well.

use serde::{Deserialize, Serialize};

use crate::tally::TallyStore;

/// Column title for the scanned code.
pub const CODE_HEADER: &str = "Code";

/// Column title for the resolved product name.
/// The column is omitted entirely when no row in the batch has a label.
pub const NAME_HEADER: &str = "Product Name";

/// Column title for the unit count.
pub const UNITS_HEADER: &str = "Units";

// =============================================================================
// Export Row
// =============================================================================

/// One exported line: `{code, label?, units}` in first-scan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    /// The scanned code.
    pub code: String,

    /// Resolved product name, if a lookup ever succeeded for this code.
    pub label: Option<String>,

    /// Units tallied for this code.
    pub units: u64,
}

/// Projects a store snapshot into export rows, preserving insertion order.
pub fn to_rows(store: &TallyStore) -> Vec<ExportRow> {
    store
        .snapshot()
        .iter()
        .map(|entry| ExportRow {
            code: entry.code.clone(),
            label: entry.label.clone(),
            units: entry.count,
        })
        .collect()
}

/// Whether any row in the batch carries a label.
///
/// Decides if the Product Name column exists at all in an export.
pub fn any_labelled(rows: &[ExportRow]) -> bool {
    rows.iter().any(|row| row.label.is_some())
}

// =============================================================================
// Unit Tests
// =============================================================================
