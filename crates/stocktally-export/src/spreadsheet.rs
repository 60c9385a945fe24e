//! # Spreadsheet Writer
//!
//! Renders export rows into a tabular `.xlsx` workbook.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Sheet "Stock Tally"                                │
//! │                                                                         │
//! │  With labels in the batch:          Without labels:                    │
//! │  ┌──────────┬──────────────┬──────┐ ┌──────────┬──────┐                │
//! │  │ Code     │ Product Name │ Units│ │ Code     │ Units│                │
//! │  ├──────────┼──────────────┼──────┤ ├──────────┼──────┤                │
//! │  │ 84123... │ Widget 330ml │    3 │ │ 84123... │    3 │                │
//! │  │ 84129... │              │    1 │ │ 84129... │    1 │                │
//! │  └──────────┴──────────────┴──────┘ └──────────┴──────┘                │
//! │                                                                         │
//! │  The Product Name column exists only when at least one row in the     │
//! │  batch has a label; a labelled batch shows blanks for unresolved      │
//! │  codes.                                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::{debug, info};

use crate::error::{ExportError, ExportResult};
use stocktally_core::export::{any_labelled, ExportRow, CODE_HEADER, NAME_HEADER, UNITS_HEADER};

/// Fixed spreadsheet filename, written into the working directory.
pub const SPREADSHEET_FILENAME: &str = "stock_tally.xlsx";

/// Worksheet name.
pub const SHEET_NAME: &str = "Stock Tally";

// Column widths in Excel character units. Cosmetic constants, matched to
// typical EAN-13 codes and product names.
const CODE_COL_WIDTH: f64 = 24.0;
const NAME_COL_WIDTH: f64 = 32.0;
const UNITS_COL_WIDTH: f64 = 10.0;

/// Writes the rows as a table with a bold header row.
///
/// ## Arguments
/// * `rows` - projection from `to_rows`, one per tallied code
/// * `destination` - target path; overwritten if present
///
/// ## Errors
/// `ExportError::WriteFailed` when the workbook cannot be built or saved.
/// Nothing outside the destination file is touched on failure.
pub fn write_tabular(rows: &[ExportRow], destination: &Path) -> ExportResult<()> {
    debug!(rows = rows.len(), path = %destination.display(), "Writing spreadsheet");

    let with_names = any_labelled(rows);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| ExportError::write_failed(destination, e))?;

    let bold = Format::new().set_bold();

    // Header row
    worksheet
        .write_string_with_format(0, 0, CODE_HEADER, &bold)
        .map_err(|e| ExportError::write_failed(destination, e))?;
    let units_col: u16 = if with_names {
        worksheet
            .write_string_with_format(0, 1, NAME_HEADER, &bold)
            .map_err(|e| ExportError::write_failed(destination, e))?;
        2
    } else {
        1
    };
    worksheet
        .write_string_with_format(0, units_col, UNITS_HEADER, &bold)
        .map_err(|e| ExportError::write_failed(destination, e))?;

    // Data rows, one per tallied code, in first-scan order
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet
            .write_string(r, 0, &row.code)
            .map_err(|e| ExportError::write_failed(destination, e))?;
        if with_names {
            worksheet
                .write_string(r, 1, row.label.as_deref().unwrap_or(""))
                .map_err(|e| ExportError::write_failed(destination, e))?;
        }
        worksheet
            .write_number(r, units_col, row.units as f64)
            .map_err(|e| ExportError::write_failed(destination, e))?;
    }

    worksheet
        .set_column_width(0, CODE_COL_WIDTH)
        .map_err(|e| ExportError::write_failed(destination, e))?;
    if with_names {
        worksheet
            .set_column_width(1, NAME_COL_WIDTH)
            .map_err(|e| ExportError::write_failed(destination, e))?;
    }
    worksheet
        .set_column_width(units_col, UNITS_COL_WIDTH)
        .map_err(|e| ExportError::write_failed(destination, e))?;

    workbook
        .save(destination)
        .map_err(|e| ExportError::write_failed(destination, e))?;

    info!(rows = rows.len(), path = %destination.display(), "Spreadsheet written");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Data, Reader, Xlsx};

    fn sample_rows() -> Vec<ExportRow> {
        vec![
            ExportRow {
                code: "A123".to_string(),
                label: Some("Widget".to_string()),
                units: 2,
            },
            ExportRow {
                code: "B456".to_string(),
                label: None,
                units: 1,
            },
            ExportRow {
                code: "C789".to_string(),
                label: Some("Gadget".to_string()),
                units: 5,
            },
        ]
    }

    fn read_sheet(path: &Path) -> Vec<Vec<Data>> {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        range.rows().map(|r| r.to_vec()).collect()
    }

    #[test]
    fn test_round_trip_matches_rows_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SPREADSHEET_FILENAME);
        let rows = sample_rows();

        write_tabular(&rows, &path).unwrap();

        let cells = read_sheet(&path);
        assert_eq!(cells.len(), 1 + rows.len());
        assert_eq!(
            cells[0],
            vec![
                Data::String(CODE_HEADER.to_string()),
                Data::String(NAME_HEADER.to_string()),
                Data::String(UNITS_HEADER.to_string()),
            ]
        );

        for (row, cell_row) in rows.iter().zip(&cells[1..]) {
            assert_eq!(cell_row[0], Data::String(row.code.clone()));
            assert_eq!(
                cell_row[1],
                Data::String(row.label.clone().unwrap_or_default())
            );
            assert_eq!(cell_row[2], Data::Float(row.units as f64));
        }
    }

    #[test]
    fn test_unlabelled_batch_omits_name_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SPREADSHEET_FILENAME);
        let rows = vec![
            ExportRow {
                code: "A123".to_string(),
                label: None,
                units: 4,
            },
            ExportRow {
                code: "B456".to_string(),
                label: None,
                units: 1,
            },
        ];

        write_tabular(&rows, &path).unwrap();

        let cells = read_sheet(&path);
        assert_eq!(
            cells[0],
            vec![
                Data::String(CODE_HEADER.to_string()),
                Data::String(UNITS_HEADER.to_string()),
            ]
        );
        assert_eq!(cells[1][1], Data::Float(4.0));
    }

    #[test]
    fn test_empty_batch_still_writes_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SPREADSHEET_FILENAME);

        write_tabular(&[], &path).unwrap();

        let cells = read_sheet(&path);
        assert_eq!(cells.len(), 1);
    }

    #[test]
    fn test_unwritable_destination_fails() {
        let err = write_tabular(
            &sample_rows(),
            Path::new("/nonexistent-dir/stock_tally.xlsx"),
        )
        .unwrap_err();
        assert!(matches!(err, ExportError::WriteFailed { .. }));
    }
}
