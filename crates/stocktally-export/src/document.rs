//! # Document Writer
//!
//! Renders export rows into a paginated, bordered `.pdf` table.
//!
//! ## Page Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        A4 page (210 × 297 mm)                           │
//! │                                                                         │
//! │                           Stock Tally              ← centered title     │
//! │                                                      (first page only)  │
//! │  ┌──────────────┬──────────────────┬───────┐                           │
//! │  │ Code         │ Product Name     │ Units │  ← bordered header,       │
//! │  ├──────────────┼──────────────────┼───────┤    repeated every page    │
//! │  │ 8412345678905│ Widget 330ml     │     3 │                           │
//! │  │ 8412345678912│                  │     1 │  ← one bordered row       │
//! │  │ ...          │ ...              │   ... │    per tallied code       │
//! │  └──────────────┴──────────────────┴───────┘                           │
//! │                                                                         │
//! │  A row that would cross the bottom margin starts a new page.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cell widths are fixed constants, not computed from content - the table
//! keeps the same fixed-cell look no matter what is scanned. Without
//! labels in the batch the name column is omitted and the remaining two
//! cells widen (140/50 instead of 70/90/30).

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};
use tracing::{debug, info};

use crate::error::{ExportError, ExportResult};
use stocktally_core::export::{any_labelled, ExportRow, CODE_HEADER, NAME_HEADER, UNITS_HEADER};

/// Fixed document filename, written into the working directory.
pub const DOCUMENT_FILENAME: &str = "stock_tally.pdf";

/// Title centered at the top of the first page.
pub const DOCUMENT_TITLE: &str = "Stock Tally";

// Page geometry in millimetres (A4, portrait).
const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN: f64 = 10.0;
const ROW_HEIGHT: f64 = 10.0;

// Vertical space reserved for the title band on the first page.
const TITLE_BLOCK: f64 = 16.0;

// Fixed cell widths; each set fills the printable width (190 mm).
const THREE_COL_WIDTHS: [f64; 3] = [70.0, 90.0, 30.0];
const TWO_COL_WIDTHS: [f64; 2] = [140.0, 50.0];

// Typography (points) and in-cell text placement (millimetres).
const TITLE_FONT_PT: f64 = 12.0;
const BODY_FONT_PT: f64 = 10.0;
const TEXT_INSET: f64 = 2.0;
const BASELINE_RISE: f64 = 3.5;
const BORDER_PT: f64 = 0.75;

const PT_TO_MM: f64 = 0.352_778;

/// Writes the rows as a paginated, bordered table.
///
/// ## Arguments
/// * `rows` - projection from `to_rows`, one per tallied code
/// * `destination` - target path; overwritten if present
///
/// ## Errors
/// `ExportError::WriteFailed` when the file cannot be created or saved.
/// Nothing outside the destination file is touched on failure.
pub fn write_document(rows: &[ExportRow], destination: &Path) -> ExportResult<()> {
    debug!(rows = rows.len(), path = %destination.display(), "Writing document");

    let with_names = any_labelled(rows);
    let widths: &[f64] = if with_names {
        &THREE_COL_WIDTHS
    } else {
        &TWO_COL_WIDTHS
    };
    let headers: Vec<&str> = if with_names {
        vec![CODE_HEADER, NAME_HEADER, UNITS_HEADER]
    } else {
        vec![CODE_HEADER, UNITS_HEADER]
    };

    let (doc, first_page, first_layer) =
        PdfDocument::new(DOCUMENT_TITLE, Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "table");
    let body_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::write_failed(destination, e))?;
    let head_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::write_failed(destination, e))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    prepare_layer(&layer);

    // Centered title, first page only
    let title_x = (PAGE_WIDTH - approx_text_width(DOCUMENT_TITLE, TITLE_FONT_PT)) / 2.0;
    layer.use_text(
        DOCUMENT_TITLE,
        TITLE_FONT_PT as f32,
        Mm(title_x as f32),
        Mm((PAGE_HEIGHT - MARGIN - 8.0) as f32),
        &head_font,
    );

    let mut y_top = MARGIN + TITLE_BLOCK;
    draw_row(&layer, &head_font, y_top, widths, &headers);
    y_top += ROW_HEIGHT;

    let mut pages = 1usize;
    for row in rows {
        if y_top + ROW_HEIGHT > PAGE_HEIGHT - MARGIN {
            let (page, layer_idx) = doc.add_page(Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "table");
            layer = doc.get_page(page).get_layer(layer_idx);
            prepare_layer(&layer);
            pages += 1;

            y_top = MARGIN;
            draw_row(&layer, &head_font, y_top, widths, &headers);
            y_top += ROW_HEIGHT;
        }

        let units = row.units.to_string();
        let cells: Vec<&str> = if with_names {
            vec![&row.code, row.label.as_deref().unwrap_or(""), &units]
        } else {
            vec![&row.code, &units]
        };
        draw_row(&layer, &body_font, y_top, widths, &cells);
        y_top += ROW_HEIGHT;
    }

    let file = File::create(destination).map_err(|e| ExportError::write_failed(destination, e))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ExportError::write_failed(destination, e))?;

    info!(rows = rows.len(), pages, path = %destination.display(), "Document written");
    Ok(())
}

/// Sets stroke color and width; must run once per layer.
fn prepare_layer(layer: &PdfLayerReference) {
    layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    layer.set_outline_thickness(BORDER_PT as f32);
}

/// Draws one bordered table row at `y_top` millimetres below the top edge.
fn draw_row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    y_top: f64,
    widths: &[f64],
    cells: &[&str],
) {
    let baseline = PAGE_HEIGHT - (y_top + ROW_HEIGHT) + BASELINE_RISE;
    let mut x = MARGIN;
    for (width, text) in widths.iter().zip(cells) {
        cell_border(layer, x, y_top, *width, ROW_HEIGHT);
        layer.use_text(*text, BODY_FONT_PT as f32, Mm((x + TEXT_INSET) as f32), Mm(baseline as f32), font);
        x += width;
    }
}

/// Draws one cell rectangle. PDF coordinates grow upward, the layout is
/// tracked from the top edge, so the y flip happens here.
fn cell_border(layer: &PdfLayerReference, x: f64, y_top: f64, width: f64, height: f64) {
    let top = PAGE_HEIGHT - y_top;
    let border = Line {
        points: vec![
            (Point::new(Mm(x as f32), Mm(top as f32)), false),
            (Point::new(Mm((x + width) as f32), Mm(top as f32)), false),
            (Point::new(Mm((x + width) as f32), Mm((top - height) as f32)), false),
            (Point::new(Mm(x as f32), Mm((top - height) as f32)), false),
        ],
        is_closed: true,
    };
    layer.add_line(border);
}

/// Rough width of a Helvetica string in millimetres.
///
/// The builtin fonts carry no metrics here; an 0.5 em average advance is
/// close enough to center a short title.
fn approx_text_width(text: &str, font_size_pt: f64) -> f64 {
    text.chars().count() as f64 * font_size_pt * 0.5 * PT_TO_MM
}

// =============================================================================
// Unit Tests
// =============================================================================
