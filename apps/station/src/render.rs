//! # Table Rendering
//!
//! The fixed-width tally table printed after every accepted scan.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Code                           Product Name                    Units  │
//! │  ─────────────────────────────  ─────────────────────────────  ─────   │
//! │  8412345678905                  Widget 330ml                        3  │
//! │  8412345678912                                                      1  │
//! │                                                                         │
//! │  2 codes, 4 units                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The Product Name column appears only when some entry is labelled,
//! mirroring the export policy so the screen and the files agree.

use std::fmt::Write;

use stocktally_core::export::{CODE_HEADER, NAME_HEADER, UNITS_HEADER};
use stocktally_core::TallyStore;

// Fixed column widths in characters; codes and names wider than this are
// shown in full and simply overflow their column.
const CODE_WIDTH: usize = 30;
const NAME_WIDTH: usize = 30;
const UNITS_WIDTH: usize = 6;

/// Renders the current tally as a fixed-width table.
pub fn render_table(store: &TallyStore) -> String {
    let mut out = String::new();
    if store.is_empty() {
        out.push_str("(nothing tallied)\n");
        return out;
    }

    let with_names = store.snapshot().iter().any(|e| e.is_labelled());

    if with_names {
        let _ = writeln!(
            out,
            "{code:<cw$}  {name:<nw$}  {units:>uw$}",
            code = CODE_HEADER,
            name = NAME_HEADER,
            units = UNITS_HEADER,
            cw = CODE_WIDTH,
            nw = NAME_WIDTH,
            uw = UNITS_WIDTH
        );
        let _ = writeln!(
            out,
            "{}  {}  {}",
            "-".repeat(CODE_WIDTH),
            "-".repeat(NAME_WIDTH),
            "-".repeat(UNITS_WIDTH)
        );
        for entry in store.snapshot() {
            let _ = writeln!(
                out,
                "{code:<cw$}  {name:<nw$}  {units:>uw$}",
                code = entry.code,
                name = entry.label.as_deref().unwrap_or(""),
                units = entry.count,
                cw = CODE_WIDTH,
                nw = NAME_WIDTH,
                uw = UNITS_WIDTH
            );
        }
    } else {
        let _ = writeln!(
            out,
            "{code:<cw$}  {units:>uw$}",
            code = CODE_HEADER,
            units = UNITS_HEADER,
            cw = CODE_WIDTH,
            uw = UNITS_WIDTH
        );
        let _ = writeln!(
            out,
            "{}  {}",
            "-".repeat(CODE_WIDTH),
            "-".repeat(UNITS_WIDTH)
        );
        for entry in store.snapshot() {
            let _ = writeln!(
                out,
                "{code:<cw$}  {units:>uw$}",
                code = entry.code,
                units = entry.count,
                cw = CODE_WIDTH,
                uw = UNITS_WIDTH
            );
        }
    }

    let _ = writeln!(
        out,
        "\n{} codes, {} units",
        store.len(),
        store.total_units()
    );
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_renders_placeholder() {
        let store = TallyStore::new();
        assert!(render_table(&store).contains("(nothing tallied)"));
    }

    #[test]
    fn test_unlabelled_tally_has_no_name_column() {
        let mut store = TallyStore::new();
        store.record("A123", None);

        let table = render_table(&store);
        assert!(table.contains(CODE_HEADER));
        assert!(!table.contains(NAME_HEADER));
        assert!(table.contains("1 codes, 1 units"));
    }

    #[test]
    fn test_labelled_tally_shows_names_in_order() {
        let mut store = TallyStore::new();
        store.record("B456", Some("Gadget".to_string()));
        store.record("A123", None);
        store.record("B456", None);

        let table = render_table(&store);
        assert!(table.contains(NAME_HEADER));
        assert!(table.contains("Gadget"));

        // First-scan order: B456 before A123
        let b = table.find("B456").unwrap();
        let a = table.find("A123").unwrap();
        assert!(b < a);
        assert!(table.contains("2 codes, 3 units"));
    }
}
