//! # Command Module
//!
//! Line parsing and the station's actions.
//!
//! ## Input Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Input Grammar                                    │
//! │                                                                         │
//! │  Line                     Action                                        │
//! │  ────                     ──────                                        │
//! │  8412345678905            Scan("8412345678905")                        │
//! │  (blank line)             Scan("") → ignored by the pipeline           │
//! │  :clear                   Clear                                         │
//! │  :export xlsx | :xlsx     ExportSpreadsheet                            │
//! │  :export pdf  | :pdf      ExportDocument                               │
//! │  :help                    Help                                          │
//! │  :quit | :q               Quit                                          │
//! │  :anything-else           Unknown (warned, loop continues)             │
//! │                                                                         │
//! │  A leading ':' marks an action; everything else is a scan, so no       │
//! │  barcode can ever collide with a command.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod export;
pub mod scan;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A scanned code (possibly blank, which the pipeline ignores).
    Scan(String),
    /// Reset the tally.
    Clear,
    /// Write the spreadsheet artifact.
    ExportSpreadsheet,
    /// Write the document artifact.
    ExportDocument,
    /// Show the action summary.
    Help,
    /// Leave the loop.
    Quit,
    /// An unrecognized `:` action.
    Unknown(String),
}

/// Parses one input line into an action.
pub fn parse_line(line: &str) -> Action {
    let trimmed = line.trim();
    if !trimmed.starts_with(':') {
        return Action::Scan(trimmed.to_string());
    }

    match trimmed.to_ascii_lowercase().as_str() {
        ":clear" => Action::Clear,
        ":export xlsx" | ":xlsx" => Action::ExportSpreadsheet,
        ":export pdf" | ":pdf" => Action::ExportDocument,
        ":help" => Action::Help,
        ":quit" | ":q" => Action::Quit,
        _ => Action::Unknown(trimmed.to_string()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_is_a_scan() {
        assert_eq!(
            parse_line("8412345678905\n"),
            Action::Scan("8412345678905".to_string())
        );
    }

    #[test]
    fn test_blank_line_is_a_blank_scan() {
        assert_eq!(parse_line("   "), Action::Scan(String::new()));
    }

    #[test]
    fn test_actions_parse() {
        assert_eq!(parse_line(":clear"), Action::Clear);
        assert_eq!(parse_line(":export xlsx"), Action::ExportSpreadsheet);
        assert_eq!(parse_line(":xlsx"), Action::ExportSpreadsheet);
        assert_eq!(parse_line(":export pdf"), Action::ExportDocument);
        assert_eq!(parse_line(":pdf"), Action::ExportDocument);
        assert_eq!(parse_line(":help"), Action::Help);
        assert_eq!(parse_line(":quit"), Action::Quit);
        assert_eq!(parse_line(":q"), Action::Quit);
    }

    #[test]
    fn test_actions_are_case_insensitive() {
        assert_eq!(parse_line(":CLEAR"), Action::Clear);
        assert_eq!(parse_line(":Export XLSX"), Action::ExportSpreadsheet);
    }

    #[test]
    fn test_unknown_action_is_not_a_scan() {
        assert_eq!(
            parse_line(":frobnicate"),
            Action::Unknown(":frobnicate".to_string())
        );
    }
}
