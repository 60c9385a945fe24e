//! # Station Library
//!
//! Core library for the Stock Tally scanning station: startup, the input
//! loop, and dispatch to the commands.
//!
//! ## Module Organization
//! ```text
//! stocktally_station/
//! ├── lib.rs          ◄─── You are here (startup & input loop)
//! ├── state/
//! │   └── mod.rs      ◄─── AppState: the tally + scan pipeline
//! ├── commands/
//! │   ├── mod.rs      ◄─── Line parsing (Action)
//! │   ├── scan.rs     ◄─── Scan / clear commands
//! │   └── export.rs   ◄─── Spreadsheet / document commands
//! ├── render.rs       ◄─── Fixed-width tally table
//! └── error.rs        ◄─── Fatal error type
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Station Startup                                   │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, logs on stderr                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Read Lookup Environment ──────────────────────────────────────────► │
//! │     • STOCKTALLY_DB_HOST unset → plain tally mode                       │
//! │     • set → lazy Postgres pool, lookup mode                             │
//! │                                                                         │
//! │  3. Create AppState ──────────────────────────────────────────────────► │
//! │     • empty TallyStore + the configured ScanHandler                     │
//! │                                                                         │
//! │  4. Run the Line Loop ────────────────────────────────────────────────► │
//! │     • each stdin line is a scan or a ':' action                         │
//! │     • per-event errors print and the loop continues                     │
//! │     • :quit / EOF ends the session                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use std::sync::Arc;

use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::{parse_line, Action};
use error::AppError;
use state::AppState;
use stocktally_core::{ScanHandler, ScanOutcome};
use stocktally_db::{Database, LookupConfig};

/// Runs the station until `:quit` or end of input.
///
/// Startup errors (bad lookup configuration, broken stdin) are the only
/// fatal path; everything that happens per event is reported and survived.
pub async fn run() -> Result<(), AppError> {
    init_tracing();
    info!("Starting Stock Tally station");

    let (handler, db) = match LookupConfig::from_env()? {
        Some(config) => {
            let db = Database::connect_lazy(&config)?;
            info!(
                host = %config.host,
                database = %config.database,
                "Product lookup enabled"
            );
            (ScanHandler::with_lookup(Arc::new(db.products())), Some(db))
        }
        None => {
            info!("No lookup backend configured; every non-blank scan is tallied");
            (ScanHandler::plain(), None)
        }
    };

    let mut state = AppState::new(handler);

    println!("Stock Tally - scan a code and press Enter.");
    print_help();

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Action::Scan(code) => handle_scan_line(&mut state, &code).await,
            Action::Clear => {
                commands::scan::clear(&mut state);
                println!("Tally cleared.");
            }
            Action::ExportSpreadsheet => {
                report_export(commands::export::export_spreadsheet(&state));
            }
            Action::ExportDocument => {
                report_export(commands::export::export_document(&state));
            }
            Action::Help => print_help(),
            Action::Quit => break,
            Action::Unknown(action) => {
                println!("Unknown action '{}'; :help lists the available ones.", action);
            }
        }
    }

    if let Some(db) = db {
        db.close().await;
    }
    info!("Station stopped");
    Ok(())
}

/// Drives one scanned line and presents the outcome.
///
/// Rejected scans are warnings, never fatal: the operator re-scans or
/// moves on, and the tally is exactly as it was.
async fn handle_scan_line(state: &mut AppState, code: &str) {
    match commands::scan::scan(state, code).await {
        // Blank line: nothing recorded, nothing to redraw
        Ok(ScanOutcome::Ignored) => {}
        Ok(ScanOutcome::Recorded(_)) => {
            print!("{}", render::render_table(state.store()));
        }
        Err(err) => {
            warn!(%err, "Scan rejected");
            println!("{} (not tallied)", err);
        }
    }
}

/// Prints an export result as a user-visible line.
fn report_export(result: Result<std::path::PathBuf, stocktally_export::ExportError>) {
    match result {
        Ok(path) => println!("Exported to {}", path.display()),
        Err(err) => {
            warn!(%err, "Export failed");
            println!("{}", err);
        }
    }
}

/// Prints the action summary.
fn print_help() {
    println!("Actions: :clear  :export xlsx  :export pdf  :help  :quit");
}

/// Initializes tracing (logging).
///
/// Logs go to stderr so the tally table on stdout stays clean.
/// Default level INFO; override with RUST_LOG.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
