//! # Station Entry Point
//!
//! The executable shell around [`stocktally_station::run`]: build the
//! runtime, run the loop, turn a startup error into a message and a
//! non-zero exit. Everything interesting lives in lib.rs for testability.

#[tokio::main]
async fn main() {
    if let Err(err) = stocktally_station::run().await {
        eprintln!("stocktally: {}", err);
        std::process::exit(1);
    }
}
