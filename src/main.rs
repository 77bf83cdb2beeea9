//! Rust Ledger CLI
//!
//! Interactive menu for querying a personal finance ledger file.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- books/2024.csv
//! cargo run -- --export-dir exports books/2024.csv
//! RUST_LOG=debug cargo run -- books/2024.csv
//! ```
//!
//! The ledger is loaded once at startup. A missing or unreadable file is
//! reported and the session starts with an empty ledger.
//!
//! # Exit Codes
//!
//! - 0: Session ended normally
//! - 1: Export or terminal I/O failed

use env_logger::Env;
use log::error;
use rust_ledger::cli;
use rust_ledger::io::load_records;
use rust_ledger::{Ledger, MenuSession};
use std::io;
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = cli::parse_args();

    let ledger = Ledger::new(load_records(&args.input_file));

    let stdin = io::stdin();
    let mut session = MenuSession::new(&ledger, stdin.lock(), io::stdout())
        .with_export_dir(args.export_dir);

    if let Err(e) = session.run() {
        error!("{}", e);
        process::exit(1);
    }
}
