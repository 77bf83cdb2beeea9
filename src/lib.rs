//! Rust Ledger Library
//! # Overview
//!
//! This library loads personal finance transactions from a delimited text file and
//! answers per-account questions about them: balance, income, expenses, largest
//! expense and the transactions on a given date.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Record, LedgerError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Read-only record snapshot and account queries
//! - [`io`] - File handling:
//!   - [`io::line_codec`] - Decode/encode one ledger line
//!   - [`io::file_reader`] - Tolerant loading of a ledger file
//!   - [`io::file_writer`] - Append-only export
//! - [`menu`] - Interactive menu over a loaded ledger
//!
//! # File Format
//!
//! ```text
//! No txn,Date,Compte,Montant,Commentaire
//! "1","2024-01-01","Cash","100.0","init"
//! "2","2024-01-02","Cash","-30.0","food, drinks"
//! ```
//!
//! The first line is a header and is ignored on read. Positive amounts are
//! income, negative amounts are expenses.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod menu;
pub mod types;

pub use crate::core::{AccountKey, Ledger};
pub use io::{append_records, decode_line, encode_line, load_records};
pub use menu::{MenuAction, MenuSession};
pub use types::{LedgerError, Record, TransactionId};
