//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: The transaction record and amount formatting
//! - `error`: Error types for the ledger

pub mod error;
pub mod record;

pub use error::LedgerError;
pub use record::{format_amount, Record, TransactionId};
