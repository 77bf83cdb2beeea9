//! Core business logic module
//!
//! - `ledger` - Read-only record snapshot and the per-account queries

pub mod ledger;

pub use ledger::{AccountKey, Ledger};
