//! Error types for the ledger
//!
//! # Error Categories
//!
//! - **Decode Errors**: a line with the wrong field count or a non-numeric id/amount.
//!   Scoped to one line; the reader skips the line and keeps going.
//! - **Query Errors**: the requested account has no records.
//! - **File I/O Errors**: missing ledger file, permission denied, failed export, etc.

use crate::io::line_codec::FIELD_COUNT;
use thiserror::Error;

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// A line could not be decoded into a record
    ///
    /// Recoverable: the reader discards the line and continues.
    #[error("Malformed line{}: {reason}", line.map(|l| format!(" {}", l)).unwrap_or_default())]
    MalformedLine {
        /// Line number in the source file (if known)
        line: Option<u64>,
        /// Description of what was wrong with the line
        reason: String,
    },

    /// No record carries the requested account
    ///
    /// The query is aborted; no default value is produced.
    #[error("Account '{account}' does not exist")]
    UnknownAccount {
        /// The account name as the caller supplied it
        account: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create a MalformedLine error for a wrong number of fields
    pub fn field_count(found: usize) -> Self {
        LedgerError::MalformedLine {
            line: None,
            reason: format!("expected {} fields, found {}", FIELD_COUNT, found),
        }
    }

    /// Create a MalformedLine error for a non-integer id
    pub fn invalid_id(raw: &str) -> Self {
        LedgerError::MalformedLine {
            line: None,
            reason: format!("invalid transaction id '{}'", raw),
        }
    }

    /// Create a MalformedLine error for a non-numeric amount
    pub fn invalid_amount(raw: &str) -> Self {
        LedgerError::MalformedLine {
            line: None,
            reason: format!("invalid amount '{}'", raw),
        }
    }

    /// Create an UnknownAccount error
    pub fn unknown_account(account: &str) -> Self {
        LedgerError::UnknownAccount {
            account: account.to_string(),
        }
    }

    /// Attach a line number to a MalformedLine error
    ///
    /// Other variants are returned unchanged.
    pub fn with_line(self, line_num: u64) -> Self {
        match self {
            LedgerError::MalformedLine { reason, .. } => LedgerError::MalformedLine {
                line: Some(line_num),
                reason,
            },
            other => other,
        }
    }
}
