//! Transaction record type for the ledger
//!
//! A [`Record`] is one line of the ledger file once decoded. Records are only
//! built by the line codec and are never mutated afterwards.

use std::fmt;

/// Transaction sequence number
///
/// Not required to be unique and never validated beyond being an integer.
pub type TransactionId = i64;

/// One financial transaction
///
/// The sign of `amount` carries the direction: positive values are income,
/// negative values are expenses.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Transaction sequence number
    pub id: TransactionId,

    /// Date as written in the file, expected as `YYYY-MM-DD`
    ///
    /// Only ever compared by exact string equality.
    pub date: String,

    /// Free-form account label, stored exactly as read
    pub account: String,

    /// Signed amount
    pub amount: f64,

    /// Free-form note, may contain commas
    pub note: String,
}

impl Record {
    pub fn new(
        id: TransactionId,
        date: impl Into<String>,
        account: impl Into<String>,
        amount: f64,
        note: impl Into<String>,
    ) -> Self {
        Record {
            id,
            date: date.into(),
            account: account.into(),
            amount,
            note: note.into(),
        }
    }

    /// True for money coming into the account
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// True for money leaving the account
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {} ({})",
            self.id,
            self.date,
            self.account,
            format_amount(self.amount),
            self.note
        )
    }
}

/// Render an amount in its natural decimal form
///
/// Integral values keep a trailing `.0` so `100` reads as `100.0`; everything
/// else uses the shortest text that parses back to the same `f64`.
pub fn format_amount(amount: f64) -> String {
    let text = amount.to_string();
    if amount.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}
