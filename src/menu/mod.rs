//! Interactive menu
//!
//! The presentation layer over the ledger: a numbered menu of queries plus
//! export and quit. The session reads from any `BufRead` and writes to any
//! `Write`, so the binary hands it stdin/stdout and tests hand it buffers.

pub mod session;

pub use session::MenuSession;

/// Menu entries in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ListAccounts,
    Balance,
    TotalIncome,
    TotalExpenses,
    LargestExpense,
    TransactionsOnDate,
    Export,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 8] = [
        MenuAction::ListAccounts,
        MenuAction::Balance,
        MenuAction::TotalIncome,
        MenuAction::TotalExpenses,
        MenuAction::LargestExpense,
        MenuAction::TransactionsOnDate,
        MenuAction::Export,
        MenuAction::Quit,
    ];

    /// Map a 1-based menu number to its action
    ///
    /// Zero, negative and past-the-end numbers have no action.
    pub fn from_selection(selection: i64) -> Option<Self> {
        let index = usize::try_from(selection).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// The number the user types for this action
    pub fn number(self) -> i64 {
        self as i64 + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::ListAccounts => "Show all accounts",
            MenuAction::Balance => "Compute an account balance",
            MenuAction::TotalIncome => "Find the total income of an account",
            MenuAction::TotalExpenses => "Find the total expenses of an account",
            MenuAction::LargestExpense => "Find the largest expense of an account",
            MenuAction::TransactionsOnDate => "List an account's transactions on a date",
            MenuAction::Export => "Export transactions to a CSV file",
            MenuAction::Quit => "Quit",
        }
    }
}
