//! Ledger query engine
//!
//! This module provides the [`Ledger`], an owned, read-only snapshot of the
//! records loaded for a session, and the per-account queries run against it.
//!
//! # Account Matching
//!
//! Every query matches accounts through [`AccountKey`]: surrounding whitespace
//! is trimmed and the text is lowercased on both the stored label and the
//! requested name. `" Groceries "` and `"groceries"` therefore select the same
//! records as an account stored as `"Groceries"`.
//!
//! # Unknown Accounts
//!
//! All per-account queries fail with [`LedgerError::UnknownAccount`] when no
//! record matches, rather than returning zero or an empty list.

use crate::types::{LedgerError, Record};
use log::debug;
use std::collections::HashSet;

/// Normalized account name used for lookups
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountKey(String);

impl AccountKey {
    pub fn new(name: &str) -> Self {
        AccountKey(name.trim().to_lowercase())
    }

    /// True if the stored `account` label normalizes to this key
    pub fn matches(&self, account: &str) -> bool {
        account.trim().to_lowercase() == self.0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// In-memory transaction ledger
///
/// Records keep file order. Duplicates are allowed and kept.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<Record>,
}

impl Ledger {
    /// Create a ledger over an already loaded list of records
    pub fn new(records: Vec<Record>) -> Self {
        Ledger { records }
    }

    /// All records in file order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check whether any record belongs to `name`
    pub fn account_exists(&self, name: &str) -> bool {
        let key = AccountKey::new(name);
        self.records.iter().any(|r| key.matches(&r.account))
    }

    /// Distinct account labels exactly as stored
    ///
    /// Labels differing only in case or padding are reported separately.
    pub fn all_accounts(&self) -> HashSet<String> {
        self.records.iter().map(|r| r.account.clone()).collect()
    }

    /// Sum of every amount for the account
    pub fn balance(&self, name: &str) -> Result<f64, LedgerError> {
        Ok(total(self.account_records(name)?.map(|r| r.amount)))
    }

    /// Sum of positive amounts for the account
    pub fn total_income(&self, name: &str) -> Result<f64, LedgerError> {
        Ok(total(
            self.account_records(name)?
                .filter(|r| r.is_income())
                .map(|r| r.amount),
        ))
    }

    /// Sum of the absolute value of negative amounts for the account
    pub fn total_expenses(&self, name: &str) -> Result<f64, LedgerError> {
        Ok(total(
            self.account_records(name)?
                .filter(|r| r.is_expense())
                .map(|r| r.amount.abs()),
        ))
    }

    /// The expense with the most negative amount
    ///
    /// # Returns
    ///
    /// * `Ok(Some(&Record))` - The largest expense; the first one on ties
    /// * `Ok(None)` - The account exists but has no expense
    /// * `Err(LedgerError::UnknownAccount)` - No record for the account
    pub fn largest_expense(&self, name: &str) -> Result<Option<&Record>, LedgerError> {
        Ok(self
            .account_records(name)?
            .filter(|r| r.is_expense())
            .min_by(|a, b| a.amount.total_cmp(&b.amount)))
    }

    /// Records of the account dated exactly `date`, in file order
    pub fn transactions_on_date(
        &self,
        name: &str,
        date: &str,
    ) -> Result<Vec<&Record>, LedgerError> {
        Ok(self
            .account_records(name)?
            .filter(|r| r.date == date)
            .collect())
    }

    /// Records matching `name`, or UnknownAccount when there are none
    fn account_records<'a>(
        &'a self,
        name: &str,
    ) -> Result<impl Iterator<Item = &'a Record> + 'a, LedgerError> {
        if !self.account_exists(name) {
            debug!("No records for account '{}'", name);
            return Err(LedgerError::unknown_account(name));
        }
        let key = AccountKey::new(name);
        Ok(self.records.iter().filter(move |r| key.matches(&r.account)))
    }
}

/// Sum starting from +0.0, so an empty sum never renders as `-0.0`
fn total(amounts: impl Iterator<Item = f64>) -> f64 {
    amounts.fold(0.0, |sum, amount| sum + amount)
}

impl FromIterator<Record> for Ledger {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Ledger::new(iter.into_iter().collect())
    }
}
