//! Menu session loop
//!
//! Drives one interactive session: print the menu, read a selection, prompt
//! for the arguments the chosen query needs, print the result.
//!
//! # Error Handling
//!
//! - Unknown accounts are printed and the loop carries on
//! - Non-numeric and out-of-range selections are reported and the menu is shown again
//! - End of input ends the session like Quit
//! - Export failures and failures writing to the output end the session with an error

use crate::cli::resolve_export_path;
use crate::core::Ledger;
use crate::io::append_records;
use crate::menu::MenuAction;
use crate::types::{format_amount, LedgerError};
use log::error;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::path::PathBuf;

/// One interactive session over a loaded ledger
pub struct MenuSession<'a, R, W> {
    ledger: &'a Ledger,
    input: R,
    output: W,
    export_dir: Option<PathBuf>,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(ledger: &'a Ledger, input: R, output: W) -> Self {
        MenuSession {
            ledger,
            input,
            output,
            export_dir: None,
        }
    }

    /// Resolve export filenames against `dir` instead of the working directory
    pub fn with_export_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.export_dir = dir;
        self
    }

    /// Consume the session and hand back the output handle
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until Quit or end of input
    ///
    /// # Errors
    ///
    /// Returns an error if an export fails or the output cannot be written.
    pub fn run(&mut self) -> Result<(), LedgerError> {
        loop {
            self.display_menu()?;
            let Some(choice) = self.prompt("Your choice: ")? else {
                break;
            };

            let Ok(selection) = choice.trim().parse::<i64>() else {
                writeln!(self.output, "Please enter a valid number.")?;
                continue;
            };

            match MenuAction::from_selection(selection) {
                Some(MenuAction::Quit) => break,
                Some(action) => {
                    if self.handle(action)?.is_break() {
                        break;
                    }
                }
                None => writeln!(self.output, "Invalid selection.")?,
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn display_menu(&mut self) -> Result<(), LedgerError> {
        writeln!(self.output, "Menu:")?;
        for action in MenuAction::ALL {
            writeln!(self.output, "{}. {}", action.number(), action.label())?;
        }
        Ok(())
    }

    /// Run one action; Break means input ran out mid-prompt
    fn handle(&mut self, action: MenuAction) -> Result<ControlFlow<()>, LedgerError> {
        let ledger = self.ledger;

        match action {
            MenuAction::ListAccounts => {
                let mut accounts: Vec<_> = ledger.all_accounts().into_iter().collect();
                accounts.sort();
                writeln!(self.output, "Accounts:")?;
                for account in accounts {
                    writeln!(self.output, " - {}", account)?;
                }
            }
            MenuAction::Balance => {
                let Some(account) = self.prompt_account()? else {
                    return Ok(ControlFlow::Break(()));
                };
                match ledger.balance(&account) {
                    Ok(balance) => writeln!(
                        self.output,
                        "The balance of {} is {}.",
                        account,
                        format_amount(balance)
                    )?,
                    Err(e) => writeln!(self.output, "{}", e)?,
                }
            }
            MenuAction::TotalIncome => {
                let Some(account) = self.prompt_account()? else {
                    return Ok(ControlFlow::Break(()));
                };
                match ledger.total_income(&account) {
                    Ok(income) => writeln!(
                        self.output,
                        "The total income of {} is {}.",
                        account,
                        format_amount(income)
                    )?,
                    Err(e) => writeln!(self.output, "{}", e)?,
                }
            }
            MenuAction::TotalExpenses => {
                let Some(account) = self.prompt_account()? else {
                    return Ok(ControlFlow::Break(()));
                };
                match ledger.total_expenses(&account) {
                    Ok(expenses) => writeln!(
                        self.output,
                        "The total expenses of {} are {}.",
                        account,
                        format_amount(expenses)
                    )?,
                    Err(e) => writeln!(self.output, "{}", e)?,
                }
            }
            MenuAction::LargestExpense => {
                let Some(account) = self.prompt_account()? else {
                    return Ok(ControlFlow::Break(()));
                };
                match ledger.largest_expense(&account) {
                    Ok(Some(record)) => writeln!(
                        self.output,
                        "The largest expense of {} is {}.",
                        account,
                        format_amount(record.amount)
                    )?,
                    Ok(None) => writeln!(self.output, "No expense found for {}.", account)?,
                    Err(e) => writeln!(self.output, "{}", e)?,
                }
            }
            MenuAction::TransactionsOnDate => {
                let Some(account) = self.prompt_account()? else {
                    return Ok(ControlFlow::Break(()));
                };
                let Some(date) = self.prompt("Enter the date (YYYY-MM-DD): ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                match ledger.transactions_on_date(&account, &date) {
                    Ok(records) => {
                        writeln!(self.output, "Transactions for {} on {}:", account, date)?;
                        for record in records {
                            writeln!(self.output, " - {}", record)?;
                        }
                    }
                    Err(e) => writeln!(self.output, "{}", e)?,
                }
            }
            MenuAction::Export => {
                let Some(filename) = self.prompt("File name for the export: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                let target = resolve_export_path(self.export_dir.as_deref(), filename.trim());
                let written = append_records(ledger.records(), &target).map_err(|e| {
                    error!("Export to {} failed: {}", target.display(), e);
                    e
                })?;
                writeln!(
                    self.output,
                    "{} transactions exported to {}.",
                    written,
                    target.display()
                )?;
            }
            MenuAction::Quit => return Ok(ControlFlow::Break(())),
        }

        Ok(ControlFlow::Continue(()))
    }

    fn prompt_account(&mut self) -> Result<Option<String>, LedgerError> {
        self.prompt("Enter the account name: ")
    }

    /// Print `label` and read one line, without its line ending
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, LedgerError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
