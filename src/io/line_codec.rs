//! Line format handling for ledger records
//!
//! One record per line, five comma-separated fields in the fixed order
//! `id,date,account,amount,note`, each wrapped in double quotes on output.
//!
//! Decoding is a plain quote-toggle scan rather than a full CSV grammar:
//! a `"` flips the in-quotes state and a comma only ends a field outside quotes.
//! There is no escaping of embedded quotes, so a field whose value contains `"`
//! does not survive an encode/decode round trip.
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{format_amount, LedgerError, Record};

/// Field delimiter
pub const DELIMITER: char = ',';

/// Number of fields in a record line
pub const FIELD_COUNT: usize = 5;

const QUOTE: char = '"';

/// Split a line into fields, honouring commas inside quotes
///
/// Quote characters are kept in the accumulated text while scanning; every
/// leading and trailing `"` is trimmed when a field is flushed. Quotes in the
/// middle of a field are left as they are.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == QUOTE {
            in_quotes = !in_quotes;
        } else if ch == DELIMITER && !in_quotes {
            fields.push(current.trim_matches(QUOTE).to_string());
            current.clear();
            continue;
        }
        current.push(ch);
    }
    fields.push(current.trim_matches(QUOTE).to_string());

    fields
}

/// Decode one line into a [`Record`]
///
/// # Errors
///
/// Returns [`LedgerError::MalformedLine`] (without a line number) when the line
/// does not split into exactly five fields, or when `id` is not an integer or
/// `amount` is not a number.
pub fn decode_line(line: &str) -> Result<Record, LedgerError> {
    let [id, date, account, amount, note]: [String; FIELD_COUNT] = split_fields(line)
        .try_into()
        .map_err(|fields: Vec<String>| LedgerError::field_count(fields.len()))?;

    let id = id
        .trim()
        .parse()
        .map_err(|_| LedgerError::invalid_id(&id))?;
    let amount = amount
        .trim()
        .parse::<f64>()
        .map_err(|_| LedgerError::invalid_amount(&amount))?;

    Ok(Record {
        id,
        date,
        account,
        amount,
        note,
    })
}

/// Encode a [`Record`] as one line (without a trailing newline)
///
/// Every field is wrapped in double quotes. Encoding never fails.
pub fn encode_line(record: &Record) -> String {
    format!(
        "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\"",
        record.id,
        record.date,
        record.account,
        format_amount(record.amount),
        record.note
    )
}
