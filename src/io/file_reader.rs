//! Ledger file reader with iterator interface
//!
//! Streams records out of a ledger file, delegating line format concerns to the
//! `line_codec` module.
//!
//! # Iterator Interface
//!
//! [`LedgerReader`] yields `Result<Record, LedgerError>` for every line after the
//! header that is not blank:
//!
//! ```no_run
//! use rust_ledger::io::file_reader::LedgerReader;
//! use std::path::Path;
//!
//! let reader = LedgerReader::open(Path::new("data.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("{}", record),
//!         Err(e) => eprintln!("Skipped: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Opening errors (file not found, permission denied) are returned from `open()`
//! - Individual decode errors are yielded as Err variants carrying the line number
//! - [`load_records`] turns both into log diagnostics and never fails

use crate::io::line_codec::decode_line;
use crate::types::{LedgerError, Record};
use log::{error, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// Streaming reader over the lines of a ledger file
///
/// The first line is treated as a header and skipped, as are blank lines.
#[derive(Debug)]
pub struct LedgerReader<R> {
    lines: Lines<R>,
    line_num: u64,
}

impl LedgerReader<BufReader<File>> {
    /// Open a ledger file for reading
    ///
    /// # Errors
    ///
    /// * `LedgerError::FileNotFound` if nothing exists at `path`
    /// * `LedgerError::IoError` for any other failure to open it
    pub fn open(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LedgerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LedgerError::from(e),
        })?;

        Ok(Self::from_reader(BufReader::with_capacity(8 * 1024, file)))
    }
}

impl<R: BufRead> LedgerReader<R> {
    /// Wrap any buffered source of ledger lines
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_num: 0,
        }
    }
}

impl<R: BufRead> Iterator for LedgerReader<R> {
    type Item = Result<Record, LedgerError>;

    /// Get the next decoded record
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Record))` - Successfully decoded line
    /// * `Some(Err(LedgerError))` - Decode error with line number, or a read error
    /// * `None` - End of input reached
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_num += 1;

            // Header
            if self.line_num == 1 {
                continue;
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            return Some(decode_line(line).map_err(|e| e.with_line(self.line_num)));
        }
    }
}

/// Load every decodable record from a ledger file
///
/// Lines that fail to decode are logged and skipped. A file that cannot be
/// opened or read through to the end is logged and yields an empty list, so
/// the session carries on without a partial ledger.
pub fn load_records(path: &Path) -> Vec<Record> {
    let reader = match LedgerReader::open(path) {
        Ok(reader) => reader,
        Err(e) => {
            error!("Unable to load ledger '{}': {}", path.display(), e);
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for result in reader {
        match result {
            Ok(record) => records.push(record),
            Err(e @ LedgerError::MalformedLine { .. }) => warn!("Skipping line: {}", e),
            Err(e) => {
                error!("Unable to load ledger '{}': {}", path.display(), e);
                return Vec::new();
            }
        }
    }

    info!(
        "Loaded {} transactions from {}",
        records.len(),
        path.display()
    );
    records
}
