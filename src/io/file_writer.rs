//! Ledger export
//!
//! Appends encoded records to a ledger file. Existing content is never
//! truncated; the header is only written when the file does not exist yet.

use crate::io::line_codec::encode_line;
use crate::types::{LedgerError, Record};
use log::{debug, info};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header line written at the top of a newly created ledger file
pub const EXPORT_HEADER: &str = "No txn,Date,Compte,Montant,Commentaire";

/// Append records to `target`, creating it with a header if needed
///
/// # Returns
///
/// * `Ok(usize)` - Number of records appended
/// * `Err(LedgerError)` - The file could not be opened or written
pub fn append_records(records: &[Record], target: &Path) -> Result<usize, LedgerError> {
    let write_header = !target.exists();

    let file = OpenOptions::new().create(true).append(true).open(target)?;
    let mut writer = BufWriter::new(file);

    if write_header {
        debug!("Creating {} with header", target.display());
        writeln!(writer, "{}", EXPORT_HEADER)?;
    }
    for record in records {
        writeln!(writer, "{}", encode_line(record))?;
    }
    writer.flush()?;

    info!("Appended {} transactions to {}", records.len(), target.display());
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::file_reader::load_records;
    use std::fs;
    use tempfile::tempdir;

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new(1, "2024-01-01", "Cash", 100.0, "init"),
            Record::new(2, "2024-01-02", "Cash", -30.0, "food, drinks"),
        ]
    }

    #[test]
    fn test_new_file_gets_header() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("export.csv");

        let written = append_records(&sample_records(), &target).unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "No txn,Date,Compte,Montant,Commentaire\n\
             \"1\",\"2024-01-01\",\"Cash\",\"100.0\",\"init\"\n\
             \"2\",\"2024-01-02\",\"Cash\",\"-30.0\",\"food, drinks\"\n"
        );
    }

    #[test]
    fn test_existing_file_is_appended_without_header() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("export.csv");
        fs::write(&target, "existing content\n").unwrap();

        append_records(&sample_records()[..1], &target).unwrap();

        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "existing content\n\"1\",\"2024-01-01\",\"Cash\",\"100.0\",\"init\"\n"
        );
    }

    #[test]
    fn test_repeated_export_keeps_single_header() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("export.csv");

        append_records(&sample_records(), &target).unwrap();
        append_records(&sample_records(), &target).unwrap();

        let content = fs::read_to_string(&target).unwrap();
        assert_eq!(content.matches(EXPORT_HEADER).count(), 1);
        assert_eq!(content.lines().count(), 5);
    }

    #[test]
    fn test_empty_export_still_creates_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("empty.csv");

        assert_eq!(append_records(&[], &target).unwrap(), 0);
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            format!("{}\n", EXPORT_HEADER)
        );
    }

    #[test]
    fn test_exported_file_loads_back() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("export.csv");

        append_records(&sample_records(), &target).unwrap();

        assert_eq!(load_records(&target), sample_records());
    }

    #[test]
    fn test_unwritable_target_is_an_error() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("missing_dir").join("export.csv");

        let result = append_records(&sample_records(), &target);
        assert!(matches!(result, Err(LedgerError::IoError { .. })));
    }
}
