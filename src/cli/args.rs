use clap::Parser;
use std::path::{Path, PathBuf};

/// Query account balances, income and expenses from a ledger file
#[derive(Parser, Debug)]
#[command(name = "rust-ledger")]
#[command(about = "Query account balances, income and expenses from a ledger file", long_about = None)]
pub struct CliArgs {
    /// Ledger file loaded at startup
    #[arg(
        value_name = "INPUT",
        default_value = "data.csv",
        help = "Path to the ledger file"
    )]
    pub input_file: PathBuf,

    /// Directory export filenames are resolved against
    #[arg(
        long = "export-dir",
        value_name = "DIR",
        help = "Directory for exported files (default: current directory)"
    )]
    pub export_dir: Option<PathBuf>,
}

/// Build the export target path
///
/// A `.csv` extension is appended when the filename does not already end with it.
pub fn resolve_export_path(export_dir: Option<&Path>, filename: &str) -> PathBuf {
    let mut filename = filename.to_string();
    if !filename.ends_with(".csv") {
        filename.push_str(".csv");
    }
    match export_dir {
        Some(dir) => dir.join(filename),
        None => PathBuf::from(filename),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::defaults(&["program"], "data.csv", None)]
    #[case::input_only(&["program", "ledger.csv"], "ledger.csv", None)]
    #[case::export_dir(&["program", "--export-dir", "out"], "data.csv", Some("out"))]
    #[case::all_options(
        &["program", "--export-dir", "/tmp/exports", "books/2024.csv"],
        "books/2024.csv",
        Some("/tmp/exports")
    )]
    fn test_args_parsing(
        #[case] args: &[&str],
        #[case] input: &str,
        #[case] export_dir: Option<&str>,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.input_file, PathBuf::from(input));
        assert_eq!(parsed.export_dir, export_dir.map(PathBuf::from));
    }

    #[rstest]
    #[case::adds_extension(None, "backup", "backup.csv")]
    #[case::keeps_extension(None, "backup.csv", "backup.csv")]
    #[case::other_extension(None, "backup.txt", "backup.txt.csv")]
    #[case::joins_dir(Some("out"), "backup", "out/backup.csv")]
    fn test_resolve_export_path(
        #[case] dir: Option<&str>,
        #[case] filename: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(
            resolve_export_path(dir.map(Path::new), filename),
            PathBuf::from(expected)
        );
    }

    #[rstest]
    #[case::unknown_flag(&["program", "--format", "json"])]
    #[case::missing_dir_value(&["program", "--export-dir"])]
    #[case::extra_positional(&["program", "a.csv", "b.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
