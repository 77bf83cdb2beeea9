//! I/O module
//!
//! Handles ledger file reading, writing and the line format.
//!
//! # Components
//!
//! - `line_codec` - Line format handling (decode a line, encode a record)
//! - `file_reader` - Ledger reader with iterator interface and tolerant loading
//! - `file_writer` - Append-only export with header creation

pub mod file_reader;
pub mod file_writer;
pub mod line_codec;

pub use file_reader::{load_records, LedgerReader};
pub use file_writer::{append_records, EXPORT_HEADER};
pub use line_codec::{decode_line, encode_line};
