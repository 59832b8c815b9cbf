//! # csvtranspose
//!
//! Streaming CSV transposer: rows become columns and columns become rows,
//! in one forward pass over the input.
//!
//! Built for large unquoted matrices (originally genomic call files) where
//! a naive in-memory grid would be wasteful. Instead of materializing the
//! grid, the engine keeps one growable buffer per input column and appends
//! to each as rows stream by; peak memory stays close to the size of the
//! input plus one row. Rectangularity is enforced strictly - any row whose
//! field count differs from the first row's aborts the run before the
//! destination file is created.
//!
//! Compressed files (`.csv.zst`, `.csv.zip`, `.csv.gz`) are handled
//! transparently on both sides, auto-detected from the extension.
//!
//! # Examples
//!
//! ```no_run
//! use csvtranspose::Transposer;
//!
//! let summary = Transposer::new().run("wide.csv", "tall.csv").unwrap();
//! println!(
//!     "Transposed {} rows x {} columns",
//!     summary.rows_read, summary.columns
//! );
//! ```
//!
//! The pieces are also usable on their own: [`LineReader`] for terminator-
//! stripped line input, [`FieldSplitter`] for delimiter-only splitting,
//! [`ColumnAccumulator`] for the transpose state, and [`RowWriter`] for
//! line-oriented output.

pub mod accumulator;
pub mod csv;
pub mod error;
pub mod line_reader;
pub mod row_writer;
pub mod transpose;

pub use accumulator::ColumnAccumulator;
pub use csv::FieldSplitter;
pub use error::{Result, TransposeError};
pub use line_reader::LineReader;
pub use row_writer::RowWriter;
pub use transpose::{TransposeSummary, Transposer};
