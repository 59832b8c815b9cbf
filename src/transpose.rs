//! Streaming transpose orchestration
//!
//! One forward pass over the input grows the column accumulator; one
//! forward pass over the accumulator emits the output. The input file is
//! closed before the destination is created, so a malformed or unreadable
//! input never produces an output file.

use crate::accumulator::ColumnAccumulator;
use crate::csv::FieldSplitter;
use crate::error::{Result, TransposeError};
use crate::line_reader::LineReader;
use crate::row_writer::RowWriter;
use std::path::Path;

/// Summary of a completed transpose run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransposeSummary {
    /// Input rows consumed (each becomes one output column)
    pub rows_read: u64,
    /// Input columns (each becomes one output row)
    pub columns: usize,
}

/// Streaming CSV transposer
///
/// Reads the input once, growing one output-row builder per input column,
/// then writes the builders out in original-column order. Every row after
/// the first must have the same number of fields as the first; anything
/// else aborts the run before the destination is touched.
///
/// # Examples
///
/// ```no_run
/// use csvtranspose::Transposer;
///
/// let summary = Transposer::new().run("wide.csv", "tall.csv").unwrap();
/// println!("{} rows -> {} rows", summary.rows_read, summary.columns);
/// ```
///
/// # Custom delimiter
///
/// ```no_run
/// use csvtranspose::Transposer;
///
/// Transposer::new()
///     .delimiter(b'\t')
///     .run("wide.tsv", "tall.tsv")
///     .unwrap();
/// ```
pub struct Transposer {
    delimiter: u8,
}

impl Transposer {
    /// Create a transposer with the default comma delimiter
    pub fn new() -> Self {
        Transposer { delimiter: b',' }
    }

    /// Set custom delimiter (builder pattern)
    pub fn delimiter(mut self, delim: u8) -> Self {
        self.delimiter = delim;
        self
    }

    /// Transpose `input` into `output`
    ///
    /// The destination is created only after the whole input has been
    /// consumed and validated, and is truncated if it already exists.
    pub fn run<P, Q>(&self, input: P, output: Q) -> Result<TransposeSummary>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        // Input pass: the reader lives only inside accumulate, so the
        // input file is closed before the destination is opened.
        let accumulator = self.accumulate(input)?;

        let summary = TransposeSummary {
            rows_read: accumulator.rows_seen(),
            columns: accumulator.columns(),
        };

        // Output pass: drain the builders in original-column order.
        let mut writer = RowWriter::create(output)?;
        for row in accumulator.into_rows() {
            writer.write_line(&row)?;
        }
        writer.save()?;

        Ok(summary)
    }

    /// Single forward pass over the input, building the accumulator
    fn accumulate<P: AsRef<Path>>(&self, input: P) -> Result<ColumnAccumulator> {
        let mut reader = LineReader::open(input)?;
        let splitter = FieldSplitter::new(self.delimiter);

        // The first row fixes the column count. No lines at all is a read
        // error, not an empty success.
        let first_line = reader
            .read_line()?
            .ok_or_else(|| TransposeError::ReadInput("Input CSV file is empty".to_string()))?;
        let mut accumulator =
            ColumnAccumulator::from_first_row(splitter.split_line(&first_line), self.delimiter);

        while let Some(line) = reader.read_line()? {
            accumulator.append_row(&splitter.split_line(&line))?;
        }

        Ok(accumulator)
    }
}

impl Default for Transposer {
    fn default() -> Self {
        Self::new()
    }
}
