//! Column accumulation for the streaming transpose
//!
//! One growable buffer per original input column, grown once per input row.
//! Peak memory stays close to the size of the input plus one row, instead
//! of a full row-by-column grid.

use crate::error::{Result, TransposeError};

/// Ordered set of growable buffers, one per original input column
///
/// Builder `i` holds the delimiter-joined values seen so far for column
/// `i` and becomes output row `i`. The column count is fixed by the first
/// input row; every later row must match it exactly. The accumulator is
/// strictly additive and is consumed exactly once, in order, during
/// emission.
pub struct ColumnAccumulator {
    builders: Vec<String>,
    delimiter: u8,
    rows_seen: u64,
}

impl ColumnAccumulator {
    /// Seed the accumulator from the first input row
    ///
    /// The number of fields fixes the column count for the whole run. Each
    /// builder starts as its field's value, with no leading delimiter.
    pub fn from_first_row(fields: Vec<String>, delimiter: u8) -> Self {
        ColumnAccumulator {
            builders: fields,
            delimiter,
            rows_seen: 1,
        }
    }

    /// Fold one body row into the builders
    ///
    /// Builder `i` gains the delimiter followed by `fields[i]`. A field
    /// count different from the first row's aborts the run; rows are never
    /// padded or truncated to fit.
    pub fn append_row(&mut self, fields: &[String]) -> Result<()> {
        if self.builders.is_empty() {
            // Unreachable while the per-row count check below holds
            return Err(TransposeError::InternalInvariant(
                "Column accumulator has no builders".to_string(),
            ));
        }

        if fields.len() != self.builders.len() {
            return Err(TransposeError::MalformedInput(format!(
                "Different numbers of columns per row: row {} has {} columns, expected {}",
                self.rows_seen + 1,
                fields.len(),
                self.builders.len()
            )));
        }

        for (builder, field) in self.builders.iter_mut().zip(fields) {
            builder.push(self.delimiter as char);
            builder.push_str(field);
        }

        self.rows_seen += 1;
        Ok(())
    }

    /// Number of columns, as fixed by the first row
    pub fn columns(&self) -> usize {
        self.builders.len()
    }

    /// Number of input rows folded in so far
    pub fn rows_seen(&self) -> u64 {
        self.rows_seen
    }

    /// Consume the accumulator in original-column order
    ///
    /// Each yielded string is one finished output row; its builder is
    /// dropped as soon as it is handed out, so only yet-unwritten rows
    /// remain live during emission.
    pub fn into_rows(self) -> impl Iterator<Item = String> {
        self.builders.into_iter()
    }
}
