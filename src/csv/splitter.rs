//! Field splitting on a fixed delimiter

/// Splits one line of input into fields
///
/// Every occurrence of the delimiter separates two fields; there is no
/// quoting or escaping. An empty line yields a single empty field,
/// consistent with standard split-on-delimiter semantics.
pub struct FieldSplitter {
    delimiter: u8,
}

impl FieldSplitter {
    /// Create a splitter for the given delimiter byte
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Split a line into its fields
    ///
    /// Holds no state across calls; the caller consumes the result
    /// immediately.
    pub fn split_line(&self, line: &str) -> Vec<String> {
        line.split(self.delimiter as char)
            .map(|field| field.to_string())
            .collect()
    }
}
