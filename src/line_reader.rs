//! Line-by-line input reading with streaming support and decompression

use crate::error::{Result, TransposeError};
use s_zip::StreamingZipReader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Line reader over a CSV input file
///
/// Produces raw text lines stripped of their terminators in a single
/// forward pass; the reader is not restartable. A clean end-of-stream
/// (`Ok(None)`) is distinct from a read failure (`Err`) - the caller
/// treats a failure before end-of-stream as fatal.
/// Automatically handles compressed files (.csv.zst, .csv.gz, .csv.zip).
///
/// # Examples
///
/// ```no_run
/// use csvtranspose::line_reader::LineReader;
///
/// let mut reader = LineReader::open("data.csv").unwrap();
///
/// while let Some(line) = reader.read_line().unwrap() {
///     println!("{}", line);
/// }
/// ```
#[derive(Debug)]
pub struct LineReader {
    // Input sources (one active)
    direct_reader: Option<BufReader<File>>,
    decompressed_lines: Option<std::vec::IntoIter<String>>,

    // State
    line_buffer: String,
    line_count: u64,
}

impl LineReader {
    /// Open a CSV file for reading - auto-detects compression from the extension
    ///
    /// # File Extensions
    /// - `.csv` → Uncompressed, direct read
    /// - `.csv.zst`, `.csv.zip` → Zstd decompression
    /// - `.csv.gz` → Deflate/Gzip decompression
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use csvtranspose::line_reader::LineReader;
    ///
    /// // Plain CSV
    /// let reader = LineReader::open("data.csv").unwrap();
    ///
    /// // Compressed CSV (auto-detected)
    /// let reader = LineReader::open("data.csv.zst").unwrap();
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_str().unwrap_or("");

        if path_str.ends_with(".csv.zst")
            || path_str.ends_with(".csv.zip")
            || path_str.ends_with(".csv.gz")
        {
            // Compressed - use s-zip
            let mut zip = StreamingZipReader::open(path_ref)
                .map_err(|e| TransposeError::OpenInput(format!("Failed to open ZIP: {}", e)))?;

            // Find first .csv entry
            let entry_name = zip
                .entries()
                .iter()
                .find(|e| e.name.ends_with(".csv"))
                .or_else(|| zip.entries().first())
                .ok_or_else(|| {
                    TransposeError::OpenInput("No CSV entry found in archive".to_string())
                })?
                .name
                .clone();

            // Read decompressed data and split into lines up front
            let data = zip.read_entry_by_name(&entry_name).map_err(|e| {
                TransposeError::ReadInput(format!("Failed to read ZIP entry: {}", e))
            })?;
            let content = String::from_utf8_lossy(&data).to_string();
            let lines: Vec<String> = content.lines().map(|s| s.to_string()).collect();

            Ok(LineReader {
                direct_reader: None,
                decompressed_lines: Some(lines.into_iter()),
                line_buffer: String::new(),
                line_count: 0,
            })
        } else {
            // Plain CSV
            let file = File::open(path_ref).map_err(|e| {
                TransposeError::OpenInput(format!("Failed to open CSV file: {}", e))
            })?;

            Ok(LineReader {
                direct_reader: Some(BufReader::new(file)),
                decompressed_lines: None,
                line_buffer: String::with_capacity(1024),
                line_count: 0,
            })
        }
    }

    /// Read a single line
    ///
    /// Returns `Ok(None)` when a clean end-of-stream is reached. A final
    /// line without a terminator is still a normal line.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        if let Some(ref mut reader) = self.direct_reader {
            self.line_buffer.clear();

            let bytes_read = reader
                .read_line(&mut self.line_buffer)
                .map_err(|e| TransposeError::ReadInput(format!("Failed to read line: {}", e)))?;

            if bytes_read == 0 {
                return Ok(None); // EOF
            }

            // Remove trailing newline
            if self.line_buffer.ends_with('\n') {
                self.line_buffer.pop();
                if self.line_buffer.ends_with('\r') {
                    self.line_buffer.pop();
                }
            }

            self.line_count += 1;
            Ok(Some(self.line_buffer.clone()))
        } else if let Some(ref mut lines) = self.decompressed_lines {
            match lines.next() {
                Some(line) => {
                    self.line_count += 1;
                    Ok(Some(line))
                }
                None => Ok(None), // EOF
            }
        } else {
            Err(TransposeError::ReadInput("No reader available".to_string()))
        }
    }

    /// Get iterator over lines
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use csvtranspose::line_reader::LineReader;
    ///
    /// let mut reader = LineReader::open("data.csv").unwrap();
    ///
    /// for line_result in reader.lines() {
    ///     let line = line_result.unwrap();
    ///     println!("{}", line);
    /// }
    /// ```
    pub fn lines(&mut self) -> LineIterator<'_> {
        LineIterator { reader: self }
    }

    /// Get the number of lines read so far
    pub fn line_count(&self) -> u64 {
        self.line_count
    }
}

/// Iterator over input lines
pub struct LineIterator<'a> {
    reader: &'a mut LineReader,
}

impl<'a> Iterator for LineIterator<'a> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
