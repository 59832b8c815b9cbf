//! Transposed row writing with streaming support and compression

use crate::csv::CompressionMethod;
use crate::error::{Result, TransposeError};
use s_zip::StreamingZipWriter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Line-oriented writer for the transposed output
///
/// Writes finished output rows one line at a time. The destination is
/// truncated if it already exists, never appended. A failure to create
/// the destination is distinct from a failure to write to it, because
/// the two map to different exit codes.
///
/// # Examples
///
/// ```no_run
/// use csvtranspose::row_writer::RowWriter;
///
/// let mut writer = RowWriter::create("output.csv").unwrap();
/// writer.write_line("a,1,4").unwrap();
/// writer.write_line("b,2,5").unwrap();
/// writer.save().unwrap();
/// ```
///
/// # Compression
///
/// Auto-detects compression from the file extension:
/// - `.csv` → Uncompressed
/// - `.csv.zst` or `.csv.zip` → Zstd compression (level 3)
/// - `.csv.gz` → Deflate/Gzip compression (level 6)
pub struct RowWriter {
    // Dual-mode output
    zip_writer: Option<StreamingZipWriter<File>>,
    direct_writer: Option<BufWriter<File>>,

    // State
    row_count: u64,
    line_ending: &'static [u8],
}

impl std::fmt::Debug for RowWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowWriter")
            .field("zip_writer", &self.zip_writer.is_some())
            .field("direct_writer", &self.direct_writer.is_some())
            .field("row_count", &self.row_count)
            .field("line_ending", &self.line_ending)
            .finish()
    }
}

impl RowWriter {
    /// Create the destination file - auto-detects compression from the extension
    ///
    /// An existing file is truncated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use csvtranspose::row_writer::RowWriter;
    ///
    /// // Plain CSV
    /// let writer = RowWriter::create("data.csv").unwrap();
    ///
    /// // Zstd compressed
    /// let writer = RowWriter::create("data.csv.zst").unwrap();
    /// ```
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_str().unwrap_or("");

        if path_str.ends_with(".csv.zst") || path_str.ends_with(".csv.zip") {
            Self::with_compression(path_ref, CompressionMethod::Zstd, 3)
        } else if path_str.ends_with(".csv.gz") {
            Self::with_compression(path_ref, CompressionMethod::Deflate, 6)
        } else {
            // Plain CSV - direct file write
            let file = File::create(path_ref).map_err(|e| {
                TransposeError::OpenOutput(format!("Failed to create CSV file: {}", e))
            })?;

            Ok(RowWriter {
                zip_writer: None,
                direct_writer: Some(BufWriter::new(file)),
                row_count: 0,
                line_ending: b"\n",
            })
        }
    }

    /// Create a writer with explicit compression method and level
    ///
    /// # Arguments
    /// * `path` - Output file path
    /// * `method` - Compression method (Zstd or Deflate)
    /// * `level` - Compression level:
    ///   - Zstd: 1-21 (recommend 3 for balanced)
    ///   - Deflate: 0-9 (recommend 6 for balanced)
    pub fn with_compression<P: AsRef<Path>>(
        path: P,
        method: CompressionMethod,
        level: u32,
    ) -> Result<Self> {
        let path_ref = path.as_ref();

        // Create ZIP with single CSV entry
        let mut zip = StreamingZipWriter::with_method(path_ref, method, level).map_err(|e| {
            TransposeError::OpenOutput(format!("Failed to create ZIP writer: {}", e))
        })?;

        // Entry name: extract from path or use "data.csv"
        let entry_name = path_ref
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| {
                let clean = s
                    .trim_end_matches(".csv")
                    .trim_end_matches(".zst")
                    .trim_end_matches(".gz");
                format!("{}.csv", clean)
            })
            .unwrap_or_else(|| "data.csv".to_string());

        zip.start_entry(&entry_name).map_err(|e| {
            TransposeError::OpenOutput(format!("Failed to start ZIP entry: {}", e))
        })?;

        Ok(RowWriter {
            zip_writer: Some(zip),
            direct_writer: None,
            row_count: 0,
            line_ending: b"\n",
        })
    }

    /// Write one finished output row as a line
    ///
    /// Lines already written stay in the destination if a later write
    /// fails; there is no rollback.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        if let Some(ref mut zip) = self.zip_writer {
            zip.write_data(line.as_bytes())
                .map_err(|e| TransposeError::WriteFailure(format!("Failed to write to ZIP: {}", e)))?;
            zip.write_data(self.line_ending)
                .map_err(|e| TransposeError::WriteFailure(format!("Failed to write to ZIP: {}", e)))?;
        } else if let Some(ref mut writer) = self.direct_writer {
            writer.write_all(line.as_bytes()).map_err(|e| {
                TransposeError::WriteFailure(format!("Failed to write to file: {}", e))
            })?;
            writer.write_all(self.line_ending).map_err(|e| {
                TransposeError::WriteFailure(format!("Failed to write to file: {}", e))
            })?;
        }

        self.row_count += 1;
        Ok(())
    }

    /// Get the number of lines written
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Finalize and save the output file
    ///
    /// This must be called to properly close the file. Consumes the writer.
    pub fn save(mut self) -> Result<()> {
        if let Some(zip) = self.zip_writer.take() {
            zip.finish()
                .map_err(|e| TransposeError::WriteFailure(format!("Failed to finish ZIP: {}", e)))?;
        } else if let Some(mut writer) = self.direct_writer.take() {
            writer
                .flush()
                .map_err(|e| TransposeError::WriteFailure(format!("Failed to flush file: {}", e)))?;
        }
        Ok(())
    }
}
