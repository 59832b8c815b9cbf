//! Error types for the transpose engine

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, TransposeError>;

/// Errors produced by the transpose engine
///
/// Every variant is terminal: nothing is retried or recovered. Each kind
/// maps to a distinct process exit code via [`TransposeError::exit_code`]
/// so calling scripts can branch on the failure kind.
#[derive(Error, Debug)]
pub enum TransposeError {
    /// Input file could not be opened
    #[error("Error opening input CSV file: {0}")]
    OpenInput(String),

    /// Input stream failed before a clean end-of-stream was reached
    #[error("Error reading input CSV file: {0}")]
    ReadInput(String),

    /// Rows disagree on the number of columns
    #[error("Malformatted CSV file: {0}")]
    MalformedInput(String),

    /// Defensive guard; unreachable while per-row validation holds
    #[error("Internal error: {0}")]
    InternalInvariant(String),

    /// Output file could not be created or truncated
    #[error("Error opening output CSV file: {0}")]
    OpenOutput(String),

    /// Output stream failed mid-emission
    #[error("Error writing output CSV file: {0}")]
    WriteFailure(String),
}

impl TransposeError {
    /// Process exit code for this error kind
    ///
    /// Code 1 is reserved for the argument check in the binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            TransposeError::OpenInput(_) => 2,
            TransposeError::ReadInput(_) => 3,
            TransposeError::InternalInvariant(_) => 4,
            TransposeError::MalformedInput(_) => 5,
            TransposeError::OpenOutput(_) => 6,
            TransposeError::WriteFailure(_) => 7,
        }
    }
}
