//! Error handling for the analysis pipeline.
//!
//! Unresolved routines and unresolved callees are not errors: they are
//! represented as explicit absent values in the result data so that a
//! partially-resolvable binary still produces useful output. The variants
//! here cover the conditions that genuinely stop a pipeline run: an
//! executable of the wrong format, or a program export that cannot be
//! loaded at all.

use thiserror::Error;

/// Errors surfaced by the analysis pipeline
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The executable format label is not the supported platform.
    ///
    /// This is a precondition check: the calling stage must not run any
    /// further analysis on such a binary.
    #[error("unsupported executable format: {0}")]
    UnsupportedFormat(String),

    /// An address literal in a program export could not be parsed.
    #[error("invalid address literal: {0}")]
    InvalidAddress(String),

    /// A program export was not valid JSON or did not match the expected shape.
    #[error("malformed program export: {0}")]
    MalformedExport(#[from] serde_json::Error),

    /// File I/O failed while reading an export or writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the analysis pipeline
pub type Result<T> = std::result::Result<T, AnalyzerError>;
