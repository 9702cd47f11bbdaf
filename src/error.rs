//! Error types for props2json.
//!
//! Every failure the converter can hit is a variant here; all of them are
//! fatal to the whole batch (no per-file recovery).

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised during a conversion run
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Source directory does not exist
    #[error("source directory not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    /// Source path exists but is not a directory
    #[error("source path is not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    /// Input file could not be opened or read
    #[error("cannot read file ({}): {reason}", .file.display())]
    ReadError { file: PathBuf, reason: String },

    /// Malformed encoding or malformed escape sequence in a properties file
    #[error("parse error ({}): {reason}", .file.display())]
    ParseError { file: PathBuf, reason: String },

    /// Filename has an underscore but no trailing locale extension,
    /// so no locale tag can be derived
    #[error("cannot derive locale from filename: {file}")]
    MalformedFilename { file: String },

    /// Output file could not be written
    #[error("cannot write file ({}): {reason}", .file.display())]
    WriteError { file: PathBuf, reason: String },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ConvertError>;
