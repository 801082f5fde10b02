//! Error types for rate table ingestion.

use std::path::PathBuf;
use thiserror::Error;

use crate::format::SUPPORTED_EXTENSIONS;

/// Errors that can occur while opening or reading a source file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Reference Errors ===
    /// File extension is not one of the supported tabular formats.
    #[error(
        "unsupported file type '{extension}': {path} (expected one of {})",
        SUPPORTED_EXTENSIONS.join(", ")
    )]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// The referenced upload does not exist.
    #[error("source file not found: {path}")]
    MissingReference { path: PathBuf },

    /// File exceeds the upload size limit.
    #[error("file too large: {path} ({size} bytes, max {max_size})")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// Text encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path} (expected UTF-8)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Failed to parse delimited text.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },

    /// Failed to open or decode a workbook.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook contains no worksheet.
    #[error("workbook has no worksheet: {path}")]
    NoWorksheet { path: PathBuf },

    /// File has no header row.
    #[error("file is empty: {path}")]
    EmptyFile { path: PathBuf },
}

/// Request-level classification of ingestion failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedFormat,
    ParseError,
    MissingReference,
}

impl IngestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Self::MissingReference { .. } => ErrorKind::MissingReference,
            Self::FileTooLarge { .. }
            | Self::FileRead { .. }
            | Self::UnsupportedEncoding { .. }
            | Self::CsvParse { .. }
            | Self::Workbook { .. }
            | Self::NoWorksheet { .. }
            | Self::EmptyFile { .. } => ErrorKind::ParseError,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::MissingReference {
            path: PathBuf::from("/uploads/rates.csv"),
        };
        assert_eq!(err.to_string(), "source file not found: /uploads/rates.csv");

        let err = IngestError::UnsupportedFormat {
            path: PathBuf::from("rates.pdf"),
            extension: "pdf".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported file type 'pdf': rates.pdf (expected one of csv, xls, xlsx, xlsm)"
        );
    }

    #[test]
    fn test_error_kind() {
        let err = IngestError::EmptyFile {
            path: PathBuf::from("rates.csv"),
        };
        assert_eq!(err.kind(), ErrorKind::ParseError);

        let err = IngestError::FileTooLarge {
            path: PathBuf::from("rates.csv"),
            size: 10,
            max_size: 5,
        };
        assert_eq!(err.kind(), ErrorKind::ParseError);
    }
}
