//! Supported source formats.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Extensions accepted for upload, lowercase.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = [
    SourceFormat::Csv.extension(),
    SourceFormat::Xls.extension(),
    SourceFormat::Xlsx.extension(),
    SourceFormat::Xlsm.extension(),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Xls,
    Xlsx,
    Xlsm,
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 4] = [Self::Csv, Self::Xls, Self::Xlsx, Self::Xlsm];

    /// Case-insensitive match against [`SUPPORTED_EXTENSIONS`].
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(extension))
    }

    /// Detects the format from the file name alone; nothing is opened.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_extension(extension).ok_or_else(|| IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: extension.to_string(),
        })
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xls => "xls",
            Self::Xlsx => "xlsx",
            Self::Xlsm => "xlsm",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_supported_formats() {
        assert_eq!(
            SourceFormat::from_path(Path::new("rates.CSV")).unwrap(),
            SourceFormat::Csv
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("dir.v2/rates.xlsm")).unwrap(),
            SourceFormat::Xlsm
        );
        for ext in SUPPORTED_EXTENSIONS {
            let format = SourceFormat::from_extension(ext).unwrap();
            assert_eq!(format.extension(), ext);
        }
    }

    #[test]
    fn test_rejects_unsupported_formats() {
        let err = SourceFormat::from_path(Path::new("rates.txt")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedFormat { ref extension, .. } if extension == "txt"
        ));
        assert!(SourceFormat::from_path(Path::new("rates")).is_err());
    }

    #[test]
    fn test_supported_extensions_follow_formats() {
        assert_eq!(SUPPORTED_EXTENSIONS, ["csv", "xls", "xlsx", "xlsm"]);
        assert_eq!(SourceFormat::from_extension("XLSX"), Some(SourceFormat::Xlsx));
        assert_eq!(SourceFormat::from_extension("xlsb"), None);
        assert_eq!(SourceFormat::from_extension(""), None);
    }
}
