use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts driving `nac-tco` can tell argument mistakes apart from
/// runtime failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Comparison generated and presented
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (catalog, config, file I/O, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for TCO comparison.
///
/// Every message ends with a hint so the CLI can print it as-is.
#[derive(Debug, Error)]
pub enum TcoError {
    #[error("Vendor catalog not found: {path}\n\n💡 Hint: {suggestion}")]
    CatalogNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse vendor catalog: {path}\nDetails: {details}\n\n💡 Hint: Catalog files must contain a top-level 'vendors' list in JSON, YAML or TOML")]
    CatalogParseError { path: PathBuf, details: String },

    #[error("Invalid vendor catalog: {reason}\n\n💡 Hint: Check vendor ids, prices and capability scores (0-100)")]
    InvalidCatalog { reason: String },

    #[error("No vendors left to compare\nDetails: {details}\n\n💡 Hint: Check the --vendor selection against the catalog ids")]
    EmptyComparison { details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for newtypes and builders
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_catalog_not_found_display() {
        let error = TcoError::CatalogNotFound {
            path: PathBuf::from("/test/vendors.json"),
            suggestion: "Pass an existing file to --catalog".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Vendor catalog not found"));
        assert!(display.contains("/test/vendors.json"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("--catalog"));
    }

    #[test]
    fn test_catalog_parse_error_display() {
        let error = TcoError::CatalogParseError {
            path: PathBuf::from("/test/vendors.yml"),
            details: "missing field `name`".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse vendor catalog"));
        assert!(display.contains("missing field `name`"));
        assert!(display.contains("'vendors' list"));
    }

    #[test]
    fn test_invalid_catalog_display() {
        let error = TcoError::InvalidCatalog {
            reason: "duplicate vendor id 'cisco'".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid vendor catalog"));
        assert!(display.contains("duplicate vendor id 'cisco'"));
    }

    #[test]
    fn test_empty_comparison_display() {
        let error = TcoError::EmptyComparison {
            details: "unknown vendor ids: acme".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("No vendors left to compare"));
        assert!(display.contains("acme"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = TcoError::FileWriteError {
            path: PathBuf::from("/test/report.md"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/report.md"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_security_error_display() {
        let error = TcoError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Symbolic links are not allowed"));
        assert!(display.contains("Use a regular file instead"));
    }
}
