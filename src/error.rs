//! Error types for resume loading, assembly and writing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning a resume config into a document
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Config file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Missing required field: {path}")]
    MissingField { path: String },

    #[error("Field {path} must be {expected}")]
    InvalidField { path: String, expected: &'static str },

    #[error("Invalid color {value:?}{}: expected 6 hex digits, optionally prefixed with '#'", field_suffix(.field))]
    InvalidColor { value: String, field: Option<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write document package: {0}")]
    Zip(#[from] zip::result::ZipError),
}

fn field_suffix(field: &Option<String>) -> String {
    field
        .as_ref()
        .map(|f| format!(" in {}", f))
        .unwrap_or_default()
}

impl ResumeError {
    pub fn missing(path: impl Into<String>) -> Self {
        ResumeError::MissingField { path: path.into() }
    }

    /// Attach the config field a color came from
    pub fn at_field(self, field: impl Into<String>) -> Self {
        match self {
            ResumeError::InvalidColor { value, .. } => ResumeError::InvalidColor {
                value,
                field: Some(field.into()),
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ResumeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = ResumeError::missing("header.name");
        assert_eq!(err.to_string(), "Missing required field: header.name");
    }

    #[test]
    fn test_invalid_color_with_field() {
        let err = ResumeError::InvalidColor {
            value: "XYZ".into(),
            field: None,
        }
        .at_field("theme.primary_color");
        assert!(err.to_string().contains("\"XYZ\" in theme.primary_color"));
    }
}
