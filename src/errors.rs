//! Error types for the fallible edges of the engine: configuration loading,
//! store writes and the CLI. The EVM, classification and query functions are
//! total and never return these.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single rejected field, reported with its dotted path
/// (`classification.critical_index`, `components[2].progress`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// One or more fields failed validation
    #[error("Validation failed: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// No project with the given id or code
    #[error("Project not found: {0}")]
    NotFound(String),

    /// Id belonged to a removed project; ids are never handed out twice
    #[error("Project id was removed and cannot be reused: {0}")]
    IdRetired(String),
}

impl Error {
    pub fn file_system(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Field errors carried by a validation failure, empty otherwise
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_every_field() {
        let err = Error::Validation(vec![
            FieldError::new("code", "is required"),
            FieldError::new("name", "is required"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: code: is required; name: is required"
        );
        assert_eq!(err.field_errors().len(), 2);
    }

    #[test]
    fn non_validation_errors_carry_no_fields() {
        let err = Error::IdRetired("prj-1".into());
        assert_eq!(
            err.to_string(),
            "Project id was removed and cannot be reused: prj-1"
        );
        assert!(err.field_errors().is_empty());
    }
}
