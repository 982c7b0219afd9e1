//! Custom error types for FinanzApp
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The input errors carry the localized
//! message shown to the user; the rest cover configuration and report I/O.

use thiserror::Error;

/// The main error type for FinanzApp operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FinanzError {
    /// One or both contributor names are empty (couple mode)
    #[error("Por favor, ingresa los nombres de ambas personas")]
    MissingName,

    /// Total income is zero or unset
    #[error("{}", missing_income_message(*contributors))]
    MissingIncome { contributors: usize },

    /// No distribution method was chosen
    #[error("Por favor, selecciona un método de distribución")]
    NoMethodSelected,

    /// Custom percentages do not add up to 100
    #[error("Los porcentajes personalizados deben sumar 100%")]
    InvalidDistribution { total: u32 },

    /// Method id not present in the registry
    #[error("Método de distribución desconocido: {0}")]
    UnknownMethod(String),

    /// Contributor slot outside the session's profile
    #[error("Contributor {index} does not exist (session has {contributors})")]
    ContributorIndex { index: usize, contributors: usize },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),
}

fn missing_income_message(contributors: usize) -> &'static str {
    if contributors > 1 {
        "Por favor, ingresa los salarios de ambas personas"
    } else {
        "Por favor, ingresa tu salario mensual"
    }
}

impl FinanzError {
    /// Create an "invalid distribution" error for a split with the given total
    pub fn invalid_distribution(total: u32) -> Self {
        Self::InvalidDistribution { total }
    }

    /// Create an "unknown method" error
    pub fn unknown_method(id: impl Into<String>) -> Self {
        Self::UnknownMethod(id.into())
    }

    /// Check if this error comes from user input and should be shown in the UI
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingName
                | Self::MissingIncome { .. }
                | Self::NoMethodSelected
                | Self::InvalidDistribution { .. }
                | Self::UnknownMethod(_)
        )
    }

    /// Check if this is a distribution error
    pub fn is_invalid_distribution(&self) -> bool {
        matches!(self, Self::InvalidDistribution { .. })
    }
}

impl From<std::io::Error> for FinanzError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanzError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for FinanzApp operations
pub type FinanzResult<T> = Result<T, FinanzError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinanzError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_missing_income_message_depends_on_profile() {
        let single = FinanzError::MissingIncome { contributors: 1 };
        let couple = FinanzError::MissingIncome { contributors: 2 };
        assert_eq!(single.to_string(), "Por favor, ingresa tu salario mensual");
        assert_eq!(
            couple.to_string(),
            "Por favor, ingresa los salarios de ambas personas"
        );
    }

    #[test]
    fn test_input_errors() {
        assert!(FinanzError::MissingName.is_input_error());
        assert!(FinanzError::NoMethodSelected.is_input_error());
        assert!(FinanzError::invalid_distribution(99).is_input_error());
        assert!(FinanzError::invalid_distribution(99).is_invalid_distribution());
        assert!(!FinanzError::Io("disk".into()).is_input_error());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FinanzError = io_err.into();
        assert!(matches!(err, FinanzError::Io(_)));
    }
}
