//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input could not be accepted as given.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Budget or actual figures are missing.
    #[error("Missing data: {0}")]
    MissingData(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading an input file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::MissingData(_) => 3,
            Self::Config(_) => 4,
            Self::Io(_) => 5,
            Self::Internal(_) => 1,
        }
    }

    /// Returns the stable error code used in JSON output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::MissingData(_) => "MISSING_DATA",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(AppError::Validation(String::new()).exit_code(), 2);
        assert_eq!(AppError::MissingData(String::new()).exit_code(), 3);
        assert_eq!(AppError::Config(String::new()).exit_code(), 4);
        assert_eq!(AppError::Io(String::new()).exit_code(), 5);
        assert_eq!(AppError::Internal(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::MissingData(String::new()).error_code(),
            "MISSING_DATA"
        );
        assert_eq!(AppError::Config(String::new()).error_code(), "CONFIG_ERROR");
        assert_eq!(AppError::Io(String::new()).error_code(), "IO_ERROR");
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
        assert_eq!(
            AppError::MissingData("msg".into()).to_string(),
            "Missing data: msg"
        );
        assert_eq!(
            AppError::Config("msg".into()).to_string(),
            "Configuration error: msg"
        );
        assert_eq!(AppError::Io("msg".into()).to_string(), "I/O error: msg");
        assert_eq!(
            AppError::Internal("msg".into()).to_string(),
            "Internal error: msg"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, AppError::Io(ref msg) if msg == "gone"));
    }
}
