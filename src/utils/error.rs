use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeatError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for '{field}': {value} - {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error for '{field}': {value} - {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SeatError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SeatError::CsvError(_) => ErrorSeverity::Medium,
            SeatError::ValidationError { .. }
            | SeatError::ConfigError { .. }
            | SeatError::MissingConfigError { .. }
            | SeatError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            SeatError::IoError(_) | SeatError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            SeatError::CsvError(e) => format!("Could not write or read CSV data: {}", e),
            SeatError::IoError(e) => format!("File operation failed: {}", e),
            SeatError::SerializationError(e) => format!("Could not build the balance report: {}", e),
            SeatError::ConfigError { message } => format!("Configuration problem: {}", message),
            SeatError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            SeatError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            SeatError::ValidationError { field, reason, .. } => {
                format!("Paddler field '{}' rejected: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SeatError::CsvError(_) => "Check that the roster file is a comma-separated file with a header row",
            SeatError::IoError(_) => "Check that the roster files exist and the output directory is writable",
            SeatError::SerializationError(_) => "Re-run with --verbose and report the log output",
            SeatError::ConfigError { .. } | SeatError::MissingConfigError { .. } => {
                "Review the configuration file or command line flags"
            }
            SeatError::InvalidConfigValueError { .. } => "Fix the highlighted setting and try again",
            SeatError::ValidationError { .. } => {
                "Paddlers need a non-empty name and a non-negative weight"
            }
        }
    }
}

impl From<toml::de::Error> for SeatError {
    fn from(e: toml::de::Error) -> Self {
        SeatError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, SeatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        let io = SeatError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);

        let invalid = SeatError::ValidationError {
            field: "name".to_string(),
            value: String::new(),
            reason: "empty".to_string(),
        };
        assert_eq!(invalid.severity(), ErrorSeverity::High);
        assert!(invalid.user_friendly_message().contains("name"));
    }
}
