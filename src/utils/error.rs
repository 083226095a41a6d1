use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Program invariant violated: {message}")]
    InvariantViolation { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Program,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PredictorError {
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::TomlParseError(_) | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::InvariantViolation { .. } => ErrorCategory::Program,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Program => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::TomlParseError(e) => format!("The configuration file is not valid TOML: {}", e),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::InvariantViolation { message } => {
                format!("Internal error, the game got into an impossible state: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::TomlParseError(_) => "Fix the TOML syntax in the configuration file",
            Self::InvalidConfigValueError { .. } => {
                "Review the [matching] and [output] sections of the configuration"
            }
            Self::InvariantViolation { .. } => "Start a new game; please report this as a bug",
        }
    }
}

pub type Result<T> = std::result::Result<T, PredictorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_violation_is_critical() {
        let err = PredictorError::invariant("probe requested before start");
        assert_eq!(err.category(), ErrorCategory::Program);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.to_string().contains("probe requested before start"));
    }

    #[test]
    fn test_every_category_maps_to_an_exit_severity() {
        let io = PredictorError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(io.category(), ErrorCategory::Io);
        assert_eq!(io.severity(), ErrorSeverity::Medium);

        let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let parse = PredictorError::from(toml_err);
        assert_eq!(parse.category(), ErrorCategory::Configuration);
        assert_eq!(parse.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = PredictorError::InvalidConfigValueError {
            field: "matching.affirmative".to_string(),
            value: "".to_string(),
            reason: "empty token".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("matching.affirmative"));
    }
}
