use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Invalid payment amount: {amount} (must be positive)")]
    InvalidAmount { amount: f64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid menu input: '{input}'")]
    InvalidMenuInput { input: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Payment,
    Io,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::InvalidAmount { .. } => ErrorCategory::Payment,
            DemoError::IoError(_) => ErrorCategory::Io,
            DemoError::ConfigParseError { .. } | DemoError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            DemoError::InvalidMenuInput { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DemoError::InvalidMenuInput { .. } => ErrorSeverity::Low,
            DemoError::InvalidAmount { .. } => ErrorSeverity::Medium,
            DemoError::ConfigParseError { .. } | DemoError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            DemoError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DemoError::InvalidAmount { .. } => {
                "Use a payment amount greater than zero".to_string()
            }
            DemoError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            DemoError::ConfigParseError { .. } => {
                "Make sure the configuration file is valid TOML".to_string()
            }
            DemoError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration file", field)
            }
            DemoError::InvalidMenuInput { .. } => {
                "Enter a number between 1 and 4".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::InvalidAmount { amount } => {
                format!("Payment of {} was rejected: amount must be positive", amount)
            }
            DemoError::IoError(e) => format!("Could not read input: {}", e),
            DemoError::ConfigParseError { message } => {
                format!("Configuration file could not be parsed: {}", message)
            }
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            DemoError::InvalidMenuInput { .. } => {
                "Please enter a valid number (1-4)".to_string()
            }
        }
    }

    /// 依嚴重程度決定程式結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_amount_classification() {
        let err = DemoError::InvalidAmount { amount: -5.0 };
        assert_eq!(err.category(), ErrorCategory::Payment);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = DemoError::InvalidConfigValueError {
            field: "theatre.movie_volume".to_string(),
            value: "120".to_string(),
            reason: "Value must be between 0 and 100".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 1);
        assert!(err.recovery_suggestion().contains("theatre.movie_volume"));
    }

    #[test]
    fn test_menu_input_is_low_severity() {
        let err = DemoError::InvalidMenuInput {
            input: "abc".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "Please enter a valid number (1-4)");
    }
}
