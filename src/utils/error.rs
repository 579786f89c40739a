use thiserror::Error;

#[derive(Error, Debug)]
pub enum MagicSquareError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid request: {message}")]
    RequestError { message: String },

    #[error("Malformed grid: {reason}")]
    MalformedGridError { reason: String },

    #[error("Grid too large: {size}x{size} exceeds the limit of {max}x{max}")]
    GridTooLargeError { size: usize, max: usize },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

pub type Result<T> = std::result::Result<T, MagicSquareError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Input,
    Io,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl MagicSquareError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlError(_) => ErrorCategory::Config,
            Self::RequestError { .. }
            | Self::MalformedGridError { .. }
            | Self::GridTooLargeError { .. }
            | Self::SerializationError(_) => ErrorCategory::Input,
            Self::IoError(_) => ErrorCategory::Io,
            Self::ServerError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 使用者輸入錯誤不影響服務本身
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Config | ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 適合直接顯示給使用者的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read input: {}", e),
            Self::SerializationError(e) => format!("The grid is not valid JSON: {}", e),
            Self::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::RequestError { message } => format!("The request could not be read: {}", message),
            Self::MalformedGridError { reason } => format!("The grid is not square: {}", reason),
            Self::GridTooLargeError { size, max } => format!(
                "A {}x{} grid is larger than the allowed {}x{}",
                size, size, max, max
            ),
            Self::ServerError { message } => format!("The server failed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::SerializationError(_) | Self::RequestError { .. } => {
                "Send a JSON body like {\"grid\": [[8, 1, 6], [3, 5, 7], [4, 9, 2]]} using integers or null"
            }
            Self::TomlError(_) => "Fix the TOML syntax in the configuration file",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the command line flags and the configuration file"
            }
            Self::MalformedGridError { .. } => {
                "Every row must have exactly as many cells as there are rows"
            }
            Self::GridTooLargeError { .. } => "Use a smaller grid or raise max_grid_size",
            Self::ServerError { .. } => "Check the server logs and that the port is free",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_medium_severity() {
        let err = MagicSquareError::MalformedGridError {
            reason: "row 2 has 2 cells, expected 3".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.to_string().contains("row 2 has 2 cells"));
    }

    #[test]
    fn test_grid_too_large_message() {
        let err = MagicSquareError::GridTooLargeError { size: 20, max: 12 };
        assert_eq!(
            err.to_string(),
            "Grid too large: 20x20 exceeds the limit of 12x12"
        );
        assert!(err.user_friendly_message().contains("12x12"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = MagicSquareError::InvalidConfigValueError {
            field: "server.port".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Config);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_server_errors_are_critical() {
        let err = MagicSquareError::ServerError {
            message: "could not bind 127.0.0.1:5000: address in use".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("address in use"));
    }
}
