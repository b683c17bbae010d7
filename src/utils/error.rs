use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Service {service} is not reachable on port {port}")]
    ServiceUnavailable {
        service: String,
        port: u16,
        hint: String,
    },

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Availability,
    Network,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 0 means the run still counts as a success.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::ServiceUnavailable { .. } => ErrorCategory::Availability,
            DemoError::HttpClientError(_) => ErrorCategory::Network,
            DemoError::IoError(_) => ErrorCategory::Io,
            DemoError::ConfigError { .. }
            | DemoError::ConfigValidationError { .. }
            | DemoError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Availability => ErrorSeverity::High,
            ErrorCategory::Network | ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DemoError::ServiceUnavailable { hint, .. } => format!("Start it with: {}", hint),
            DemoError::HttpClientError(_) => {
                "Check the local network setup and the configured base URLs".to_string()
            }
            DemoError::IoError(_) => "Check that the terminal output is writable".to_string(),
            DemoError::ConfigError { .. }
            | DemoError::ConfigValidationError { .. }
            | DemoError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags and try again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::ServiceUnavailable { service, port, .. } => {
                format!("{} is not running (port {})", service, port)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
