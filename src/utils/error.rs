use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Render error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Rendering,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PortalError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PortalError::ConfigError { .. }
            | PortalError::MissingConfigError { .. }
            | PortalError::InvalidConfigValueError { .. }
            | PortalError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            PortalError::RenderError { .. } | PortalError::SerializationError(_) => {
                ErrorCategory::Rendering
            }
            PortalError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Rendering => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 是否屬於設定錯誤（啟動時即致命）
    pub fn is_configuration(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PortalError::MissingConfigError { field } => {
                format!("Add `{}` to the configuration file", field)
            }
            PortalError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of `{}` in the configuration file", field)
            }
            PortalError::ConfigValidationError { field, .. } => {
                format!("Check `{}`; the file must be valid TOML", field)
            }
            PortalError::ConfigError { .. } => {
                "Review the configuration file against portal.toml".to_string()
            }
            PortalError::IoError(_) => {
                "Check that the output directory is writable and the disk is not full".to_string()
            }
            PortalError::SerializationError(_) | PortalError::RenderError { .. } => {
                "Re-run with --verbose and report the failing page".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid portal configuration: {}", self),
            ErrorCategory::Rendering => format!("Could not render the page: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
