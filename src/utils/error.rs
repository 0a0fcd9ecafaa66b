use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardGenError {
    #[error("Cannot sample {count} distinct values from range {min}..={max}")]
    InvalidSample { min: u8, max: u8, count: usize },

    #[error("Invalid column layout for column {column}: {reason}")]
    InvalidLayout { column: char, reason: String },

    #[error("Target of {requested} unique cards unreachable: {generated} accepted after {attempts} attempts")]
    TargetUnreachable {
        requested: usize,
        generated: usize,
        attempts: u64,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Generation,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CardGenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CardGenError::InvalidSample { .. }
            | CardGenError::InvalidLayout { .. }
            | CardGenError::ConfigValidationError { .. }
            | CardGenError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CardGenError::TargetUnreachable { .. } => ErrorCategory::Generation,
            CardGenError::IoError(_) => ErrorCategory::Io,
            CardGenError::SerializationError(_) => ErrorCategory::Serialization,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 重試次數上限是使用者設定的，放寬即可重跑
            CardGenError::TargetUnreachable { .. } => ErrorSeverity::Medium,
            CardGenError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CardGenError::InvalidSample { .. } | CardGenError::InvalidLayout { .. } => {
                "Check the column layout: every column must hold at least as many values as it draws"
            }
            CardGenError::TargetUnreachable { .. } => {
                "Raise --max-attempts, remove it, or request fewer cards"
            }
            CardGenError::IoError(_) => {
                "Check that the output directory exists or can be created and is writable"
            }
            CardGenError::SerializationError(_) => "This is likely a bug, please report it",
            CardGenError::ConfigValidationError { .. } | CardGenError::InvalidConfigValueError { .. } => {
                "Review the command line flags or the TOML configuration file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CardGenError::IoError(e) => format!("Could not write the card file: {}", e),
            CardGenError::TargetUnreachable {
                requested,
                generated,
                ..
            } => format!(
                "Only {} of {} unique cards could be generated",
                generated, requested
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CardGenError>;
