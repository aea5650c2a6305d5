use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PclError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Override '{key}' is not a valid boolean: '{value}'")]
    InvalidOverride { key: String, value: String },

    #[error("Source object not found: {bucket}/{key}")]
    SourceNotFound { bucket: String, key: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Failed to convert file '{file_name}': {source}")]
    FileFailed {
        file_name: String,
        #[source]
        source: Box<PclError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Validation,
    Storage,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Coarse outcome reported back to the batch caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusTag {
    Success,
    ValidationError,
    Failed,
}

impl PclError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PclError::CsvError(_) => ErrorCategory::Input,
            PclError::IoError(_) => ErrorCategory::System,
            PclError::ConfigError { .. }
            | PclError::MissingConfigError { .. }
            | PclError::InvalidConfigValueError { .. }
            | PclError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            PclError::ValidationError { .. } | PclError::InvalidOverride { .. } => {
                ErrorCategory::Validation
            }
            PclError::SourceNotFound { .. } | PclError::StorageError { .. } => {
                ErrorCategory::Storage
            }
            PclError::FileFailed { source, .. } => source.category(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn status_tag(&self) -> StatusTag {
        match self {
            PclError::ValidationError { .. } => StatusTag::ValidationError,
            _ => StatusTag::Failed,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PclError::CsvError(e) => format!("Could not read the data file: {}", e),
            PclError::SourceNotFound { bucket, key } => {
                format!("Data file {} was not found in {}", key, bucket)
            }
            PclError::InvalidOverride { key, value } => format!(
                "Batch setting '{}' must be true or false, got '{}'",
                key, value
            ),
            PclError::ValidationError { message } => format!("Invalid batch request: {}", message),
            PclError::FileFailed { file_name, source } => {
                format!("{}: {}", file_name, source.user_friendly_message())
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check that the file is UTF-8 text with a header row",
            ErrorCategory::Configuration => "Review the print profile and environment variables",
            ErrorCategory::Validation => "Fix the batch request and submit it again",
            ErrorCategory::Storage => "Verify bucket names, object keys and access permissions",
            ErrorCategory::System => "Inspect the logs for the underlying system failure",
        }
    }
}

pub type Result<T> = std::result::Result<T, PclError>;
