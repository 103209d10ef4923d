use thiserror::Error;

#[derive(Error, Debug)]
pub enum CronError {
    #[error("Invalid argument: '{token}'")]
    InvalidArgument { token: String },

    #[error("Invalid number of arguments in a cron string: expected 6, found {found}")]
    FieldCountError { found: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
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
    Expression,
    Usage,
    Configuration,
    System,
}

impl CronError {
    pub fn invalid_argument(token: impl Into<String>) -> Self {
        CronError::InvalidArgument {
            token: token.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CronError::InvalidArgument { .. } => ErrorCategory::Expression,
            CronError::FieldCountError { .. } => ErrorCategory::Usage,
            CronError::ConfigValidationError { .. }
            | CronError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CronError::IoError(_) | CronError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// 依錯誤類別決定程式結束碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Expression => 1,
            ErrorCategory::Usage => 2,
            ErrorCategory::Configuration => 3,
            ErrorCategory::System => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CronError::FieldCountError { .. } => "Invalid number of arguments in a cron string.\n\
                 Required cron string arguments: \"minute hour day-of-month month day-of-week command\""
                .to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CronError::InvalidArgument { .. } => {
                "Use numbers, '*', '-', ',', '/' or month/weekday names such as 'jan' or 'mon'"
            }
            CronError::FieldCountError { .. } => {
                "Usage: small-cron \"<minute> <hour> <day-of-month> <month> <day-of-week> <command>\""
            }
            CronError::ConfigValidationError { .. } | CronError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line options"
            }
            CronError::IoError(_) => "Make sure the file exists and is readable",
            CronError::SerializationError(_) => "Try the plain text output format",
        }
    }
}

pub type Result<T> = std::result::Result<T, CronError>;
