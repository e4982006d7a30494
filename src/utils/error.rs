use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported output format: {value}")]
    UnsupportedFormatError { value: String },
}

impl GreetError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            GreetError::IoError(e) => format!("Could not read configuration file: {}", e),
            GreetError::SerializationError(e) => format!("Could not render output: {}", e),
            GreetError::ConfigParseError { message } => {
                format!("Configuration file is not valid TOML: {}", message)
            }
            GreetError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            GreetError::UnsupportedFormatError { value } => {
                format!("Output format '{}' is not supported", value)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GreetError::IoError(_) => "Check that the --config path exists and is readable",
            GreetError::SerializationError(_) => "Retry with --format text",
            GreetError::ConfigParseError { .. } => {
                "Fix the TOML syntax; the file only needs a [greeting] table"
            }
            GreetError::InvalidConfigValueError { .. } => {
                "Correct the value named in the message and run again"
            }
            GreetError::UnsupportedFormatError { .. } => "Use one of: text, json",
        }
    }
}

pub type Result<T> = std::result::Result<T, GreetError>;
