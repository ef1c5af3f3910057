use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Invalid NIM length: expected exactly 8 characters, got {length}")]
    InvalidLength { length: usize },

    #[error("Study program prefix '{prefix}' is not registered")]
    UnknownPrefix { prefix: String },

    #[error("Malformed weights header: {reason}")]
    MalformedHeader { reason: String },

    #[error("Malformed score record '{line}': {reason}")]
    MalformedRecord { line: String, reason: String },

    #[error("Insufficient data: {reason}")]
    InsufficientData { reason: String },

    #[error("Input is not valid UTF-8 text")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
