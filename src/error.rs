use thiserror::Error;

/// Stamp error types
#[derive(Error, Debug)]
pub enum StampError {
    #[error("invalid time format: '{0}'")]
    InvalidTimeFormat(String),

    #[error("invalid date format: '{0}'")]
    InvalidDateFormat(String),

    #[error("invalid note index: '{0}'")]
    InvalidIndex(String),

    #[error("note index {index} out of range (page has {count} notes)")]
    IndexOutOfRange { index: i64, count: usize },

    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("unsupported clock format '{0}' (use 12h or 24h)")]
    UnsupportedClockFormat(String),

    #[error("no note text supplied")]
    EmptyNote,

    #[error("timestamp not found")]
    TimestampNotFound,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Result type for stamp operations
pub type Result<T> = std::result::Result<T, StampError>;
