//! Custom error types for the tasklist wrapper
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TasklistError {
    #[error("tasklist is only supported on Windows (current host: {0})")]
    UnsupportedPlatform(&'static str),

    #[error("Conflicting options: {0}")]
    ConflictingOptions(&'static str),

    #[error("The system, username and password options must be specified together")]
    IncompleteRemoteConfig,

    #[error("Filter '{0}' is not supported when querying remote machines (windowtitle and status filters are local only)")]
    UnsupportedRemoteFilter(String),

    #[error("Unknown column schema: {0}")]
    UnknownSchema(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("CSV into_inner error: {0}")]
    CsvIntoInnerError(#[from] csv::IntoInnerError<csv::Writer<Vec<u8>>>),

    #[error("UTF-8 conversion error: {0}")]
    FromUtf8Error(#[from] std::string::FromUtf8Error),
}
