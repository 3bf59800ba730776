//! Error types for Everwish

use thiserror::Error;

/// Errors from the configuration store and its storage backend.
///
/// A read failure is recovered locally by falling back to the default
/// record; only write failures surface to the user.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error during storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors from converting between wall-clock edit fields and absolute
/// unlock instants.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Timezone id is not a known IANA identifier
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Hour outside 0-23
    #[error("Hour out of range: {0}")]
    HourOutOfRange(u32),

    /// Minute outside 0-59
    #[error("Minute out of range: {0}")]
    MinuteOutOfRange(u32),

    /// The wall-clock time falls in a DST gap and does not exist
    #[error("Local time {0} does not exist in timezone {1}")]
    NonexistentLocalTime(String, String),
}

/// Errors from the remote generation collaborators.
///
/// Always retryable; callers keep their prior state on failure.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Request failed (network or non-success status)
    #[error("Generation request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a response without the expected payload
    #[error("Generation service returned no {0}")]
    Empty(&'static str),

    /// Payload could not be decoded
    #[error("Could not decode generation response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScheduleError::UnknownTimezone("America/Atlantis".to_string());
        assert_eq!(format!("{}", err), "Unknown timezone: America/Atlantis");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cfg_err: ConfigError = io_err.into();
        assert!(matches!(cfg_err, ConfigError::Io(_)));
    }
}
