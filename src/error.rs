//! Error types for viewstats

use thiserror::Error;

/// Main error type for the viewstats library
#[derive(Error, Debug)]
pub enum Error {
    /// Unrecognized look-back window name
    #[error("unknown window {0:?}, expected \"1d\", \"7d\", or \"30d\"")]
    UnknownWindow(String),

    /// Unrecognized growth granularity
    #[error("unknown growth granularity {0:?}, expected \"week\" or \"month\"")]
    UnknownGranularity(String),

    /// Timestamp parse error
    #[error("timestamp parse error: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

/// Result type alias for viewstats
pub type Result<T> = std::result::Result<T, Error>;
