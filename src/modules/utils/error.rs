use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Host-side failures. Validation failures are never reported through here;
/// they end up in the error slots.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
