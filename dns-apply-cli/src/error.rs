//! Unified error type for the apply run

use thiserror::Error;

// Re-export library error type
pub use dns_apply_provider::WriterError;

/// Apply-run error type.
///
/// Any variant aborts the whole run; records not yet processed are never
/// attempted.
#[derive(Error, Debug)]
pub enum ApplyError {
    /// Missing or unusable process configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error while discovering or reading declarations
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A declaration file did not decode into the expected structure
    #[error("Malformed declaration {file}: {detail}")]
    MalformedDeclaration { file: String, detail: String },

    /// Both the replace and the create attempt failed for one record
    #[error("Failed to apply record: {record_type} for {name}\n{body}")]
    RecordFailed {
        record_type: String,
        name: String,
        body: String,
    },

    /// Writer error (converted from the library)
    #[error("{0}")]
    Writer(#[from] WriterError),
}

/// Apply-run Result type alias
pub type ApplyResult<T> = std::result::Result<T, ApplyError>;
