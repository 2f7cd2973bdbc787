use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OfsError {
    // Paths
    #[error("invalid ofs uri")]
    InvalidUri(String),

    // Status records
    #[error("invalid permission string")]
    InvalidPermission(String),

    #[error("malformed file status")]
    MalformedStatus(#[source] serde_json::Error),

    #[error("malformed listing response")]
    MalformedListing(#[source] serde_json::Error),

    // Builder
    #[error("no parent path provided")]
    MissingParent,

    #[error("no status source provided")]
    MissingSource,

    // Config
    #[error("invalid config")]
    Config(#[from] toml::de::Error),

    #[error("IO error")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OfsError {
    /// Whether a listing can skip the entry that produced this error and keep going.
    ///
    /// Only per-entry failures qualify: one bad `FileStatus` in a listing
    /// response says nothing about its siblings. Envelope, builder and config
    /// errors are fatal.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidPermission(_) | Self::MalformedStatus(_))
    }
}
