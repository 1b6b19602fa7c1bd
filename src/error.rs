use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimpairError {
    // Listing
    #[error("permission denied")]
    PermissionDenied(PathBuf),

    #[error("path not found")]
    NotFound(PathBuf),

    #[error("not a directory")]
    NotADirectory(PathBuf),

    // Config
    #[error("invalid source")]
    InvalidSource(String),

    // Runtime
    #[error("IO error")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Third-party extensibility
    #[error("source error")]
    Source(String),
}

impl SimpairError {
    /// The path this error occurred at, if applicable.
    /// Callers use this to present "cannot read: <path>" without pattern matching on variants.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::PermissionDenied(p)
            | Self::NotFound(p)
            | Self::NotADirectory(p)
            | Self::Io { path: p, .. } => Some(p),
            _ => None,
        }
    }
}
