use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("path escapes site root: {path}")]
    PathEscapesRoot { path: PathBuf },
    #[error("destination already exists: {path}")]
    DestinationExists { path: PathBuf },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("operation not allowed on the site root")]
    RootNotAllowed,
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    pub fn code(&self) -> &'static str {
        match self {
            FsError::PathEscapesRoot { .. } => "PathEscapesRoot",
            FsError::DestinationExists { .. } => "DestinationExists",
            FsError::InvalidConfiguration(_) => "InvalidConfiguration",
            FsError::InvalidPath(_) => "InvalidPath",
            FsError::RootNotAllowed => "RootNotAllowed",
            FsError::Io { .. } => "Io",
        }
    }

    /// True for containment failures, which callers must never treat as a benign miss.
    pub fn is_security_violation(&self) -> bool {
        matches!(self, FsError::PathEscapesRoot { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FsError::Io { path: path.into(), source }
    }
}

pub type FsResult<T> = Result<T, FsError>;
