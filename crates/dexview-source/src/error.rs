use std::fmt;
use std::path::PathBuf;

/// Result type for dexview-source operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the source layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Snapshot JSON parsing failed
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// No snapshot exists for this user in the data directory
    UserNotFound { user: String, data_dir: PathBuf },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Parse { path, source } => {
                write!(f, "failed to parse snapshot {}: {}", path.display(), source)
            }
            Error::UserNotFound { user, data_dir } => {
                write!(
                    f,
                    "no snapshot for user \"{}\" under {}",
                    user,
                    data_dir.display()
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse { source, .. } => Some(source),
            Error::UserNotFound { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
