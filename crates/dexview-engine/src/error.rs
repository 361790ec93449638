use std::fmt;

/// Result type for dexview-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No entry with this dex identifier exists in the collection
    NotFound(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(dex_no) => {
                write!(f, "no entry with dex number {} in the collection", dex_no)
            }
        }
    }
}

impl std::error::Error for Error {}
