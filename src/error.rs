use thiserror::Error;

/// Failure to turn text into a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseStatusError {
    #[error("invalid status code: {0:?}")]
    InvalidCode(String),
    #[error("unknown status code: {0}")]
    UnknownCode(u16),
}
