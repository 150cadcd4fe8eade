use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("unknown channel {0:?} (expected \"display\" or \"visibility\")")]
    UnknownChannel(String),
    /// Raised by the host platform (e.g. a rejected token or style write),
    /// carried through unchanged.
    #[error("{0}")]
    Platform(String),
}

pub type Result<T> = std::result::Result<T, DomError>;
