use std::result;

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for codec operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed encoding: {0}")]
    MalformedEncoding(String),
    #[error("Index out of range: index: {index}, len: {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Type mismatch: expected `{expected}`")]
    TypeMismatch { expected: &'static str },

    #[error("No codecs registered for collection '{0}'")]
    UnknownCollection(String),
    #[error("Collection '{0}' already has registered codecs")]
    AlreadyRegistered(String),

    #[cfg(feature = "serde_json")]
    #[error(transparent)]
    SerdeJSON(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedEncoding(reason.into())
    }

    pub(crate) fn type_mismatch<T>() -> Self {
        Self::TypeMismatch {
            expected: std::any::type_name::<T>(),
        }
    }

    /// Whether the error means stored bytes can't be trusted, as opposed to a
    /// caller passing bad arguments.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::MalformedEncoding(_))
    }
}
