//! Error types for prop-sync

use crate::value::PropType;

/// Result type for prop-sync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in prop-sync operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("synchronize() called with both force_push and initial_discovery")]
    InvalidArguments,

    #[error("Failed to parse persisted value {value:?} for {key} as {ty}")]
    Parse {
        key: String,
        ty: PropType,
        value: String,
    },

    #[error(transparent)]
    Store(#[from] prop_store::Error),
}

impl Error {
    pub fn parse(key: impl Into<String>, ty: PropType, value: impl Into<String>) -> Self {
        Self::Parse {
            key: key.into(),
            ty,
            value: value.into(),
        }
    }
}
