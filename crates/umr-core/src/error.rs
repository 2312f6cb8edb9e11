//! Error type shared by mirror validation and resolution.

use thiserror::Error;

/// Input validation failure. Both variants are raised before any mirror is
/// processed, so a caller never sees a partial result alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The artifact kind is not one of the recognized variants.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The relative path, a mirror entry, or the mirror set failed shape validation.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl ResolveError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        ResolveError::MalformedInput(msg.into())
    }
}
