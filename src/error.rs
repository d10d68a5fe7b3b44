//! Error type for typed facade operations.
//!
//! The facade adds exactly one failure mode of its own: converting typed
//! values to and from the host's native representation. Everything else
//! is the host's error, wrapped unchanged.

use thiserror::Error;

use crate::key::KvKey;

/// Error returned by [`TypedStore`](crate::TypedStore) operations over a
/// host with error type `E`.
#[derive(Error, Debug)]
pub enum Error<E>
where
    E: std::error::Error + 'static,
{
    /// The host store failed; its error is passed through unchanged.
    #[error("host store error: {0}")]
    Host(#[source] E),

    /// A typed value could not be converted to the host representation.
    #[error("failed to encode value for key {key}: {source}")]
    Encode {
        key: KvKey,
        #[source]
        source: serde_json::Error,
    },

    /// A stored value did not match the schema-resolved type.
    #[error("failed to decode value for key {key}: {source}")]
    Decode {
        key: KvKey,
        #[source]
        source: serde_json::Error,
    },
}

impl<E> Error<E>
where
    E: std::error::Error + 'static,
{
    /// Returns `true` if the host store reported the failure.
    pub fn is_host(&self) -> bool {
        matches!(self, Self::Host(_))
    }

    /// The host error, if this is one.
    pub fn as_host(&self) -> Option<&E> {
        match self {
            Self::Host(e) => Some(e),
            _ => None,
        }
    }
}

/// A [`Result`] alias for facade operations over a host with error type `E`.
pub type Result<T, E> = std::result::Result<T, Error<E>>;
