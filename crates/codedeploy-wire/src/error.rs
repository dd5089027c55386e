//! Error types

/// Result type with [`WireError`]
pub type WireResult<T = (), E = WireError> = Result<T, E>;

/// Errors raised at the boundaries of request construction.
///
/// Key rendering and tree transformation never fail. Everything here is
/// reported while validating caller input or assembling the envelope.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WireError {
    /// A map key is not a usable identifier
    #[error("invalid parameter key: {key:?}")]
    InvalidKey {
        /// the rejected key
        key: String,
    },

    /// Two keys of one map render to the same wire key
    #[error("parameter key {key:?} collides with another key on wire key {wire_key:?}")]
    DuplicateKey {
        /// the later of the colliding keys
        key: String,
        /// the shared rendering
        wire_key: String,
    },

    /// The parameter tree nests deeper than the configured limit
    #[error("parameter tree exceeds the maximum depth of {max}")]
    DepthExceeded {
        /// the configured limit
        max: usize,
    },

    /// The operation name does not match any known operation
    #[error("unknown operation: {name:?}")]
    UnknownOperation {
        /// the rejected name
        name: String,
    },

    /// A header value cannot be represented as an http header
    #[error("invalid value for header {name:?}")]
    InvalidHeader {
        /// header name
        name: String,
        #[source]
        source: ::http::Error,
    },

    /// A tag element has neither the map shape nor the pair shape
    #[error("malformed tag at index {index}")]
    MalformedTag {
        /// position of the element in the caller's list
        index: usize,
    },

    /// The request body could not be serialized
    #[error("failed to serialize request body")]
    Json(#[from] serde_json::Error),
}

impl WireError {
    pub(crate) fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }
}
