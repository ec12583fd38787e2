//! Error types for normtext-core.
//!
//! The per-code-point table lookups in this crate are total, so no error can
//! originate inside the transformation loops. The only fallible surfaces are
//! input classification and byte decoding, which keeps failure handling at
//! the edges of the pipeline.
//!
//! Absent input and empty results are not errors: both are represented as
//! `Ok(None)` by the callers in `normalize`.

use thiserror::Error;

/// Result alias used across normtext-core.
pub type NormResult<T> = Result<T, NormError>;

/// Errors produced by normtext-core.
#[derive(Error, Debug)]
pub enum NormError {
    /// A caller-supplied value was malformed (category code, encoding label).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Byte input could not be decoded under the resolved encoding.
    ///
    /// This is fatal for the call: silently producing garbled text would
    /// corrupt downstream indexing.
    #[error("decode failure: {0}")]
    Decode(String),
}

impl NormError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
