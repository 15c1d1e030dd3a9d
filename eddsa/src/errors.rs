//! Error types for the EdDSA signature scheme.

use curve::EncodingError;
use thiserror::Error;

/// Errors that can occur during signing, verification and decoding.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum EddsaError {
    /// The identity point was encountered where a proper curve point was expected.
    ///
    /// This happens when the verifying key or the commitment R is the
    /// identity. For honestly generated keys the probability is negligible.
    #[error("identity point is not a valid key or commitment")]
    InvalidPoint,
    /// The message does not fit into a single field element.
    #[error("message is {len} bytes, at most {max} are supported")]
    MessageTooLong { len: usize, max: usize },
    /// Bytes did not decode to a point or scalar.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
