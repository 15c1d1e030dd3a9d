//! Compressed byte encodings for curve points and scalars.

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use thiserror::Error;

use crate::{Affine, ScalarField};

/// Size of a compressed BabyJubJub point in bytes.
pub const POINT_SIZE: usize = 32;

/// Size of a canonical scalar field element in bytes.
pub const SCALAR_SIZE: usize = 32;

/// Errors raised while decoding points or scalars from bytes.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("bytes do not encode a point of the prime-order subgroup")]
    InvalidPoint,
    #[error("scalar is not canonically encoded")]
    NonCanonicalScalar,
}

/// Encodes a point as 32 bytes: the y-coordinate with the sign of x in the top bit.
pub fn encode_point(point: &Affine) -> [u8; POINT_SIZE] {
    let mut out = [0u8; POINT_SIZE];
    // Writing into a slice only fails if it is shorter than the compressed size.
    let written = point.serialize_compressed(&mut out[..]);
    debug_assert!(written.is_ok(), "compressed point exceeds {POINT_SIZE} bytes");
    out
}

/// Decodes a compressed point, checking curve and subgroup membership.
pub fn decode_point(bytes: &[u8]) -> Result<Affine, EncodingError> {
    check_length(bytes, POINT_SIZE)?;
    Affine::deserialize_compressed(bytes).map_err(|_| EncodingError::InvalidPoint)
}

/// Encodes a scalar as 32 little-endian bytes.
pub fn encode_scalar(scalar: &ScalarField) -> [u8; SCALAR_SIZE] {
    let mut out = [0u8; SCALAR_SIZE];
    let written = scalar.serialize_compressed(&mut out[..]);
    debug_assert!(written.is_ok(), "compressed scalar exceeds {SCALAR_SIZE} bytes");
    out
}

/// Decodes a little-endian scalar, rejecting values outside the field.
pub fn decode_scalar(bytes: &[u8]) -> Result<ScalarField, EncodingError> {
    check_length(bytes, SCALAR_SIZE)?;
    ScalarField::deserialize_compressed(bytes).map_err(|_| EncodingError::NonCanonicalScalar)
}

fn check_length(bytes: &[u8], expected: usize) -> Result<(), EncodingError> {
    if bytes.len() != expected {
        return Err(EncodingError::InvalidLength {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}
