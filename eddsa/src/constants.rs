//! Constants used in the EdDSA signature scheme implementation.

use curve::{POINT_SIZE, SCALAR_SIZE};

/// Size of a serialized public verifying key in bytes.
///
/// A verifying key is a compressed BabyJubJub point.
pub const PK_SIZE: usize = POINT_SIZE;

/// Size of a serialized secret signing key in bytes.
///
/// A signing key consists of:
/// - The secret scalar (32 bytes)
/// - The nonce seed, a base field element (32 bytes)
/// Total: 64 bytes
pub const SK_SIZE: usize = SCALAR_SIZE + 32;

/// Size of a serialized signature in bytes.
///
/// A signature consists of:
/// - A compressed point R (32 bytes)
/// - A scalar S (32 bytes)
/// Total: 64 bytes
pub const SIG_SIZE: usize = POINT_SIZE + SCALAR_SIZE;

/// Maximum length of a message in bytes.
///
/// A message must fit in a single BN254 scalar field element without
/// reduction; 31 bytes is the largest length that always does.
pub const MAX_MESSAGE_BYTES: usize = 31;

/// Characters used by [`crate::Message::random`].
pub(crate) const MESSAGE_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
