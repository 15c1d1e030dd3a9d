//! Signature types and challenge hashing for the EdDSA signature scheme.

use curve::{
    Affine, BaseField, ScalarField, decode_point, decode_scalar, encode_point, encode_scalar,
    poseidon_hash,
};
use serde::{Deserialize, Serialize};

use crate::constants::SIG_SIZE;
use crate::errors::EddsaError;
use crate::message::Message;

/// An EdDSA signature consisting of a curve point and a scalar.
///
/// The signature is a pair `(R, S)` where:
/// - `R` is a BabyJubJub point (the commitment)
/// - `S` is a scalar of the prime-order subgroup (the response)
///
/// # Structure
///
/// The signature satisfies the verification equation `[8](B * S) == [8](R + A * h)`
/// where `h = Poseidon(R.x, R.y, A.x, A.y, msg)` is the challenge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// The commitment point R = B * r, where r is the signing nonce
    #[serde(with = "curve::serde_ark")]
    pub r: Affine,
    /// The response scalar S = r + h * sk, where sk is the signing key
    #[serde(with = "curve::serde_ark")]
    pub s: ScalarField,
}

impl Signature {
    /// Encodes the signature as `R (compressed) || S (little-endian)`.
    pub fn to_bytes(&self) -> [u8; SIG_SIZE] {
        let mut out = [0u8; SIG_SIZE];
        let (r, s) = out.split_at_mut(curve::POINT_SIZE);
        r.copy_from_slice(&encode_point(&self.r));
        s.copy_from_slice(&encode_scalar(&self.s));
        out
    }

    /// Decodes a signature, rejecting invalid points and non-canonical scalars.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EddsaError> {
        if bytes.len() != SIG_SIZE {
            return Err(curve::EncodingError::InvalidLength {
                expected: SIG_SIZE,
                actual: bytes.len(),
            }
            .into());
        }
        let (r, s) = bytes.split_at(curve::POINT_SIZE);
        Ok(Self {
            r: decode_point(r)?,
            s: decode_scalar(s)?,
        })
    }
}

/// Computes the challenge `h = Poseidon(R.x, R.y, A.x, A.y, msg)`.
///
/// The challenge is returned as a base field element. Callers multiply the
/// public key by its full integer value, which is what the circuit does with
/// the bit decomposition of the same element.
///
/// # Errors
///
/// Returns [`EddsaError::InvalidPoint`] if either `r` or `pk` is the identity.
pub fn hash_challenge(r: &Affine, pk: &Affine, msg: &Message) -> Result<BaseField, EddsaError> {
    if r.is_zero() || pk.is_zero() {
        return Err(EddsaError::InvalidPoint);
    }

    Ok(poseidon_hash(&[r.x, r.y, pk.x, pk.y, msg.to_field()]))
}
