//! Signing and verifying keys for the EdDSA signature scheme.

use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use curve::{
    Affine, BaseField, COFACTOR_DOUBLINGS, RandomField, ScalarField, base_to_scalar, decode_point,
    encode_point, poseidon_hash,
};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::PK_SIZE;
use crate::errors::EddsaError;
use crate::message::Message;
use crate::signatures::{Signature, hash_challenge};

/// A secret signing key for creating EdDSA signatures.
///
/// The signing key holds a random scalar of the BabyJubJub subgroup and a
/// random nonce seed. Nonces are derived deterministically from the seed and
/// the message, so signing needs no randomness. The key is wiped on drop.
///
/// # Example
///
/// ```
/// use eddsa::SigningKey;
/// use rand::thread_rng;
///
/// let mut rng = thread_rng();
/// let signing_key = SigningKey::random(&mut rng);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct SigningKey {
    #[serde(with = "curve::serde_ark")]
    scalar: ScalarField,
    #[serde(with = "curve::serde_ark")]
    nonce_seed: BaseField,
}

/// A public verifying key for verifying EdDSA signatures.
///
/// The verifying key is the BabyJubJub point `B * sk`, where `B` is the
/// generator of the prime-order subgroup.
///
/// # Example
///
/// ```
/// use eddsa::SigningKey;
/// use rand::thread_rng;
///
/// let mut rng = thread_rng();
/// let signing_key = SigningKey::random(&mut rng);
/// let verifying_key = signing_key.verifying_key();
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKey {
    #[serde(with = "curve::serde_ark")]
    point: Affine,
}

impl SigningKey {
    /// Generates a random signing key using the provided random number generator.
    ///
    /// # Arguments
    ///
    /// * `rng` - A cryptographically secure random number generator
    pub fn random<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        Self {
            scalar: ScalarField::random(rng),
            nonce_seed: BaseField::random(rng),
        }
    }

    /// Derives the public verifying key from this signing key.
    ///
    /// The verifying key is computed as `B * sk` where `B` is the generator
    /// of the BabyJubJub subgroup and `sk` is the secret scalar.
    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey {
            point: (Affine::generator() * self.scalar).into_affine(),
        }
    }

    /// Signs a message using this signing key.
    ///
    /// The signature is computed as follows:
    /// 1. Derive the nonce `r = Poseidon(seed, msg) mod n`
    /// 2. Compute `R = B * r`
    /// 3. Compute challenge `h = Poseidon(R.x, R.y, A.x, A.y, msg)`
    /// 4. Compute `S = r + h * sk mod n`
    /// 5. Return signature `(R, S)`
    ///
    /// # Errors
    ///
    /// Returns [`EddsaError::InvalidPoint`] if the nonce or the key is zero,
    /// which happens with negligible probability.
    ///
    /// # Example
    ///
    /// ```
    /// use eddsa::{Message, SigningKey};
    /// use rand::thread_rng;
    ///
    /// let mut rng = thread_rng();
    /// let signing_key = SigningKey::random(&mut rng);
    /// let message = Message::from_bytes(b"hello").expect("message");
    /// let signature = signing_key.sign(&message).expect("signing failed");
    /// ```
    pub fn sign(&self, msg: &Message) -> Result<Signature, EddsaError> {
        let nonce = base_to_scalar(&poseidon_hash(&[self.nonce_seed, msg.to_field()]));
        let r = (Affine::generator() * nonce).into_affine();
        let pk = self.verifying_key();

        let h = hash_challenge(&r, &pk.point, msg)?;
        let s = nonce + base_to_scalar(&h) * self.scalar;

        Ok(Signature { r, s })
    }
}

impl VerifyingKey {
    /// Verifies a signature on a message using this verifying key.
    ///
    /// The verification checks the cofactored equation
    /// `[8](B * S) == [8](R + A * h)`, where `A` is this key and
    /// `h = Poseidon(R.x, R.y, A.x, A.y, msg)`.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the signature is valid
    /// - `Ok(false)` if the signature is invalid
    /// - `Err(EddsaError::InvalidPoint)` if the key or R is the identity
    ///
    /// # Example
    ///
    /// ```
    /// use eddsa::{Message, SigningKey};
    /// use rand::thread_rng;
    ///
    /// let mut rng = thread_rng();
    /// let signing_key = SigningKey::random(&mut rng);
    /// let verifying_key = signing_key.verifying_key();
    /// let message = Message::from_bytes(b"hello").expect("message");
    ///
    /// let signature = signing_key.sign(&message).expect("signing failed");
    /// let is_valid = verifying_key.verify(&message, &signature).expect("verification failed");
    /// assert!(is_valid);
    /// ```
    pub fn verify(&self, msg: &Message, sig: &Signature) -> Result<bool, EddsaError> {
        let h = hash_challenge(&sig.r, &self.point, msg)?;

        let lhs = Affine::generator().mul_bigint(sig.s.into_bigint());
        let rhs = sig.r.into_group() + self.point.mul_bigint(h.into_bigint());

        let mut diff = lhs - rhs;
        for _ in 0..COFACTOR_DOUBLINGS {
            diff = diff + diff;
        }
        Ok(diff.into_affine().is_zero())
    }

    /// The underlying curve point.
    pub fn as_affine(&self) -> Affine {
        self.point
    }

    /// Encodes the key as a compressed point.
    pub fn to_bytes(&self) -> [u8; PK_SIZE] {
        encode_point(&self.point)
    }

    /// Decodes a compressed point, checking curve and subgroup membership.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EddsaError> {
        let point = decode_point(bytes)?;
        if point.is_zero() {
            return Err(EddsaError::InvalidPoint);
        }
        Ok(Self { point })
    }
}

impl From<&SigningKey> for VerifyingKey {
    /// Converts a reference to a signing key into a verifying key.
    ///
    /// This is equivalent to calling `signing_key.verifying_key()`.
    fn from(sk: &SigningKey) -> Self {
        sk.verifying_key()
    }
}
