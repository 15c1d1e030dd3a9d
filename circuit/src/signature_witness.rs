//! Signature witness data for EdDSA verification.

use curve::{scalar_to_base, Affine, BaseField};
use eddsa::{Message, Signature, SigningKey, VerifyingKey};
use rand::{CryptoRng, RngCore};

use crate::errors::WitnessError;

/// Concrete values for one (public key, signature, message) triple.
///
/// Every field is a public input of the circuit. `s` is the signature
/// response lifted into the base field, which is lossless since the subgroup
/// order is below the base field modulus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureWitness {
    /// The verifying key A
    pub public_key: Affine,
    /// The signature commitment point R
    pub r: Affine,
    /// The signature response S
    pub s: BaseField,
    /// The message as a field element
    pub message: BaseField,
}

impl SignatureWitness {
    /// Create a witness from a signature, public key, and message.
    pub fn new(signature: &Signature, public_key: &VerifyingKey, message: &Message) -> Self {
        Self {
            public_key: public_key.as_affine(),
            r: signature.r,
            s: scalar_to_base(&signature.s),
            message: message.to_field(),
        }
    }

    /// Create a witness from encoded inputs.
    ///
    /// Fails if the key or R is not a valid subgroup point, if S is not
    /// canonical, or if the message is too long.
    pub fn from_bytes(
        public_key: &[u8],
        signature: &[u8],
        message: &[u8],
    ) -> Result<Self, WitnessError> {
        let public_key = VerifyingKey::from_bytes(public_key)?;
        let signature = Signature::from_bytes(signature)?;
        let message = Message::from_bytes(message)?;
        Ok(Self::new(&signature, &public_key, &message))
    }

    /// Signs a random message under a fresh key pair.
    pub fn sample<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, WitnessError> {
        let signing_key = SigningKey::random(rng);
        let message = Message::random(rng);
        let signature = signing_key.sign(&message)?;
        Ok(Self::new(&signature, &signing_key.verifying_key(), &message))
    }

    /// The public inputs in allocation order: `A.x, A.y, R.x, R.y, S, M`.
    pub fn public_inputs(&self) -> [BaseField; 6] {
        [
            self.public_key.x,
            self.public_key.y,
            self.r.x,
            self.r.y,
            self.s,
            self.message,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_bytes_matches_typed_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        let sk = SigningKey::random(&mut rng);
        let pk = sk.verifying_key();
        let message = Message::from_bytes(b"witness").expect("message");
        let signature = sk.sign(&message).expect("sign");

        let from_bytes =
            SignatureWitness::from_bytes(&pk.to_bytes(), &signature.to_bytes(), b"witness")
                .expect("witness");

        assert_eq!(from_bytes, SignatureWitness::new(&signature, &pk, &message));
    }

    #[test]
    fn test_from_bytes_rejects_long_message() {
        let mut rng = StdRng::seed_from_u64(1);
        let sk = SigningKey::random(&mut rng);
        let message = Message::from_bytes(b"short").expect("message");
        let signature = sk.sign(&message).expect("sign");

        let result = SignatureWitness::from_bytes(
            &sk.verifying_key().to_bytes(),
            &signature.to_bytes(),
            &[b'x'; 40],
        );
        assert!(matches!(result, Err(WitnessError::Malformed(_))));
    }
}
