//! Messages as single field elements.

use ark_ff::PrimeField;
use curve::BaseField;
use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_MESSAGE_BYTES, MESSAGE_CHARSET};
use crate::errors::EddsaError;

/// A short message, signed and verified as one field element.
///
/// The bytes are interpreted as a big-endian integer. Since a message holds at
/// most [`MAX_MESSAGE_BYTES`] bytes, the integer is always below the field
/// modulus and distinct messages of the same length map to distinct elements.
///
/// # Example
///
/// ```
/// use eddsa::Message;
///
/// let message = Message::from_bytes(b"hello eddsa").expect("short message");
/// assert_eq!(message.as_bytes(), b"hello eddsa");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    bytes: Vec<u8>,
}

impl Message {
    /// Creates a message, rejecting inputs longer than [`MAX_MESSAGE_BYTES`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EddsaError> {
        if bytes.len() > MAX_MESSAGE_BYTES {
            return Err(EddsaError::MessageTooLong {
                len: bytes.len(),
                max: MAX_MESSAGE_BYTES,
            });
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Samples a random alphanumeric message of 1 to [`MAX_MESSAGE_BYTES`] characters.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let len = rng.gen_range(1..=MAX_MESSAGE_BYTES);
        let bytes = (0..len)
            .map(|_| MESSAGE_CHARSET[rng.gen_range(0..MESSAGE_CHARSET.len())])
            .collect();
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The field element the message is signed as.
    pub fn to_field(&self) -> BaseField {
        BaseField::from_be_bytes_mod_order(&self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_rejects_long_message() {
        let bytes = [b'a'; MAX_MESSAGE_BYTES + 1];
        assert_eq!(
            Message::from_bytes(&bytes),
            Err(EddsaError::MessageTooLong {
                len: MAX_MESSAGE_BYTES + 1,
                max: MAX_MESSAGE_BYTES
            })
        );
    }

    #[test]
    fn test_field_encoding_is_big_endian() {
        let message = Message::from_bytes(&[0x01, 0x02]).expect("message");
        assert_eq!(message.to_field(), BaseField::from(0x0102u64));
    }

    #[test]
    fn test_random_message_shape() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..64 {
            let message = Message::random(&mut rng);
            let len = message.as_bytes().len();
            assert!((1..=MAX_MESSAGE_BYTES).contains(&len));
            assert!(message.as_bytes().iter().all(u8::is_ascii_alphanumeric));
        }
    }
}
