//! EdDSA signatures over BabyJubJub with a Poseidon challenge.
//!
//! This library implements EdDSA using:
//! - The BabyJubJub twisted Edwards curve, whose base field is the BN254
//!   scalar field
//! - Poseidon over the BN254 scalar field for nonce derivation and the
//!   challenge hash
//! - Short messages (up to 31 bytes) encoded as a single field element
//!
//! Every step of verification is native arithmetic in the BN254 scalar field,
//! which is what makes it cheap to re-check inside a Groth16 circuit.
//!
//! # Example
//!
//! ```
//! use eddsa::{Message, SigningKey};
//! use rand::thread_rng;
//!
//! // Generate a random signing key
//! let mut rng = thread_rng();
//! let signing_key = SigningKey::random(&mut rng);
//!
//! // Derive the corresponding verifying key
//! let verifying_key = signing_key.verifying_key();
//!
//! // Sign the message
//! let message = Message::from_bytes(b"privateKeyprivateKeyprivateKe").expect("message");
//! let signature = signing_key.sign(&message).expect("signing failed");
//!
//! // Verify the signature
//! let is_valid = verifying_key.verify(&message, &signature).expect("verification failed");
//! assert!(is_valid);
//! ```
//!
//! # Security Considerations
//!
//! - Always use a cryptographically secure random number generator (CSRNG) for keys
//! - Nonces are derived from a secret seed and the message, so signing the
//!   same message twice yields the same signature
//! - Verification is cofactored: both sides are multiplied by 8

mod constants;
mod errors;
mod keys;
mod message;
mod signatures;

#[cfg(test)]
mod tests;

pub use constants::{MAX_MESSAGE_BYTES, PK_SIZE, SIG_SIZE, SK_SIZE};
pub use errors::EddsaError;
pub use keys::{SigningKey, VerifyingKey};
pub use message::Message;
pub use signatures::{Signature, hash_challenge};
