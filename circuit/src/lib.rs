//! # Groth16 circuits for EdDSA signature verification
//!
//! R1CS circuits that re-check EdDSA signatures over BabyJubJub, proven with
//! Groth16 on BN254.
//!
//! ## Overview
//!
//! BabyJubJub is defined over the BN254 scalar field, so every curve
//! coordinate, the Poseidon challenge and the message are single native field
//! elements. No limb decomposition is needed; only the two scalars `S` and `h`
//! are decomposed into bits for scalar multiplication.
//!
//! The crate provides:
//! - [`SignatureCircuit`]: one signature per proof
//! - [`BatchSignatureCircuit`]: `N` independent signatures per proof,
//!   [`DefaultBatchCircuit`] fixes `N = 200`
//! - A five-stage pipeline: [`compile`], [`setup`], [`build_witness`],
//!   [`prove`] and [`verify`], chained by [`run_pipeline`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use circuit::{run_pipeline, CircuitShape, SignatureCircuit, SignatureWitness};
//! use eddsa::{Message, SigningKey};
//! use rand::thread_rng;
//!
//! let mut rng = thread_rng();
//! let signing_key = SigningKey::random(&mut rng);
//! let message = Message::from_bytes(b"privateKeyprivateKeyprivateKe").unwrap();
//! let signature = signing_key.sign(&message).unwrap();
//!
//! let witness = SignatureWitness::new(&signature, &signing_key.verifying_key(), &message);
//! let outcome = run_pipeline(
//!     SignatureCircuit::shape(),
//!     SignatureCircuit::new(witness),
//!     &mut rng,
//! )
//! .unwrap();
//! assert!(outcome.is_valid());
//! ```
//!
//! ## Verification Equation
//!
//! ```text
//! [8](B × S) = [8](R + A × h),   h = Poseidon(R.x, R.y, A.x, A.y, M)
//! ```
//!
//! Where:
//! - `B`: fixed base point, a circuit constant
//! - `A`: public key
//! - `R`, `S`: signature commitment and response
//! - `M`: message as a field element
//!
//! The cofactor 8 is cleared with three doublings on each side.
//!
//! ## Public Inputs
//!
//! Six field elements per signature, in order `A.x, A.y, R.x, R.y, S, M`. A
//! batch concatenates them in batch order.
//!
//! ## Artifact Binding
//!
//! Keys and witnesses carry the [`CircuitDigest`] of the constraint system
//! they belong to. [`prove`] rejects a key or witness from another system, and
//! [`verify`] rejects public inputs of the wrong length. A witness that breaks
//! a constraint is reported with the constraint index before any proving work
//! is done.
//!
//! ## References
//!
//! - Groth16: <https://eprint.iacr.org/2016/260>
//! - BabyJubJub: <https://eips.ethereum.org/EIPS/eip-2494>
//! - Poseidon: <https://eprint.iacr.org/2019/458>

mod batch_circuit;
mod eddsa_circuit;
mod errors;
mod pipeline;
mod point_ops;
mod poseidon_gadget;
mod signature_witness;


pub use batch_circuit::{BatchSignatureCircuit, DefaultBatchCircuit, BATCH_SIZE};
pub use eddsa_circuit::{verify_signature, SignatureCircuit, SignatureVar};
pub use errors::{
    CompileError, PipelineError, ProveError, SetupError, Stage, VerifyError, WitnessError,
};
pub use pipeline::{
    build_witness, compile, prove, run_pipeline, setup, verify, CircuitDigest, CircuitShape,
    CompiledCircuit, Engine, Proof, ProvingKey, PublicWitness, VerifyOutcome, VerifyingKey,
    Witness,
};
pub use point_ops::{alloc_point, CurveContext, PointVar};
pub use poseidon_gadget::HashGadget;
pub use signature_witness::SignatureWitness;

// Re-export commonly used types
pub use curve::{Affine, BaseField, ScalarField};
