//! BabyJubJub, the twisted Edwards curve embedded in the BN254 scalar field.
//!
//! This crate is the curve context shared by the native signature scheme and
//! the constraint system: point and scalar types, compressed byte encodings,
//! conversions between the two fields, the Poseidon parameter set and the
//! native Poseidon hash. Curve arithmetic itself comes from `ark-ed-on-bn254`.
//!
//! The base field of BabyJubJub is the scalar field of BN254, so every curve
//! coordinate is a native variable of a BN254 Groth16 circuit.

mod encoding;
mod poseidon;
mod random;
mod scalarfield;
pub mod serde_ark;

pub use ark_ed_on_bn254::{
    EdwardsAffine as Affine, EdwardsConfig as CurveConfig, EdwardsProjective as Projective,
    Fq as BaseField, Fr as ScalarField,
};
pub use encoding::{
    decode_point, decode_scalar, encode_point, encode_scalar, EncodingError, POINT_SIZE,
    SCALAR_SIZE,
};
pub use poseidon::{
    poseidon_config, poseidon_hash, POSEIDON_ALPHA, POSEIDON_CAPACITY, POSEIDON_FULL_ROUNDS,
    POSEIDON_PARTIAL_ROUNDS, POSEIDON_RATE,
};
pub use random::RandomField;
pub use scalarfield::{base_to_scalar, scalar_to_base};

/// Number of doublings that multiply a point by the BabyJubJub cofactor (8).
pub const COFACTOR_DOUBLINGS: usize = 3;
