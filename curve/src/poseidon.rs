//! Poseidon over the BN254 scalar field.
//!
//! The same parameter set drives the native sponge here and the in-circuit
//! sponge in the `circuit` crate, so both produce identical digests for
//! identical inputs.

use std::sync::OnceLock;

use ark_crypto_primitives::sponge::poseidon::{
    find_poseidon_ark_and_mds, PoseidonConfig, PoseidonSponge,
};
use ark_crypto_primitives::sponge::{CryptographicSponge, FieldBasedCryptographicSponge};
use ark_ff::PrimeField;

use crate::BaseField;

/// Number of field elements absorbed per permutation.
pub const POSEIDON_RATE: usize = 2;
/// Capacity of the sponge in field elements.
pub const POSEIDON_CAPACITY: usize = 1;
/// S-box exponent.
pub const POSEIDON_ALPHA: u64 = 5;
pub const POSEIDON_FULL_ROUNDS: usize = 8;
pub const POSEIDON_PARTIAL_ROUNDS: usize = 57;

static CONFIG: OnceLock<PoseidonConfig<BaseField>> = OnceLock::new();

/// Returns the Poseidon parameters, deriving the round constants and MDS
/// matrix from the Grain LFSR on first use.
pub fn poseidon_config() -> &'static PoseidonConfig<BaseField> {
    CONFIG.get_or_init(|| {
        let (ark, mds) = find_poseidon_ark_and_mds::<BaseField>(
            BaseField::MODULUS_BIT_SIZE as u64,
            POSEIDON_RATE,
            POSEIDON_FULL_ROUNDS as u64,
            POSEIDON_PARTIAL_ROUNDS as u64,
            0,
        );
        PoseidonConfig::new(
            POSEIDON_FULL_ROUNDS,
            POSEIDON_PARTIAL_ROUNDS,
            POSEIDON_ALPHA,
            mds,
            ark,
            POSEIDON_RATE,
            POSEIDON_CAPACITY,
        )
    })
}

/// Absorbs `inputs` and squeezes a single field element.
pub fn poseidon_hash(inputs: &[BaseField]) -> BaseField {
    let mut sponge = PoseidonSponge::new(poseidon_config());
    sponge.absorb(&inputs.to_vec());
    sponge.squeeze_native_field_elements(1)[0]
}
