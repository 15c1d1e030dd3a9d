//! In-circuit Poseidon hash for the signature challenge.
//!
//! The gadget uses the parameter set from [`curve::poseidon_config`], so a
//! digest computed here equals [`curve::poseidon_hash`] on the same inputs.

use ark_crypto_primitives::sponge::constraints::CryptographicSpongeVar;
use ark_crypto_primitives::sponge::poseidon::constraints::PoseidonSpongeVar;
use ark_crypto_primitives::sponge::poseidon::PoseidonConfig;
use ark_r1cs_std::fields::fp::FpVar;
use ark_relations::r1cs::{ConstraintSystemRef, SynthesisError};
use curve::{poseidon_config, BaseField};

/// Poseidon sponge gadget bound to one constraint system.
#[derive(Clone)]
pub struct HashGadget {
    cs: ConstraintSystemRef<BaseField>,
    config: &'static PoseidonConfig<BaseField>,
}

impl HashGadget {
    /// Creates the gadget, failing if no constraint system is attached.
    pub fn new(cs: ConstraintSystemRef<BaseField>) -> Result<Self, SynthesisError> {
        if cs.is_none() {
            return Err(SynthesisError::MissingCS);
        }
        Ok(Self {
            cs,
            config: poseidon_config(),
        })
    }

    /// Absorbs `inputs` into a fresh sponge and squeezes one element.
    pub fn hash(&self, inputs: &[FpVar<BaseField>]) -> Result<FpVar<BaseField>, SynthesisError> {
        let mut sponge = PoseidonSpongeVar::new(self.cs.clone(), self.config);
        sponge.absorb(&inputs.to_vec())?;
        let mut digest = sponge.squeeze_field_elements(1)?;
        digest.pop().ok_or(SynthesisError::Unsatisfiable)
    }
}
