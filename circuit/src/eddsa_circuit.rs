//! EdDSA verification circuit for a single signature.

use ark_r1cs_std::fields::fp::FpVar;
use ark_r1cs_std::prelude::*;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};
use curve::BaseField;
use tracing::trace;

use crate::pipeline::CircuitShape;
use crate::point_ops::{alloc_point, CurveContext, PointVar};
use crate::poseidon_gadget::HashGadget;
use crate::signature_witness::SignatureWitness;

/// Public inputs of one signature relation.
pub struct SignatureVar {
    pub public_key: PointVar,
    pub r: PointVar,
    pub s: FpVar<BaseField>,
    pub message: FpVar<BaseField>,
}

impl SignatureVar {
    /// Allocates `A, R, S, M` as public inputs, in that order.
    ///
    /// Without a witness the variables are left unassigned, which is only
    /// valid while compiling or running setup.
    pub fn new_input(
        cs: ConstraintSystemRef<BaseField>,
        witness: Option<&SignatureWitness>,
    ) -> Result<Self, SynthesisError> {
        let public_key = alloc_point(
            cs.clone(),
            || assigned(witness, |w| w.public_key),
            AllocationMode::Input,
        )?;
        let r = alloc_point(cs.clone(), || assigned(witness, |w| w.r), AllocationMode::Input)?;
        let s = FpVar::new_input(cs.clone(), || assigned(witness, |w| w.s))?;
        let message = FpVar::new_input(cs, || assigned(witness, |w| w.message))?;

        Ok(Self {
            public_key,
            r,
            s,
            message,
        })
    }
}

fn assigned<T>(
    witness: Option<&SignatureWitness>,
    field: impl FnOnce(&SignatureWitness) -> T,
) -> Result<T, SynthesisError> {
    witness.map(field).ok_or(SynthesisError::AssignmentMissing)
}

/// Emits the constraints of `[8](B * S) == [8](R + A * h)` with
/// `h = Poseidon(R.x, R.y, A.x, A.y, M)`.
///
/// Also enforces the checks native verification applies to decoded inputs:
/// `A` has no small order, `R` is not the identity and `S < n`.
pub fn verify_signature(
    curve: &CurveContext,
    hash: &HashGadget,
    signature: &SignatureVar,
) -> Result<(), SynthesisError> {
    curve.assert_not_small_order(&signature.public_key)?;
    curve.assert_not_identity(&signature.r)?;
    let s_bits = curve.canonical_scalar_bits(&signature.s)?;

    let h = hash.hash(&[
        signature.r.x.clone(),
        signature.r.y.clone(),
        signature.public_key.x.clone(),
        signature.public_key.y.clone(),
        signature.message.clone(),
    ])?;

    let lhs = curve.scalar_mul_base(&s_bits)?;
    let h_pk = curve.scalar_mul(&signature.public_key, &h.to_bits_le()?)?;
    let rhs = curve.add(&signature.r, &h_pk);

    curve.assert_equal(&curve.clear_cofactor(&lhs)?, &curve.clear_cofactor(&rhs)?)
}

/// Circuit proving that one signature verifies.
///
/// The unassigned circuit ([`SignatureCircuit::shape`]) defines the
/// constraint system; an assigned one produces the witness.
#[derive(Clone, Debug, Default)]
pub struct SignatureCircuit {
    witness: Option<SignatureWitness>,
}

impl SignatureCircuit {
    pub fn new(witness: SignatureWitness) -> Self {
        Self {
            witness: Some(witness),
        }
    }

    pub fn witness(&self) -> Option<&SignatureWitness> {
        self.witness.as_ref()
    }
}

impl CircuitShape for SignatureCircuit {
    const SIGNATURES: usize = 1;

    fn shape() -> Self {
        Self::default()
    }
}

impl ConstraintSynthesizer<BaseField> for SignatureCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<BaseField>) -> Result<(), SynthesisError> {
        let curve = CurveContext::new(cs.clone())?;
        let hash = HashGadget::new(cs.clone())?;

        let signature = SignatureVar::new_input(cs.clone(), self.witness.as_ref())?;
        verify_signature(&curve, &hash, &signature)?;

        trace!(constraints = cs.num_constraints(), "defined signature circuit");
        Ok(())
    }
}
