//! Fixed-size batch of signature relations in one constraint system.

use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};
use curve::BaseField;
use rand::{CryptoRng, RngCore};
use tracing::trace;

use crate::eddsa_circuit::{verify_signature, SignatureVar};
use crate::errors::WitnessError;
use crate::pipeline::CircuitShape;
use crate::point_ops::CurveContext;
use crate::poseidon_gadget::HashGadget;
use crate::signature_witness::SignatureWitness;

/// Number of signatures proven together by [`DefaultBatchCircuit`].
pub const BATCH_SIZE: usize = 200;

pub type DefaultBatchCircuit = BatchSignatureCircuit<BATCH_SIZE>;

/// Circuit proving that `N` signatures all verify.
///
/// Public inputs are the six values of each signature, concatenated in batch
/// order. The batch size is part of the type, so witnesses for one size can
/// never be fed to a key compiled for another.
#[derive(Clone, Debug)]
pub struct BatchSignatureCircuit<const N: usize> {
    witnesses: Option<Box<[SignatureWitness; N]>>,
}

impl<const N: usize> BatchSignatureCircuit<N> {
    /// Builds an assigned batch. Fails unless exactly `N` witnesses are given.
    pub fn new(witnesses: Vec<SignatureWitness>) -> Result<Self, WitnessError> {
        let actual = witnesses.len();
        let witnesses: Box<[SignatureWitness; N]> = witnesses
            .into_boxed_slice()
            .try_into()
            .map_err(|_| WitnessError::BatchSize {
                expected: N,
                actual,
            })?;
        Ok(Self {
            witnesses: Some(witnesses),
        })
    }

    /// Builds a batch of `N` freshly signed random messages.
    pub fn sample<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, WitnessError> {
        let witnesses = (0..N)
            .map(|_| SignatureWitness::sample(rng))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(witnesses)
    }

    pub fn witnesses(&self) -> Option<&[SignatureWitness]> {
        self.witnesses.as_deref().map(|w| w.as_slice())
    }
}

impl<const N: usize> Default for BatchSignatureCircuit<N> {
    fn default() -> Self {
        Self { witnesses: None }
    }
}

impl<const N: usize> CircuitShape for BatchSignatureCircuit<N> {
    const SIGNATURES: usize = N;

    fn shape() -> Self {
        Self::default()
    }
}

impl<const N: usize> ConstraintSynthesizer<BaseField> for BatchSignatureCircuit<N> {
    fn generate_constraints(self, cs: ConstraintSystemRef<BaseField>) -> Result<(), SynthesisError> {
        let curve = CurveContext::new(cs.clone())?;
        let hash = HashGadget::new(cs.clone())?;

        for index in 0..N {
            let witness = self.witnesses.as_ref().map(|w| &w[index]);
            let signature = SignatureVar::new_input(cs.clone(), witness)?;
            verify_signature(&curve, &hash, &signature)?;
            trace!(index, constraints = cs.num_constraints(), "defined batch entry");
        }
        Ok(())
    }
}
