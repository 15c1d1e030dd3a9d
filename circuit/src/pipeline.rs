//! Groth16 proof pipeline over BN254.
//!
//! A circuit shape goes through five stages, in order:
//!
//! 1. [`compile`] synthesises the unassigned shape into R1CS matrices.
//! 2. [`setup`] derives a proving and a verifying key for those matrices.
//! 3. [`build_witness`] synthesises an assigned circuit into a full assignment.
//! 4. [`prove`] checks the assignment against the matrices and creates a proof.
//! 5. [`verify`] checks a proof against the public inputs.
//!
//! Every artifact carries the [`CircuitDigest`] of the constraint system it was
//! derived from, so keys and witnesses of different circuits are never mixed.

use core::fmt;

use ark_bn254::Bn254;
use ark_ff::{UniformRand, Zero};
use ark_groth16::Groth16;
use ark_relations::r1cs::{
    ConstraintMatrices, ConstraintSynthesizer, ConstraintSystem, ConstraintSystemRef,
    OptimizationGoal, SynthesisMode,
};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, SerializationError};
use ark_snark::{CircuitSpecificSetupSNARK, SNARK};
use curve::BaseField;
use rand::{CryptoRng, RngCore};
use tracing::{debug, info, warn};

use crate::errors::{
    CompileError, PipelineError, ProveError, SetupError, VerifyError, WitnessError,
};

/// Pairing engine of the proof system. Its scalar field is [`BaseField`].
pub type Engine = Bn254;

type Snark = Groth16<Engine>;

/// A circuit type whose unassigned value defines a constraint system.
pub trait CircuitShape: ConstraintSynthesizer<BaseField> + Clone {
    /// Number of signatures verified by one proof.
    const SIGNATURES: usize;

    /// The circuit without any assignment.
    fn shape() -> Self;
}

/// Size of a constraint system.
///
/// Instance variables include the constant one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CircuitDigest {
    pub num_constraints: usize,
    pub num_instance_variables: usize,
    pub num_witness_variables: usize,
}

impl CircuitDigest {
    fn of(cs: &ConstraintSystemRef<BaseField>) -> Self {
        Self {
            num_constraints: cs.num_constraints(),
            num_instance_variables: cs.num_instance_variables(),
            num_witness_variables: cs.num_witness_variables(),
        }
    }

    pub fn num_public_inputs(&self) -> usize {
        self.num_instance_variables.saturating_sub(1)
    }
}

/// Compiled constraint system of circuit `C`. Immutable once built.
pub struct CompiledCircuit<C> {
    shape: C,
    matrices: ConstraintMatrices<BaseField>,
    digest: CircuitDigest,
}

impl<C> CompiledCircuit<C> {
    pub fn digest(&self) -> CircuitDigest {
        self.digest
    }

    pub fn matrices(&self) -> &ConstraintMatrices<BaseField> {
        &self.matrices
    }

    /// Index of the first constraint `a * b = c` the assignment violates.
    fn first_unsatisfied(&self, assignment: &[BaseField]) -> Option<usize> {
        let eval = |row: &[(BaseField, usize)]| {
            row.iter().fold(BaseField::zero(), |acc, (coeff, index)| {
                acc + *coeff * assignment[*index]
            })
        };

        (0..self.digest.num_constraints).find(|&i| {
            eval(&self.matrices.a[i]) * eval(&self.matrices.b[i]) != eval(&self.matrices.c[i])
        })
    }
}

impl<C> fmt::Debug for CompiledCircuit<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledCircuit")
            .field("digest", &self.digest)
            .finish_non_exhaustive()
    }
}

/// Groth16 proving key, tagged with the circuit it was derived from.
#[derive(Clone)]
pub struct ProvingKey {
    inner: ark_groth16::ProvingKey<Engine>,
    digest: CircuitDigest,
}

impl ProvingKey {
    pub fn digest(&self) -> CircuitDigest {
        self.digest
    }
}

/// Groth16 verifying key, tagged with the circuit it was derived from.
#[derive(Clone)]
pub struct VerifyingKey {
    inner: ark_groth16::VerifyingKey<Engine>,
    digest: CircuitDigest,
}

impl VerifyingKey {
    pub fn digest(&self) -> CircuitDigest {
        self.digest
    }

    /// Compressed canonical encoding of the Groth16 verifying key.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        let mut bytes = Vec::with_capacity(self.inner.compressed_size());
        self.inner.serialize_compressed(&mut bytes)?;
        Ok(bytes)
    }
}

/// Full assignment: instance variables (constant one first), then witness
/// variables.
#[derive(Clone)]
pub struct Witness {
    assignment: Vec<BaseField>,
    digest: CircuitDigest,
}

impl Witness {
    pub fn digest(&self) -> CircuitDigest {
        self.digest
    }
}

/// The public inputs of a witness, without the constant one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicWitness {
    inputs: Vec<BaseField>,
}

impl PublicWitness {
    pub fn new(inputs: Vec<BaseField>) -> Self {
        Self { inputs }
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn as_slice(&self) -> &[BaseField] {
        &self.inputs
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Proof {
    inner: ark_groth16::Proof<Engine>,
}

impl Proof {
    /// Compressed canonical encoding (128 bytes).
    pub fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        let mut bytes = Vec::with_capacity(self.inner.compressed_size());
        self.inner.serialize_compressed(&mut bytes)?;
        Ok(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        let inner = ark_groth16::Proof::deserialize_compressed(bytes)?;
        Ok(Self { inner })
    }
}

/// Result of checking a well-formed proof.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    Valid,
    Invalid,
}

impl VerifyOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, VerifyOutcome::Valid)
    }
}

fn new_constraint_system(mode: SynthesisMode) -> ConstraintSystemRef<BaseField> {
    let cs = ConstraintSystem::<BaseField>::new_ref();
    cs.set_optimization_goal(OptimizationGoal::Constraints);
    cs.set_mode(mode);
    cs
}

/// Synthesises the constraint system of `shape`.
pub fn compile<C: CircuitShape>(shape: C) -> Result<CompiledCircuit<C>, CompileError> {
    debug!(signatures = C::SIGNATURES, "compiling circuit");

    let cs = new_constraint_system(SynthesisMode::Setup);
    shape
        .clone()
        .generate_constraints(cs.clone())
        .map_err(CompileError::Definition)?;
    cs.finalize();

    let matrices = cs.to_matrices().ok_or(CompileError::MissingConstraintSystem)?;
    let digest = CircuitDigest::of(&cs);

    info!(
        signatures = C::SIGNATURES,
        constraints = digest.num_constraints,
        instance_variables = digest.num_instance_variables,
        witness_variables = digest.num_witness_variables,
        "compiled circuit"
    );

    Ok(CompiledCircuit {
        shape,
        matrices,
        digest,
    })
}

/// Runs a (non-ceremonial) Groth16 setup for a compiled circuit.
pub fn setup<C: CircuitShape, R: RngCore + CryptoRng>(
    compiled: &CompiledCircuit<C>,
    rng: &mut R,
) -> Result<(ProvingKey, VerifyingKey), SetupError> {
    debug!(constraints = compiled.digest.num_constraints, "running setup");

    let (pk, vk) = Snark::setup(compiled.shape.clone(), rng).map_err(SetupError::Synthesis)?;

    info!(
        public_inputs = vk.gamma_abc_g1.len().saturating_sub(1),
        "generated keys"
    );

    Ok((
        ProvingKey {
            inner: pk,
            digest: compiled.digest,
        },
        VerifyingKey {
            inner: vk,
            digest: compiled.digest,
        },
    ))
}

/// Synthesises `assigned` into a full assignment for `compiled`.
///
/// The assignment is not checked for satisfaction here; [`prove`] does that.
pub fn build_witness<C: CircuitShape>(
    compiled: &CompiledCircuit<C>,
    assigned: C,
) -> Result<(Witness, PublicWitness), WitnessError> {
    debug!(signatures = C::SIGNATURES, "building witness");

    let cs = new_constraint_system(SynthesisMode::Prove {
        construct_matrices: false,
    });
    assigned
        .generate_constraints(cs.clone())
        .map_err(WitnessError::Synthesis)?;
    cs.finalize();

    let digest = CircuitDigest::of(&cs);
    if digest != compiled.digest {
        return Err(WitnessError::ShapeMismatch {
            expected: compiled.digest,
            actual: digest,
        });
    }

    let system = cs.borrow().ok_or(WitnessError::MissingConstraintSystem)?;
    let public = PublicWitness::new(system.instance_assignment[1..].to_vec());
    let assignment = [
        system.instance_assignment.as_slice(),
        system.witness_assignment.as_slice(),
    ]
    .concat();

    debug!(
        public_inputs = public.len(),
        witness_variables = system.witness_assignment.len(),
        "built witness"
    );

    Ok((Witness { assignment, digest }, public))
}

/// Creates a proof that `witness` satisfies `compiled`.
pub fn prove<C: CircuitShape, R: RngCore + CryptoRng>(
    compiled: &CompiledCircuit<C>,
    pk: &ProvingKey,
    witness: &Witness,
    rng: &mut R,
) -> Result<Proof, ProveError> {
    debug!(constraints = compiled.digest.num_constraints, "proving");

    if pk.digest != compiled.digest {
        return Err(ProveError::KeyMismatch {
            expected: compiled.digest,
            actual: pk.digest,
        });
    }
    if witness.digest != compiled.digest {
        return Err(ProveError::WitnessMismatch {
            expected: compiled.digest,
            actual: witness.digest,
        });
    }
    if let Some(constraint) = compiled.first_unsatisfied(&witness.assignment) {
        warn!(constraint, "witness does not satisfy constraint");
        return Err(ProveError::Unsatisfied { constraint });
    }

    let r = BaseField::rand(rng);
    let s = BaseField::rand(rng);
    let inner = Snark::create_proof_with_reduction_and_matrices(
        &pk.inner,
        r,
        s,
        &compiled.matrices,
        compiled.digest.num_instance_variables,
        compiled.digest.num_constraints,
        &witness.assignment,
    )
    .map_err(ProveError::Synthesis)?;

    info!(signatures = C::SIGNATURES, "created proof");
    Ok(Proof { inner })
}

/// Checks `proof` against the verifying key and public inputs.
///
/// A proof that does not verify is [`VerifyOutcome::Invalid`], not an error.
pub fn verify(
    proof: &Proof,
    vk: &VerifyingKey,
    public: &PublicWitness,
) -> Result<VerifyOutcome, VerifyError> {
    let expected = vk.inner.gamma_abc_g1.len().saturating_sub(1);
    if public.len() != expected {
        return Err(VerifyError::PublicInputLength {
            expected,
            actual: public.len(),
        });
    }

    let valid =
        Snark::verify(&vk.inner, public.as_slice(), &proof.inner).map_err(VerifyError::Synthesis)?;
    let outcome = if valid {
        VerifyOutcome::Valid
    } else {
        VerifyOutcome::Invalid
    };

    info!(outcome = ?outcome, public_inputs = public.len(), "verified proof");
    Ok(outcome)
}

/// Runs all five stages for one assigned circuit.
pub fn run_pipeline<C: CircuitShape, R: RngCore + CryptoRng>(
    shape: C,
    assigned: C,
    rng: &mut R,
) -> Result<VerifyOutcome, PipelineError> {
    let compiled = compile(shape)?;
    let (pk, vk) = setup(&compiled, rng)?;
    let (witness, public) = build_witness(&compiled, assigned)?;
    let proof = prove(&compiled, &pk, &witness, rng)?;
    Ok(verify(&proof, &vk, &public)?)
}
