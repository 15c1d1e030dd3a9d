//! Error types for each stage of the proof pipeline.
//!
//! Every variant here is a hard failure for the current proof request. A proof
//! that is well formed but does not verify is reported as
//! [`crate::VerifyOutcome::Invalid`] instead.

use core::fmt;

use ark_relations::r1cs::SynthesisError;
use eddsa::EddsaError;
use thiserror::Error;

use crate::pipeline::CircuitDigest;

/// Pipeline stage, used to report where a request failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    Compile,
    Setup,
    BuildWitness,
    Prove,
    Verify,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Compile => "compile",
            Stage::Setup => "setup",
            Stage::BuildWitness => "build witness",
            Stage::Prove => "prove",
            Stage::Verify => "verify",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum CompileError {
    /// The circuit definition failed, e.g. a gadget could not be constructed.
    #[error("circuit definition failed: {0}")]
    Definition(#[source] SynthesisError),
    #[error("constraint system was not constructed")]
    MissingConstraintSystem,
}

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("trusted setup failed: {0}")]
    Synthesis(#[source] SynthesisError),
}

#[derive(Error, Debug)]
pub enum WitnessError {
    /// Input bytes did not decode to a key, signature or message.
    #[error("malformed input: {0}")]
    Malformed(#[from] EddsaError),
    #[error("batch needs {expected} signatures, got {actual}")]
    BatchSize { expected: usize, actual: usize },
    /// Assigning values failed, e.g. because the circuit carries no assignment.
    #[error("witness synthesis failed: {0}")]
    Synthesis(#[source] SynthesisError),
    #[error("witness shape {actual:?} does not match compiled circuit {expected:?}")]
    ShapeMismatch {
        expected: CircuitDigest,
        actual: CircuitDigest,
    },
    #[error("constraint system was not constructed")]
    MissingConstraintSystem,
}

#[derive(Error, Debug)]
pub enum ProveError {
    #[error("proving key belongs to {actual:?}, circuit is {expected:?}")]
    KeyMismatch {
        expected: CircuitDigest,
        actual: CircuitDigest,
    },
    #[error("witness belongs to {actual:?}, circuit is {expected:?}")]
    WitnessMismatch {
        expected: CircuitDigest,
        actual: CircuitDigest,
    },
    /// The witness violates the constraint with this index.
    #[error("witness does not satisfy constraint {constraint}")]
    Unsatisfied { constraint: usize },
    #[error("proof generation failed: {0}")]
    Synthesis(#[source] SynthesisError),
}

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("verifying key expects {expected} public inputs, got {actual}")]
    PublicInputLength { expected: usize, actual: usize },
    #[error("verification failed: {0}")]
    Synthesis(#[source] SynthesisError),
}

/// Failure of any pipeline stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error(transparent)]
    Witness(#[from] WitnessError),
    #[error(transparent)]
    Prove(#[from] ProveError),
    #[error(transparent)]
    Verify(#[from] VerifyError),
}

impl PipelineError {
    /// The stage that failed.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Compile(_) => Stage::Compile,
            PipelineError::Setup(_) => Stage::Setup,
            PipelineError::Witness(_) => Stage::BuildWitness,
            PipelineError::Prove(_) => Stage::Prove,
            PipelineError::Verify(_) => Stage::Verify,
        }
    }
}
