use ark_std::UniformRand;
use rand::{CryptoRng, RngCore};

use crate::{BaseField, ScalarField};

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self;
}

impl RandomField for BaseField {
    #[inline]
    fn random<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        <Self as UniformRand>::rand(rng)
    }
}

impl RandomField for ScalarField {
    #[inline]
    fn random<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        <Self as UniformRand>::rand(rng)
    }
}
