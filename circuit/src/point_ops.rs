//! In-circuit BabyJubJub point operations.
//!
//! Points are [`EdwardsVar`]s: affine (x, y) pairs of native BN254 scalar
//! field variables. Twisted Edwards addition is complete, so none of the
//! operations below needs an identity or doubling special case.

use ark_ec::AffineRepr;
use ark_ed_on_bn254::constraints::EdwardsVar;
use ark_ff::{One, PrimeField};
use ark_r1cs_std::fields::fp::FpVar;
use ark_r1cs_std::prelude::*;
use ark_relations::r1cs::{ConstraintSystemRef, SynthesisError};
use curve::{Affine, BaseField, ScalarField, COFACTOR_DOUBLINGS};

/// A curve point allocated in the constraint system.
pub type PointVar = EdwardsVar;

/// Allocates a point from an affine value.
///
/// Every allocated point is constrained to satisfy the curve equation.
pub fn alloc_point(
    cs: ConstraintSystemRef<BaseField>,
    f: impl FnOnce() -> Result<Affine, SynthesisError>,
    mode: AllocationMode,
) -> Result<PointVar, SynthesisError> {
    <PointVar as AllocVar<Affine, BaseField>>::new_variable(cs, f, mode)
}

/// Curve context bound to one constraint system.
///
/// Holds the base point as a circuit constant. A single context is shared by
/// every signature relation emitted into the same constraint system.
#[derive(Clone)]
pub struct CurveContext {
    base: PointVar,
}

impl CurveContext {
    /// Creates the context, failing if no constraint system is attached.
    pub fn new(cs: ConstraintSystemRef<BaseField>) -> Result<Self, SynthesisError> {
        if cs.is_none() {
            return Err(SynthesisError::MissingCS);
        }
        Ok(Self {
            base: PointVar::constant(Affine::generator().into_group()),
        })
    }

    /// The fixed generator `B` of the prime-order subgroup.
    pub fn base(&self) -> &PointVar {
        &self.base
    }

    /// Computes `B * k` for little-endian scalar bits `k`.
    pub fn scalar_mul_base(
        &self,
        scalar_bits: &[Boolean<BaseField>],
    ) -> Result<PointVar, SynthesisError> {
        self.base.scalar_mul_le(scalar_bits.iter())
    }

    /// Computes `P * k` for little-endian scalar bits `k` by double-and-add.
    pub fn scalar_mul(
        &self,
        point: &PointVar,
        scalar_bits: &[Boolean<BaseField>],
    ) -> Result<PointVar, SynthesisError> {
        point.scalar_mul_le(scalar_bits.iter())
    }

    pub fn add(&self, lhs: &PointVar, rhs: &PointVar) -> PointVar {
        lhs.clone() + rhs
    }

    /// Multiplies a point by the cofactor (8) with three doublings.
    pub fn clear_cofactor(&self, point: &PointVar) -> Result<PointVar, SynthesisError> {
        let mut result = point.clone();
        for _ in 0..COFACTOR_DOUBLINGS {
            result.double_in_place()?;
        }
        Ok(result)
    }

    /// Enforces coordinate-wise equality of two points.
    pub fn assert_equal(&self, lhs: &PointVar, rhs: &PointVar) -> Result<(), SynthesisError> {
        lhs.enforce_equal(rhs)
    }

    pub fn assert_not_identity(&self, point: &PointVar) -> Result<(), SynthesisError> {
        point
            .is_eq(&PointVar::zero())?
            .enforce_equal(&Boolean::constant(false))
    }

    /// Enforces that `[8]P` is not the identity, i.e. `P` has no small order.
    pub fn assert_not_small_order(&self, point: &PointVar) -> Result<(), SynthesisError> {
        self.assert_not_identity(&self.clear_cofactor(point)?)
    }

    /// Little-endian bits of `scalar`, constrained to encode a value below
    /// the subgroup order.
    pub fn canonical_scalar_bits(
        &self,
        scalar: &FpVar<BaseField>,
    ) -> Result<Vec<Boolean<BaseField>>, SynthesisError> {
        let bits = scalar.to_bits_le()?;
        let max = (-ScalarField::one()).into_bigint();
        Boolean::enforce_smaller_or_equal_than_le(&bits, max)?;
        Ok(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::CurveGroup;
    use ark_ff::BigInteger;
    use ark_relations::r1cs::ConstraintSystem;
    use curve::scalar_to_base;

    fn scalar_bits(
        cs: ConstraintSystemRef<BaseField>,
        scalar: ScalarField,
    ) -> Vec<Boolean<BaseField>> {
        FpVar::new_witness(cs, || Ok(scalar_to_base(&scalar)))
            .expect("alloc scalar")
            .to_bits_le()
            .expect("bits")
    }

    #[test]
    fn test_context_requires_constraint_system() {
        assert!(matches!(
            CurveContext::new(ConstraintSystemRef::None),
            Err(SynthesisError::MissingCS)
        ));
    }

    #[test]
    fn test_scalar_mul_base() {
        let cs = ConstraintSystem::<BaseField>::new_ref();
        let curve = CurveContext::new(cs.clone()).expect("context");
        let scalar = ScalarField::from(17u64);

        let bits = scalar_bits(cs.clone(), scalar);
        let result = curve.scalar_mul_base(&bits).expect("mul");
        let expected = (Affine::generator() * scalar).into_affine();

        assert_eq!(result.value().expect("value").into_affine(), expected);
        assert!(cs.is_satisfied().expect("satisfied"));
    }

    #[test]
    fn test_scalar_mul_and_add() {
        let cs = ConstraintSystem::<BaseField>::new_ref();
        let curve = CurveContext::new(cs.clone()).expect("context");
        let p = (Affine::generator() * ScalarField::from(5u64)).into_affine();
        let q = (Affine::generator() * ScalarField::from(9u64)).into_affine();

        let p_var = alloc_point(cs.clone(), || Ok(p), AllocationMode::Witness).expect("alloc p");
        let q_var = alloc_point(cs.clone(), || Ok(q), AllocationMode::Witness).expect("alloc q");
        let bits = scalar_bits(cs.clone(), ScalarField::from(3u64));

        let sum = curve.add(&curve.scalar_mul(&p_var, &bits).expect("mul"), &q_var);
        // 3 * 5 + 9 = 24
        let expected = (Affine::generator() * ScalarField::from(24u64)).into_affine();

        assert_eq!(sum.value().expect("value").into_affine(), expected);
        assert!(cs.is_satisfied().expect("satisfied"));
    }

    #[test]
    fn test_clear_cofactor() {
        let cs = ConstraintSystem::<BaseField>::new_ref();
        let curve = CurveContext::new(cs.clone()).expect("context");

        let cleared = curve.clear_cofactor(curve.base()).expect("double");
        let expected = (Affine::generator() * ScalarField::from(8u64)).into_affine();

        assert_eq!(cleared.value().expect("value").into_affine(), expected);
    }

    #[test]
    fn test_small_order_points_are_rejected() {
        // (0, -1) has order 2.
        let order_two = Affine::new_unchecked(BaseField::from(0u64), -BaseField::one());
        for (point, rejected) in [
            (Affine::zero(), true),
            (order_two, true),
            (Affine::generator(), false),
        ] {
            let cs = ConstraintSystem::<BaseField>::new_ref();
            let curve = CurveContext::new(cs.clone()).expect("context");
            let var = alloc_point(cs.clone(), || Ok(point), AllocationMode::Input).expect("alloc");
            curve.assert_not_small_order(&var).expect("enforce");

            assert_eq!(cs.is_satisfied().expect("satisfied"), !rejected);
        }
    }

    #[test]
    fn test_canonical_scalar_bits() {
        let order = BaseField::from_le_bytes_mod_order(&ScalarField::MODULUS.to_bytes_le());
        for (value, canonical) in [
            (order - BaseField::one(), true),
            (order, false),
            (order + BaseField::from(5u64), false),
        ] {
            let cs = ConstraintSystem::<BaseField>::new_ref();
            let curve = CurveContext::new(cs.clone()).expect("context");
            let var = FpVar::new_input(cs.clone(), || Ok(value)).expect("alloc");
            curve.canonical_scalar_bits(&var).expect("bits");

            assert_eq!(cs.is_satisfied().expect("satisfied"), canonical);
        }
    }

    #[test]
    fn test_assert_equal_detects_mismatch() {
        let cs = ConstraintSystem::<BaseField>::new_ref();
        let curve = CurveContext::new(cs.clone()).expect("context");
        let p = (Affine::generator() * ScalarField::from(2u64)).into_affine();

        let p_var = alloc_point(cs.clone(), || Ok(p), AllocationMode::Witness).expect("alloc p");
        curve.assert_equal(&p_var, curve.base()).expect("enforce");

        assert!(!cs.is_satisfied().expect("satisfied"));
    }
}
