//! Conversions between the BabyJubJub scalar field and its base field.
//!
//! The scalar field order is smaller than the base field modulus, so lifting a
//! scalar into the base field is exact. The opposite direction reduces modulo
//! the subgroup order.

use ark_ff::{BigInteger, PrimeField};

use crate::{BaseField, ScalarField};

/// Lifts a scalar into the base field without changing its integer value.
pub fn scalar_to_base(scalar: &ScalarField) -> BaseField {
    BaseField::from_le_bytes_mod_order(&scalar.into_bigint().to_bytes_le())
}

/// Reduces a base field element modulo the subgroup order.
pub fn base_to_scalar(element: &BaseField) -> ScalarField {
    ScalarField::from_le_bytes_mod_order(&element.into_bigint().to_bytes_le())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RandomField;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_lift_preserves_value() {
        let mut rng = StdRng::seed_from_u64(11);
        let scalar = ScalarField::random(&mut rng);
        let lifted = scalar_to_base(&scalar);

        assert_eq!(lifted.into_bigint(), scalar.into_bigint());
        assert_eq!(base_to_scalar(&lifted), scalar);
    }

    #[test]
    fn test_reduce_wraps_at_subgroup_order() {
        let order = BaseField::from_le_bytes_mod_order(&ScalarField::MODULUS.to_bytes_le());
        assert_eq!(base_to_scalar(&order), ScalarField::from(0u64));
        assert_eq!(
            base_to_scalar(&(order + BaseField::from(5u64))),
            ScalarField::from(5u64)
        );
    }
}
