//! Scalar field of E521: integers modulo the prime subgroup order
//! r = 2^519 - 337554763258501705789107630418782636071904961214051226618635150085779108655765.
//!
//! The full group has order 4r; scalars used for multiplication are cleared of
//! the cofactor 4 before use so results land in the order-r subgroup.

use core::ops::{Add, Mul, Neg, Sub};
use std::sync::LazyLock;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Cofactor of E521.
pub const COFACTOR: u32 = 4;

// r as little-endian u32 digits
const ORDER_DIGITS: [u32; 17] = [
    0xf5180d6b, 0x40ea2435, 0x9a8f1f45, 0xfbd8c456, 0x7ec53f04, 0x36b8af5e, 0x46fc85f7,
    0x15b6c647, 0xfffffffd, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
    0xffffffff, 0xffffffff, 0x0000007f,
];

static ORDER: LazyLock<BigUint> = LazyLock::new(|| BigUint::from_slice(&ORDER_DIGITS));

/// Multiply by the cofactor.
pub fn clear_cofactor(n: BigUint) -> BigUint {
    n * COFACTOR
}

/// Integer modulo r, held in canonical form.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "BigUint", into = "BigUint")]
pub struct ScalarField(BigUint);

impl ScalarField {
    /// The subgroup order r.
    pub fn order() -> &'static BigUint {
        &ORDER
    }

    pub fn from_biguint(value: BigUint) -> Self {
        ScalarField(value % &*ORDER)
    }

    pub fn from_canonical_u64(value: u64) -> Self {
        ScalarField::from_biguint(BigUint::from(value))
    }

    pub fn zero() -> Self {
        ScalarField(BigUint::default())
    }

    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    #[inline]
    pub fn to_biguint(&self) -> BigUint {
        self.0.clone()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.bits() == 0
    }
}

impl From<BigUint> for ScalarField {
    fn from(value: BigUint) -> Self {
        ScalarField::from_biguint(value)
    }
}

impl From<ScalarField> for BigUint {
    fn from(value: ScalarField) -> Self {
        value.0
    }
}

impl Add<&ScalarField> for &ScalarField {
    type Output = ScalarField;

    fn add(self, rhs: &ScalarField) -> ScalarField {
        ScalarField::from_biguint(&self.0 + &rhs.0)
    }
}

impl Sub<&ScalarField> for &ScalarField {
    type Output = ScalarField;

    fn sub(self, rhs: &ScalarField) -> ScalarField {
        ScalarField::from_biguint(&self.0 + &*ORDER - &rhs.0)
    }
}

impl Mul<&ScalarField> for &ScalarField {
    type Output = ScalarField;

    fn mul(self, rhs: &ScalarField) -> ScalarField {
        ScalarField::from_biguint(&self.0 * &rhs.0)
    }
}

impl Neg for &ScalarField {
    type Output = ScalarField;

    fn neg(self) -> ScalarField {
        &ScalarField::zero() - self
    }
}

impl Neg for ScalarField {
    type Output = ScalarField;

    fn neg(self) -> ScalarField {
        -&self
    }
}

forward_owned_binop!(ScalarField, Add, add);
forward_owned_binop!(ScalarField, Sub, sub);
forward_owned_binop!(ScalarField, Mul, mul);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_published_constant() {
        let offset: BigUint =
            "337554763258501705789107630418782636071904961214051226618635150085779108655765"
                .parse()
                .expect("decimal");
        let expected = (BigUint::from(1u32) << 519usize) - offset;
        assert_eq!(*ScalarField::order(), expected);
    }

    #[test]
    fn test_wraps_at_order() {
        let r = ScalarField::order().clone();
        assert!(ScalarField::from_biguint(r.clone()).is_zero());
        assert_eq!(
            ScalarField::from_biguint(r + 9u32),
            ScalarField::from_canonical_u64(9)
        );
    }

    #[test]
    fn test_subtraction_wraps_below_zero() {
        let a = ScalarField::from_canonical_u64(3);
        let b = ScalarField::from_canonical_u64(5);
        let diff = &a - &b;
        assert_eq!(diff.to_biguint(), ScalarField::order() - 2u32);
        assert_eq!(diff + b, a);
    }

    #[test]
    fn test_neg() {
        let a = ScalarField::from_canonical_u64(77);
        assert!((&a + &(-&a)).is_zero());
        assert!((-ScalarField::zero()).is_zero());
    }

    #[test]
    fn test_clear_cofactor() {
        assert_eq!(clear_cofactor(BigUint::from(5u32)), BigUint::from(20u32));
    }
}
