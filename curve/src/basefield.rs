//! Base field of E521: integers modulo the Mersenne prime `p = 2^521 - 1`.

use core::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::LazyLock;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

const MODULUS_BITS: usize = 521;

/// |d| for the curve constant d = -376014.
pub(crate) const EDWARDS_D_ABS: u32 = 376014;

static MODULUS: LazyLock<BigUint> =
    LazyLock::new(|| (BigUint::from(1u32) << MODULUS_BITS) - 1u32);

// (p + 1) / 4, valid as a square-root exponent because p = 3 (mod 4)
static SQRT_EXPONENT: LazyLock<BigUint> = LazyLock::new(|| (&*MODULUS >> 2usize) + 1u32);

/// Reduce using 2^521 = 1 (mod p): fold the high bits onto the low bits.
fn reduce(mut x: BigUint) -> BigUint {
    while x.bits() > MODULUS_BITS as u64 {
        x = (&x & &*MODULUS) + (&x >> MODULUS_BITS);
    }
    if x >= *MODULUS {
        x -= &*MODULUS;
    }
    x
}

/// Element of GF(2^521 - 1), always held in canonical form `0 <= v < p`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BigUint", into = "BigUint")]
pub struct BaseField(BigUint);

impl BaseField {
    /// The field modulus p.
    pub fn modulus() -> &'static BigUint {
        &MODULUS
    }

    /// Reduce an arbitrary nonnegative integer into the field.
    pub fn new(value: BigUint) -> Self {
        BaseField(reduce(value))
    }

    pub fn from_u64(value: u64) -> Self {
        BaseField::new(BigUint::from(value))
    }

    pub fn zero() -> Self {
        BaseField(BigUint::default())
    }

    pub fn one() -> Self {
        BaseField(BigUint::from(1u32))
    }

    /// The Edwards coefficient d = -376014 mod p.
    pub fn d() -> Self {
        -BaseField::from_u64(EDWARDS_D_ABS as u64)
    }

    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    #[inline]
    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.bits() == 0
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        self.0.bit(0)
    }

    #[inline]
    pub fn square(&self) -> Self {
        self * self
    }

    pub fn pow(&self, exponent: &BigUint) -> Self {
        BaseField(self.0.modpow(exponent, &MODULUS))
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn invert(&self) -> Option<Self> {
        self.0.modinv(&MODULUS).map(BaseField)
    }

    /// Square root whose least significant bit equals `lsb`, if one exists.
    ///
    /// Zero is its own (only) root and is returned regardless of `lsb`.
    pub fn sqrt(&self, lsb: bool) -> Option<Self> {
        if self.is_zero() {
            return Some(BaseField::zero());
        }

        let mut root = self.pow(&SQRT_EXPONENT);
        if root.is_odd() != lsb {
            root = -root;
        }

        (root.square() == *self).then_some(root)
    }
}

impl From<BigUint> for BaseField {
    fn from(value: BigUint) -> Self {
        BaseField::new(value)
    }
}

impl From<BaseField> for BigUint {
    fn from(value: BaseField) -> Self {
        value.0
    }
}

impl From<u64> for BaseField {
    fn from(value: u64) -> Self {
        BaseField::from_u64(value)
    }
}

impl Add<&BaseField> for &BaseField {
    type Output = BaseField;

    fn add(self, rhs: &BaseField) -> BaseField {
        BaseField::new(&self.0 + &rhs.0)
    }
}

impl Sub<&BaseField> for &BaseField {
    type Output = BaseField;

    fn sub(self, rhs: &BaseField) -> BaseField {
        BaseField::new(&self.0 + &*MODULUS - &rhs.0)
    }
}

impl Mul<&BaseField> for &BaseField {
    type Output = BaseField;

    fn mul(self, rhs: &BaseField) -> BaseField {
        BaseField::new(&self.0 * &rhs.0)
    }
}

/// # Panics
///
/// Panics if `rhs` is zero.
impl Div<&BaseField> for &BaseField {
    type Output = BaseField;

    fn div(self, rhs: &BaseField) -> BaseField {
        match rhs.invert() {
            Some(inv) => self * &inv,
            None => panic!("division by zero in GF(2^521 - 1)"),
        }
    }
}

impl Neg for &BaseField {
    type Output = BaseField;

    fn neg(self) -> BaseField {
        if self.is_zero() {
            return BaseField::zero();
        }
        BaseField(&*MODULUS - &self.0)
    }
}

impl Neg for BaseField {
    type Output = BaseField;

    fn neg(self) -> BaseField {
        -&self
    }
}

forward_owned_binop!(BaseField, Add, add);
forward_owned_binop!(BaseField, Sub, sub);
forward_owned_binop!(BaseField, Mul, mul);
forward_owned_binop!(BaseField, Div, div);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulus_is_3_mod_4() {
        let p = BaseField::modulus();
        assert!(p.bit(0) && p.bit(1));
        assert_eq!(p.bits(), 521);
    }

    #[test]
    fn test_reduce_wraps_at_modulus() {
        let p = BaseField::modulus().clone();
        assert!(BaseField::new(p.clone()).is_zero());
        assert_eq!(BaseField::new(&p + 5u32), BaseField::from_u64(5));
        assert_eq!(BaseField::new(&p * &p + 7u32), BaseField::from_u64(7));
    }

    #[test]
    fn test_sub_and_neg() {
        let a = BaseField::from_u64(3);
        let b = BaseField::from_u64(10);
        assert_eq!(&(&a - &b) + &b, a);
        assert_eq!(-BaseField::zero(), BaseField::zero());
        assert_eq!(&a + &(-&a), BaseField::zero());
    }

    #[test]
    fn test_division_inverts_multiplication() {
        let a = BaseField::from_u64(123456789);
        let b = BaseField::from_u64(987654321);
        assert_eq!(&(&a * &b) / &b, a);
        assert!(BaseField::zero().invert().is_none());
    }

    #[test]
    #[should_panic]
    fn test_division_by_zero_panics() {
        let _ = BaseField::one() / BaseField::zero();
    }

    #[test]
    fn test_d_is_negative_376014() {
        assert_eq!(BaseField::d() + BaseField::from_u64(376014), BaseField::zero());
    }

    #[test]
    fn test_sqrt_respects_lsb() {
        let v = BaseField::from_u64(49);
        let even = v.sqrt(false).expect("square");
        let odd = v.sqrt(true).expect("square");
        assert!(!even.is_odd());
        assert!(odd.is_odd());
        assert_eq!(even.square(), v);
        assert_eq!(odd.square(), v);
        assert_eq!(&even + &odd, BaseField::zero());
    }

    #[test]
    fn test_sqrt_of_non_residue() {
        // -1 is a non-residue since p = 3 (mod 4)
        assert!((-BaseField::one()).sqrt(false).is_none());
        assert!((-BaseField::one()).sqrt(true).is_none());
    }

    #[test]
    fn test_sqrt_of_zero() {
        assert_eq!(BaseField::zero().sqrt(true), Some(BaseField::zero()));
    }
}
