use core::ops::{Add, Neg};

use num_bigint::BigUint;

/// Bit access for anything usable as a multiplier.
pub trait ScalarBits {
    /// Number of significant bits; zero for the value zero.
    fn bit_len(&self) -> u64;
    /// Bit `i`, counting from the least significant bit.
    fn bit(&self, i: u64) -> bool;
}

impl ScalarBits for BigUint {
    #[inline]
    fn bit_len(&self) -> u64 {
        self.bits()
    }

    #[inline]
    fn bit(&self, i: u64) -> bool {
        BigUint::bit(self, i)
    }
}

pub trait Group:
    Sized + Clone + PartialEq + Neg<Output = Self> + for<'a> Add<&'a Self, Output = Self>
{
    type Scalar: ScalarBits;

    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    /// Binary double-and-add, walking the scalar from its least significant bit.
    #[inline]
    fn scalar_mul(&self, scalar: &Self::Scalar) -> Self {
        let mut result = Self::identity();
        let mut addend = self.clone();

        for i in 0..scalar.bit_len() {
            if scalar.bit(i) {
                result = result + &addend;
            }
            addend = addend.double();
        }

        result
    }

    /// `sum(scalars[i] * points[i])`, as used for `z * G + h * V` in verification.
    ///
    /// # Panics
    ///
    /// Panics if the slices differ in length.
    fn multi_scalar_mul(points: &[Self], scalars: &[Self::Scalar]) -> Self {
        assert_eq!(points.len(), scalars.len(), "one scalar per point");
        points
            .iter()
            .zip(scalars)
            .fold(Self::identity(), |acc, (point, scalar)| {
                acc + &point.scalar_mul(scalar)
            })
    }
}
