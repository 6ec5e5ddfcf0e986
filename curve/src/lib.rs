//! Edwards curve E521 over the Mersenne prime field `p = 2^521 - 1`.
//!
//! This crate provides the affine point type with the complete Edwards
//! addition law, the base and scalar fields, and helpers for random sampling.
//! The curve equation is `x^2 + y^2 = 1 + d x^2 y^2` with `d = -376014`, and the
//! fixed generator is the point with `x = 4` and even `y`.

/// Owned-operand forwarding for binary operators implemented on references.
macro_rules! forward_owned_binop {
    ($ty:ty, $imp:ident, $method:ident) => {
        impl core::ops::$imp for $ty {
            type Output = $ty;

            #[inline]
            fn $method(self, rhs: $ty) -> $ty {
                (&self).$method(&rhs)
            }
        }

        impl core::ops::$imp<&$ty> for $ty {
            type Output = $ty;

            #[inline]
            fn $method(self, rhs: &$ty) -> $ty {
                (&self).$method(rhs)
            }
        }

        impl core::ops::$imp<$ty> for &$ty {
            type Output = $ty;

            #[inline]
            fn $method(self, rhs: $ty) -> $ty {
                self.$method(&rhs)
            }
        }
    };
}

mod affine;
mod basefield;
mod errors;
mod group;
mod random;
mod scalarfield;

pub use affine::Point;
pub use basefield::BaseField;
pub use errors::CurveError;
pub use group::{Group, ScalarBits};
pub use num_bigint::BigUint;
pub use random::{random_scalar, RandomField};
pub use scalarfield::{clear_cofactor, ScalarField, COFACTOR};
