use num_bigint::BigUint;
use rand::Rng;

use crate::{clear_cofactor, BaseField, ScalarField};

// Extra bytes beyond the modulus size keep the reduction bias negligible.
const WIDE_BYTES: usize = 80;

/// Bytes of entropy behind an ephemeral scalar.
const EPHEMERAL_BYTES: usize = 64;

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

fn wide_integer<R: Rng + ?Sized>(rng: &mut R) -> BigUint {
    let mut bytes = [0u8; WIDE_BYTES];
    rng.fill_bytes(&mut bytes);
    BigUint::from_bytes_be(&bytes)
}

impl RandomField for BaseField {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        BaseField::new(wide_integer(rng))
    }
}

impl RandomField for ScalarField {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        ScalarField::from_biguint(wide_integer(rng))
    }
}

/// A fresh 512-bit integer from `rng`, multiplied by the cofactor.
pub fn random_scalar<R: Rng + ?Sized>(rng: &mut R) -> BigUint {
    let mut bytes = [0u8; EPHEMERAL_BYTES];
    rng.fill_bytes(&mut bytes);
    clear_cofactor(BigUint::from_bytes_be(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_scalar_is_cleared_and_bounded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let k = random_scalar(&mut rng);
            assert!(!k.bit(0) && !k.bit(1));
            assert!(k.bits() <= 514);
        }
    }

    #[test]
    fn test_random_elements_are_reduced() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..32 {
            assert!(BaseField::random(&mut rng).value() < BaseField::modulus());
            assert!(ScalarField::random(&mut rng).value() < ScalarField::order());
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = random_scalar(&mut StdRng::seed_from_u64(3));
        let b = random_scalar(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
