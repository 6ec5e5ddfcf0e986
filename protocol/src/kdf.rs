//! Key derivation, keystreams and tags, all built on KMACXOF256.

use keccak::{kmacxof256, KmacXof256};
use num_bigint::{BigInt, BigUint};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::constants::{DIGEST_BITS, DIGEST_SIZE};

/// Unsigned big-endian interpretation of a byte string.
pub(crate) fn derive_integer(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Minimal two's-complement big-endian bytes of a non-negative integer.
///
/// A leading zero byte is present whenever the top bit of the magnitude would
/// otherwise be set, and zero encodes as a single `0x00`. Curve coordinates
/// and scalars are keyed into KMAC in this form.
pub(crate) fn integer_bytes(n: &BigUint) -> Vec<u8> {
    BigInt::from(n.clone()).to_signed_bytes_be()
}

/// Encryption key and authentication key squeezed from one KMAC call.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct SplitKeys {
    ke: [u8; DIGEST_SIZE],
    ka: [u8; DIGEST_SIZE],
}

impl SplitKeys {
    /// `(ke || ka) = KMACXOF256(key, "", 1024, label)`.
    pub(crate) fn derive(key: &[u8], label: &[u8]) -> Self {
        let mut keys = SplitKeys {
            ke: [0u8; DIGEST_SIZE],
            ka: [0u8; DIGEST_SIZE],
        };
        let mut reader = KmacXof256::new(key, label).finalize_xof();
        reader.squeeze(&mut keys.ke);
        reader.squeeze(&mut keys.ka);
        keys
    }

    /// Split keys for a symmetric cryptogram, keyed by `nonce || password`.
    pub(crate) fn for_password(nonce: &[u8], password: &[u8], label: &[u8]) -> Self {
        let mut key = Zeroizing::new(Vec::with_capacity(nonce.len() + password.len()));
        key.extend_from_slice(nonce);
        key.extend_from_slice(password);
        SplitKeys::derive(&key, label)
    }

    pub(crate) fn ke(&self) -> &[u8] {
        &self.ke
    }

    pub(crate) fn ka(&self) -> &[u8] {
        &self.ka
    }
}

/// XOR `data` with `KMACXOF256(ke, "", 8 * |data|, label)`.
///
/// The same call encrypts and decrypts.
pub(crate) fn keystream_xor(ke: &[u8], data: &[u8], label: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; data.len()];
    KmacXof256::new(ke, label).finalize_xof().squeeze(&mut out);
    out.iter_mut().zip(data).for_each(|(o, d)| *o ^= d);
    out
}

/// `KMACXOF256(ka, message, 512, label)`.
pub(crate) fn auth_tag(ka: &[u8], message: &[u8], label: &[u8]) -> Vec<u8> {
    kmacxof256(ka, message, DIGEST_BITS, label)
}

/// Constant-time equality. Slices of different length compare unequal.
pub(crate) fn tags_match(expected: &[u8], actual: &[u8]) -> bool {
    expected.ct_eq(actual).into()
}
