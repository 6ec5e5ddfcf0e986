//! SHAKE256, cSHAKE256 and SHA3-256 on top of the sponge.

use crate::encoding::{bytepad, encode_string};
use crate::sponge::{DomainSuffix, Sponge, XofReader};
use crate::RATE;

/// Streaming cSHAKE256.
///
/// With an empty function name and customization string this is exactly
/// SHAKE256: nothing is prefixed and the plain SHAKE suffix is used.
#[derive(Clone)]
pub struct CShake256 {
    sponge: Sponge,
    suffix: DomainSuffix,
}

impl CShake256 {
    /// Start a cSHAKE256 computation with function name `n` and customization `s`.
    pub fn new(n: &[u8], s: &[u8]) -> Self {
        let mut sponge = Sponge::new();
        if n.is_empty() && s.is_empty() {
            return CShake256 {
                sponge,
                suffix: DomainSuffix::Shake,
            };
        }

        let mut prefix = encode_string(n);
        prefix.extend_from_slice(&encode_string(s));
        sponge.absorb(&bytepad(&prefix, RATE));

        CShake256 {
            sponge,
            suffix: DomainSuffix::CShake,
        }
    }

    /// Plain SHAKE256.
    pub fn shake() -> Self {
        Self::new(&[], &[])
    }

    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.sponge.absorb(data);
        self
    }

    /// Finish absorbing and return the output stream.
    pub fn finalize_xof(self) -> XofReader {
        self.sponge.finalize(self.suffix)
    }
}

/// Convert an output length in bits to bytes.
///
/// # Panics
///
/// Panics if `l_bits` is not a multiple of 8.
pub(crate) fn output_bytes(l_bits: usize) -> usize {
    assert!(l_bits % 8 == 0, "output length must be a whole number of bytes");
    l_bits / 8
}

/// `cSHAKE256(X, L, N, S)`.
///
/// # Panics
///
/// Panics if `l_bits` is not a multiple of 8.
pub fn cshake256(x: &[u8], l_bits: usize, n: &[u8], s: &[u8]) -> Vec<u8> {
    let len = output_bytes(l_bits);
    let mut hasher = CShake256::new(n, s);
    hasher.update(x);
    hasher.finalize_xof().squeeze_vec(len)
}

/// `SHAKE256(X, L)`.
///
/// # Panics
///
/// Panics if `l_bits` is not a multiple of 8.
pub fn shake256(x: &[u8], l_bits: usize) -> Vec<u8> {
    cshake256(x, l_bits, &[], &[])
}

/// FIPS 202 SHA3-256. Its rate is the sponge's fixed 136 bytes.
pub fn sha3_256(x: &[u8]) -> [u8; 32] {
    let mut sponge = Sponge::new();
    sponge.absorb(x);
    let mut out = [0u8; 32];
    sponge.finalize(DomainSuffix::Sha3).squeeze(&mut out);
    out
}
