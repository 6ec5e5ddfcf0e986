//! Byte-oriented Keccak sponge with a 136-byte rate.
//!
//! A [`Sponge`] absorbs input; [`Sponge::finalize`] pads the last block and
//! hands back an [`XofReader`] from which any amount of output can be squeezed.
//! Absorbing after finalization is impossible because finalization consumes the
//! sponge.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::keccakf::permute;
use crate::{RATE, STATE_BYTES};

/// Domain separation bits XORed in at the end of the message.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DomainSuffix {
    /// Plain SHAKE framing (`1111` + first padding bit).
    Shake,
    /// cSHAKE framing, used once a function name or customization was absorbed.
    CShake,
    /// FIPS 202 SHA-3 fixed-output framing.
    Sha3,
}

impl DomainSuffix {
    #[inline]
    pub const fn byte(self) -> u8 {
        match self {
            DomainSuffix::Shake => 0x1f,
            DomainSuffix::CShake => 0x04,
            DomainSuffix::Sha3 => 0x06,
        }
    }
}

/// Sponge in its absorbing phase.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sponge {
    state: [u8; STATE_BYTES],
    pt: usize,
    rate: usize,
}

impl Default for Sponge {
    fn default() -> Self {
        Self::new()
    }
}

impl Sponge {
    /// Fresh all-zero state with the cursor at the start of the first block.
    pub fn new() -> Self {
        Sponge {
            state: [0u8; STATE_BYTES],
            pt: 0,
            rate: RATE,
        }
    }

    /// XOR `data` into the rate, permuting every time a block fills up.
    pub fn absorb(&mut self, data: &[u8]) -> &mut Self {
        let mut j = self.pt;
        for &byte in data {
            self.state[j] ^= byte;
            j += 1;
            if j >= self.rate {
                permute(&mut self.state);
                j = 0;
            }
        }
        self.pt = j;
        self
    }

    /// Pad with `suffix` and the final `0x80` bit, permute, and switch to squeezing.
    pub fn finalize(mut self, suffix: DomainSuffix) -> XofReader {
        self.state[self.pt] ^= suffix.byte();
        self.state[self.rate - 1] ^= 0x80;
        permute(&mut self.state);

        XofReader {
            state: self.state,
            pt: 0,
            rate: self.rate,
        }
    }

    /// Current position inside the block being absorbed.
    #[inline]
    pub fn position(&self) -> usize {
        self.pt
    }
}

/// Sponge in its squeezing phase.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct XofReader {
    state: [u8; STATE_BYTES],
    pt: usize,
    rate: usize,
}

impl XofReader {
    /// Fill `out` with the next `out.len()` bytes of the output stream.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        let mut j = self.pt;
        for byte in out.iter_mut() {
            if j >= self.rate {
                permute(&mut self.state);
                j = 0;
            }
            *byte = self.state[j];
            j += 1;
        }
        self.pt = j;
    }

    /// Squeeze `len` bytes into a new vector.
    pub fn squeeze_vec(&mut self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.squeeze(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorb_is_associative() {
        let data: Vec<u8> = (0..=255u8).cycle().take(500).collect();

        let mut one = Sponge::new();
        one.absorb(&data);

        let mut split = Sponge::new();
        split.absorb(&data[..7]).absorb(&data[7..300]).absorb(&data[300..]);

        let a = one.finalize(DomainSuffix::Shake).squeeze_vec(64);
        let b = split.finalize(DomainSuffix::Shake).squeeze_vec(64);
        assert_eq!(a, b);
    }

    #[test]
    fn test_cursor_wraps_at_rate() {
        let mut sponge = Sponge::new();
        sponge.absorb(&[0xaa; RATE - 1]);
        assert_eq!(sponge.position(), RATE - 1);
        sponge.absorb(&[0xaa]);
        assert_eq!(sponge.position(), 0);
        sponge.absorb(&[0xaa; 3]);
        assert_eq!(sponge.position(), 3);
    }

    #[test]
    fn test_squeeze_continues_stream() {
        let mut sponge = Sponge::new();
        sponge.absorb(b"stream");
        let mut whole = sponge.clone().finalize(DomainSuffix::Shake);
        let expected = whole.squeeze_vec(400);

        let mut pieces = sponge.finalize(DomainSuffix::Shake);
        let mut got = pieces.squeeze_vec(1);
        got.extend(pieces.squeeze_vec(135));
        got.extend(pieces.squeeze_vec(137));
        got.extend(pieces.squeeze_vec(127));
        assert_eq!(got, expected);
    }

    #[test]
    fn test_suffix_separates_domains() {
        let shake = Sponge::new().finalize(DomainSuffix::Shake).squeeze_vec(32);
        let cshake = Sponge::new().finalize(DomainSuffix::CShake).squeeze_vec(32);
        let sha3 = Sponge::new().finalize(DomainSuffix::Sha3).squeeze_vec(32);
        assert_ne!(shake, cshake);
        assert_ne!(shake, sha3);
        assert_ne!(cshake, sha3);
    }
}
