//! KMACXOF256 (NIST SP 800-185, section 4.3.1).

use crate::cshake::{output_bytes, CShake256};
use crate::encoding::{bytepad, encode_string, right_encode};
use crate::sponge::XofReader;
use crate::RATE;

const FUNCTION_NAME: &[u8] = b"KMAC";

/// Streaming KMACXOF256.
///
/// Absorbs `bytepad(encode_string(K), 136)` up front, the message through
/// [`update`](Self::update), and the `right_encode(0)` marker that selects the
/// XOF variant when finalized.
#[derive(Clone)]
pub struct KmacXof256 {
    inner: CShake256,
}

impl KmacXof256 {
    pub fn new(key: &[u8], s: &[u8]) -> Self {
        let mut inner = CShake256::new(FUNCTION_NAME, s);
        inner.update(&bytepad(&encode_string(key), RATE));
        KmacXof256 { inner }
    }

    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    pub fn finalize_xof(mut self) -> XofReader {
        self.inner.update(&right_encode(0));
        self.inner.finalize_xof()
    }
}

/// `KMACXOF256(K, X, L, S)`.
///
/// # Panics
///
/// Panics if `l_bits` is not a multiple of 8.
pub fn kmacxof256(key: &[u8], x: &[u8], l_bits: usize, s: &[u8]) -> Vec<u8> {
    let len = output_bytes(l_bits);
    let mut mac = KmacXof256::new(key, s);
    mac.update(x);
    mac.finalize_xof().squeeze_vec(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cshake::cshake256;

    #[test]
    fn test_matches_cshake_composition() {
        let key = b"key material";
        let x = b"the message";

        let mut new_x = bytepad(&encode_string(key), RATE);
        new_x.extend_from_slice(x);
        new_x.extend_from_slice(&right_encode(0));
        let expected = cshake256(&new_x, 512, b"KMAC", b"SKA");

        assert_eq!(kmacxof256(key, x, 512, b"SKA"), expected);
    }

    #[test]
    fn test_key_and_label_separate_outputs() {
        let base = kmacxof256(b"k1", b"m", 512, b"T");
        assert_ne!(base, kmacxof256(b"k2", b"m", 512, b"T"));
        assert_ne!(base, kmacxof256(b"k1", b"m", 512, b"D"));
        assert_ne!(base, kmacxof256(b"k1", b"n", 512, b"T"));
    }

    #[test]
    fn test_split_updates() {
        let mut mac = KmacXof256::new(b"pw", b"S");
        mac.update(b"nonce-").update(b"password");
        let streamed = mac.finalize_xof().squeeze_vec(128);
        assert_eq!(streamed, kmacxof256(b"pw", b"nonce-password", 1024, b"S"));
    }
}
