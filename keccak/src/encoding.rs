//! NIST SP 800-185 string encodings.
//!
//! Lengths are carried as `u64`, comfortably inside the `2^2040` bound the
//! standard places on encoded values.

/// Big-endian bytes of `x` with no leading zeros; zero encodes as a single `0x00`.
fn minimal_be_bytes(x: u64) -> Vec<u8> {
    let bytes = x.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count().min(7);
    bytes[skip..].to_vec()
}

/// `left_encode(x)`: length byte `n`, then the `n` big-endian bytes of `x`.
pub fn left_encode(x: u64) -> Vec<u8> {
    let digits = minimal_be_bytes(x);
    let mut out = Vec::with_capacity(digits.len() + 1);
    out.push(digits.len() as u8);
    out.extend_from_slice(&digits);
    out
}

/// `right_encode(x)`: the `n` big-endian bytes of `x`, then the length byte `n`.
pub fn right_encode(x: u64) -> Vec<u8> {
    let mut out = minimal_be_bytes(x);
    out.push(out.len() as u8);
    out
}

/// `encode_string(S) = left_encode(bitlen(S)) || S`.
pub fn encode_string(s: &[u8]) -> Vec<u8> {
    let mut out = left_encode((s.len() as u64) * 8);
    out.extend_from_slice(s);
    out
}

/// `bytepad(X, w)`: prefix `left_encode(w)` and zero-fill to a multiple of `w`.
///
/// # Panics
///
/// Panics if `w` is zero.
pub fn bytepad(x: &[u8], w: usize) -> Vec<u8> {
    assert!(w > 0, "bytepad width must be positive");

    let mut out = left_encode(w as u64);
    out.extend_from_slice(x);
    let padded = out.len().div_ceil(w) * w;
    out.resize(padded, 0);
    out
}
