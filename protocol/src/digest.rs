//! Plain hashing and password MACs.

use keccak::kmacxof256;

use crate::constants::{DIGEST_BITS, LABEL_DIGEST, LABEL_TAG};

/// `KMACXOF256("", m, 512, "D")`.
pub fn hash(message: &[u8]) -> Vec<u8> {
    kmacxof256(b"", message, DIGEST_BITS, LABEL_DIGEST)
}

/// `KMACXOF256(pw, m, 512, "T")`.
pub fn mac(password: &[u8], message: &[u8]) -> Vec<u8> {
    kmacxof256(password, message, DIGEST_BITS, LABEL_TAG)
}
