//! Signature type and the hashes behind signing and verification.

use curve::{clear_cofactor, Point};
use keccak::kmacxof256;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::constants::{DIGEST_BITS, LABEL_NONCE, LABEL_TAG};
use crate::kdf::{derive_integer, integer_bytes};

/// A Schnorr signature over E521.
///
/// A signature consists of:
/// - `h`: the 64-byte challenge `KMACXOF256(bytes(U.x), m, 512, "T")`
/// - `z`: the response `(k - int(h) * s) mod r`
///
/// # Example
///
/// ```
/// use protocol::SecretKey;
///
/// let secret_key = SecretKey::from_password(b"correct horse");
/// let signature = secret_key.sign(b"hello");
/// assert_eq!(signature.h.len(), 64);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    pub h: Vec<u8>,
    pub z: BigUint,
}

/// Per-message nonce `k = 4 * int(KMACXOF256(bytes(s), m, 512, "N"))`.
pub(crate) fn derive_nonce(s_bytes: &[u8], message: &[u8]) -> BigUint {
    clear_cofactor(derive_integer(&kmacxof256(
        s_bytes,
        message,
        DIGEST_BITS,
        LABEL_NONCE,
    )))
}

/// Challenge `h = KMACXOF256(bytes(U.x), m, 512, "T")`.
pub(crate) fn hash_challenge(u: &Point, message: &[u8]) -> Vec<u8> {
    kmacxof256(&integer_bytes(u.x()), message, DIGEST_BITS, LABEL_TAG)
}
