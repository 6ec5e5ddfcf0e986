//! Keccak sponge, SP 800-185 encodings, cSHAKE256 and KMACXOF256.
//!
//! Everything here runs over a single fixed configuration: Keccak-f[1600] with a
//! 136-byte rate (capacity 512 bits), the SHAKE256 / SHA3-256 parameter set.
//! Every hash or MAC owns its own [`Sponge`]; nothing is shared between calls.

mod cshake;
mod encoding;
mod keccakf;
mod kmac;
mod sponge;

pub use cshake::{cshake256, sha3_256, shake256, CShake256};
pub use encoding::{bytepad, encode_string, left_encode, right_encode};
pub use keccakf::{keccak_f1600, permute};
pub use kmac::{kmacxof256, KmacXof256};
pub use sponge::{DomainSuffix, Sponge, XofReader};

/// Width of the Keccak state in bytes.
pub const STATE_BYTES: usize = 200;

/// Digest parameter in bytes; the capacity is twice this.
pub const DIGEST_BYTES: usize = 32;

/// Bytes absorbed or squeezed per permutation call.
pub const RATE: usize = STATE_BYTES - 2 * DIGEST_BYTES;
