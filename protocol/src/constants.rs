//! Sizes and customization labels shared by every protocol operation.

/// Output length of every digest, tag and derived key, in bits.
pub const DIGEST_BITS: usize = 512;

/// Output length of every digest, tag and derived key, in bytes.
pub const DIGEST_SIZE: usize = DIGEST_BITS / 8;

/// Bits squeezed when deriving an encryption key and an authentication key
/// together; the first half keys the stream, the second half keys the tag.
pub const KEY_MATERIAL_BITS: usize = 2 * DIGEST_BITS;

/// Length of the random nonce prefixed to a symmetric cryptogram.
pub const NONCE_SIZE: usize = 64;

/// Length of an authentication tag.
pub const TAG_SIZE: usize = DIGEST_SIZE;

// Customization strings, one per purpose.
pub(crate) const LABEL_KEYGEN: &[u8] = b"K";
pub(crate) const LABEL_SYM_KEYS: &[u8] = b"S";
pub(crate) const LABEL_SYM_ENC: &[u8] = b"SKE";
pub(crate) const LABEL_SYM_AUTH: &[u8] = b"SKA";
pub(crate) const LABEL_PK_KEYS: &[u8] = b"P";
pub(crate) const LABEL_PK_ENC: &[u8] = b"PKE";
pub(crate) const LABEL_PK_AUTH: &[u8] = b"PKA";
pub(crate) const LABEL_NONCE: &[u8] = b"N";
pub(crate) const LABEL_TAG: &[u8] = b"T";
pub(crate) const LABEL_DIGEST: &[u8] = b"D";
