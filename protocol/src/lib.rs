//! Password-based and public-key cryptography over KMACXOF256 and E521.
//!
//! This library provides:
//! - Hashing and password MACs with KMACXOF256
//! - Authenticated symmetric encryption under a passphrase
//! - Key pairs derived deterministically from a passphrase
//! - Public-key encryption with an ephemeral Diffie-Hellman share
//! - Schnorr signatures with deterministic nonces
//!
//! Every digest, tag and derived key is 512 bits. Public keys, cryptograms
//! and signatures have a line-oriented text form through [`TextEncoding`].
//!
//! # Example
//!
//! ```
//! use protocol::{KeyPair, PublicKey, Signature, TextEncoding};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let pair = KeyPair::from_password(b"correct horse");
//!
//! // Encrypt to the public key and open with the private key
//! let cryptogram = pair.public.encrypt(&mut rng, b"attack at dawn");
//! let message = pair.secret.decrypt(&cryptogram).expect("decryption failed");
//! assert_eq!(message, b"attack at dawn");
//!
//! // Sign, persist, reload and verify
//! let signature = pair.secret.sign(b"attack at dawn");
//! let public = PublicKey::from_text(&pair.public.to_text()).expect("bad key");
//! let signature = Signature::from_text(&signature.to_text()).expect("bad signature");
//! assert!(public.verify(b"attack at dawn", &signature));
//! ```
//!
//! # Security Considerations
//!
//! - Use a cryptographically secure random number generator for nonces and
//!   ephemeral scalars
//! - A private key is only as strong as the passphrase it is derived from
//! - Tags are compared in constant time, but curve arithmetic is not

mod constants;
mod digest;
mod ecies;
mod errors;
mod kdf;
mod keys;
mod signatures;
mod symmetric;
mod text;


pub use constants::{DIGEST_BITS, DIGEST_SIZE, KEY_MATERIAL_BITS, NONCE_SIZE, TAG_SIZE};
pub use digest::{hash, mac};
pub use ecies::AsymmetricCryptogram;
pub use errors::{FormatError, ProtocolError};
pub use keys::{KeyPair, PublicKey, SecretKey};
pub use signatures::Signature;
pub use symmetric::SymmetricCryptogram;
pub use text::TextEncoding;
