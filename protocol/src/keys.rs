//! Password-derived key pairs, signing and verification.

use core::fmt;

use curve::{clear_cofactor, Group, Point, ScalarField};
use keccak::kmacxof256;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::Zeroizing;

use crate::constants::{DIGEST_BITS, LABEL_KEYGEN};
use crate::kdf::{derive_integer, integer_bytes, tags_match};
use crate::signatures::{derive_nonce, hash_challenge, Signature};

/// A private key on E521.
///
/// The scalar is `s = 4 * int(KMACXOF256(pw, "", 512, "K"))`, so the same
/// password always yields the same key. It is held as the bytes it is keyed
/// into KMAC with, wiped on drop and never serialized; re-derive it from the
/// password instead of persisting it.
///
/// # Example
///
/// ```
/// use protocol::SecretKey;
///
/// let secret_key = SecretKey::from_password(b"correct horse");
/// let public_key = secret_key.public_key();
/// ```
#[derive(Clone)]
pub struct SecretKey {
    s_bytes: Zeroizing<Vec<u8>>,
}

/// A public key `V = s * G` on E521.
///
/// # Example
///
/// ```
/// use protocol::{PublicKey, SecretKey};
///
/// let public_key = PublicKey::from(&SecretKey::from_password(b"correct horse"));
/// assert!(public_key.point().is_on_curve());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey {
    point: Point,
}

/// A private key together with its public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    pub secret: SecretKey,
    pub public: PublicKey,
}

impl SecretKey {
    /// Derives the private key for a passphrase.
    ///
    /// # Arguments
    ///
    /// * `password` - The passphrase bytes; any length, including empty
    pub fn from_password(password: &[u8]) -> Self {
        let digest = Zeroizing::new(kmacxof256(password, b"", DIGEST_BITS, LABEL_KEYGEN));
        Self::from_scalar(clear_cofactor(derive_integer(&digest)))
    }

    /// Wraps an already derived scalar.
    pub fn from_scalar(scalar: BigUint) -> Self {
        Self {
            s_bytes: Zeroizing::new(integer_bytes(&scalar)),
        }
    }

    /// The private scalar `s`. The returned copy is not wiped.
    pub fn scalar(&self) -> BigUint {
        derive_integer(&self.s_bytes)
    }

    /// Computes `V = s * G`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            point: Point::generator().scale(&self.scalar()),
        }
    }

    /// Signs a message.
    ///
    /// Signing is deterministic: the nonce is derived from the key and the
    /// message, so signing the same message twice gives the same signature.
    /// 1. `k = 4 * int(KMACXOF256(bytes(s), m, 512, "N"))`
    /// 2. `U = k * G`
    /// 3. `h = KMACXOF256(bytes(U.x), m, 512, "T")`
    /// 4. `z = (k - int(h) * s) mod r`
    ///
    /// # Arguments
    ///
    /// * `message` - The message to sign; any length, including empty
    ///
    /// # Returns
    ///
    /// The signature `(h, z)`.
    ///
    /// # Example
    ///
    /// ```
    /// use protocol::SecretKey;
    ///
    /// let secret_key = SecretKey::from_password(b"correct horse");
    /// let signature = secret_key.sign(b"attack at dawn");
    /// assert!(secret_key.public_key().verify(b"attack at dawn", &signature));
    /// ```
    pub fn sign(&self, message: &[u8]) -> Signature {
        let k = derive_nonce(&self.s_bytes, message);
        let u = Point::generator().scale(&k);
        let h = hash_challenge(&u, message);

        let z = ScalarField::from_biguint(k)
            - ScalarField::from_biguint(derive_integer(&h))
                * ScalarField::from_biguint(self.scalar());

        debug!(message_len = message.len(), "signed message");
        Signature { h, z: z.into() }
    }
}

impl PublicKey {
    /// Wraps a curve point as a public key.
    pub fn from_point(point: Point) -> Self {
        Self { point }
    }

    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Verifies a signature on a message.
    ///
    /// Recomputes `U = z * G + int(h) * V` and accepts exactly when
    /// `KMACXOF256(bytes(U.x), m, 512, "T")` equals `h`.
    ///
    /// # Arguments
    ///
    /// * `message` - The message that was signed
    /// * `signature` - The signature to check
    ///
    /// # Returns
    ///
    /// `true` if the signature is valid for this key and message.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        let u = Point::multi_scalar_mul(
            &[Point::generator(), self.point.clone()],
            &[signature.z.clone(), derive_integer(&signature.h)],
        );
        let accepted = tags_match(&hash_challenge(&u, message), &signature.h);

        debug!(message_len = message.len(), accepted, "verified signature");
        accepted
    }
}

impl KeyPair {
    /// Derives both keys from a passphrase.
    pub fn from_password(password: &[u8]) -> Self {
        let secret = SecretKey::from_password(password);
        let public = secret.public_key();
        Self { secret, public }
    }
}

impl From<&SecretKey> for PublicKey {
    /// Equivalent to `secret_key.public_key()`.
    fn from(sk: &SecretKey) -> Self {
        sk.public_key()
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.s_bytes.as_slice().ct_eq(other.s_bytes.as_slice()).into()
    }
}

impl Eq for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}
