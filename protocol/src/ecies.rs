//! Public-key encryption: an ephemeral Diffie-Hellman share on E521 keys the
//! same stream-and-tag construction the symmetric cryptogram uses.

use curve::{random_scalar, Point};
use num_bigint::BigUint;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::constants::{LABEL_PK_AUTH, LABEL_PK_ENC, LABEL_PK_KEYS};
use crate::errors::ProtocolError;
use crate::kdf::{auth_tag, integer_bytes, keystream_xor, tags_match, SplitKeys};
use crate::keys::{PublicKey, SecretKey};

/// A message encrypted to a public key, `(Z, c, t)`.
///
/// - `Z = k * G` for an ephemeral scalar `k`
/// - `c`: `m` XOR `KMACXOF256(ke, "", |m|, "PKE")`
/// - `t`: `KMACXOF256(ka, m, 512, "PKA")`
///
/// where `W = k * V` and `(ke || ka) = KMACXOF256(bytes(W.x), "", 1024, "P")`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AsymmetricCryptogram {
    pub z: Point,
    pub c: Vec<u8>,
    pub t: Vec<u8>,
}

fn shared_keys(w: &Point) -> SplitKeys {
    let w_bytes = Zeroizing::new(integer_bytes(w.x()));
    SplitKeys::derive(&w_bytes, LABEL_PK_KEYS)
}

impl PublicKey {
    /// Encrypts `message` to this key with a fresh ephemeral scalar
    /// `k = 4 * int(64 random bytes)`.
    ///
    /// # Example
    ///
    /// ```
    /// use protocol::KeyPair;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let pair = KeyPair::from_password(b"pw");
    /// let cryptogram = pair.public.encrypt(&mut rng, b"hello");
    /// assert_eq!(pair.secret.decrypt(&cryptogram).unwrap(), b"hello");
    /// ```
    pub fn encrypt<R: Rng + ?Sized>(&self, rng: &mut R, message: &[u8]) -> AsymmetricCryptogram {
        let k = random_scalar(rng);
        self.encrypt_with_scalar(&k, message)
    }

    /// Encrypts with a caller-chosen ephemeral scalar.
    pub fn encrypt_with_scalar(&self, k: &BigUint, message: &[u8]) -> AsymmetricCryptogram {
        let keys = shared_keys(&self.point().scale(k));
        let z = Point::generator().scale(k);
        let c = keystream_xor(keys.ke(), message, LABEL_PK_ENC);
        let t = auth_tag(keys.ka(), message, LABEL_PK_AUTH);

        debug!(message_len = message.len(), "encrypted to public key");
        AsymmetricCryptogram { z, c, t }
    }
}

impl SecretKey {
    /// Opens a cryptogram addressed to this key's public key.
    ///
    /// Computes `W = s * Z` and rederives the keys; fails with
    /// [`ProtocolError::AuthenticationFailure`] when the tag does not match.
    pub fn decrypt(&self, cryptogram: &AsymmetricCryptogram) -> Result<Vec<u8>, ProtocolError> {
        let keys = shared_keys(&cryptogram.z.scale(&self.scalar()));
        let mut message = keystream_xor(keys.ke(), &cryptogram.c, LABEL_PK_ENC);
        let expected = auth_tag(keys.ka(), &message, LABEL_PK_AUTH);

        if !tags_match(&expected, &cryptogram.t) {
            message.zeroize();
            debug!("public-key cryptogram failed authentication");
            return Err(ProtocolError::AuthenticationFailure);
        }
        Ok(message)
    }
}
