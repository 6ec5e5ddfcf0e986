//! Authenticated encryption under a passphrase.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroize;

use crate::constants::{LABEL_SYM_AUTH, LABEL_SYM_ENC, LABEL_SYM_KEYS, NONCE_SIZE};
use crate::errors::ProtocolError;
use crate::kdf::{auth_tag, keystream_xor, tags_match, SplitKeys};

/// A password-encrypted message `(z, c, t)`.
///
/// - `z`: random nonce
/// - `c`: `m` XOR `KMACXOF256(ke, "", |m|, "SKE")`
/// - `t`: `KMACXOF256(ka, m, 512, "SKA")`
///
/// where `(ke || ka) = KMACXOF256(z || pw, "", 1024, "S")`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymmetricCryptogram {
    pub z: Vec<u8>,
    pub c: Vec<u8>,
    pub t: Vec<u8>,
}

impl SymmetricCryptogram {
    /// Encrypts `message` under `password` with a fresh 64-byte nonce.
    ///
    /// # Example
    ///
    /// ```
    /// use protocol::SymmetricCryptogram;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let cryptogram = SymmetricCryptogram::encrypt(&mut rng, b"hello", b"pw");
    /// assert_eq!(cryptogram.decrypt(b"pw").unwrap(), b"hello");
    /// assert!(cryptogram.decrypt(b"not pw").is_err());
    /// ```
    pub fn encrypt<R: Rng + ?Sized>(rng: &mut R, message: &[u8], password: &[u8]) -> Self {
        let mut z = vec![0u8; NONCE_SIZE];
        rng.fill_bytes(&mut z);
        Self::encrypt_with_nonce(z, message, password)
    }

    /// Encrypts with a caller-chosen nonce. Reusing a nonce under the same
    /// password reuses the keystream.
    pub fn encrypt_with_nonce(z: Vec<u8>, message: &[u8], password: &[u8]) -> Self {
        let keys = SplitKeys::for_password(&z, password, LABEL_SYM_KEYS);
        let c = keystream_xor(keys.ke(), message, LABEL_SYM_ENC);
        let t = auth_tag(keys.ka(), message, LABEL_SYM_AUTH);

        debug!(message_len = message.len(), "encrypted under password");
        Self { z, c, t }
    }

    /// Recovers the message, or fails with
    /// [`ProtocolError::AuthenticationFailure`] when the tag does not match.
    pub fn decrypt(&self, password: &[u8]) -> Result<Vec<u8>, ProtocolError> {
        let keys = SplitKeys::for_password(&self.z, password, LABEL_SYM_KEYS);
        let mut message = keystream_xor(keys.ke(), &self.c, LABEL_SYM_ENC);
        let expected = auth_tag(keys.ka(), &message, LABEL_SYM_AUTH);

        if !tags_match(&expected, &self.t) {
            message.zeroize();
            debug!("password cryptogram failed authentication");
            return Err(ProtocolError::AuthenticationFailure);
        }
        Ok(message)
    }
}
