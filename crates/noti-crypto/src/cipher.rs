//! Authenticated message encryption with AES-GCM-256.
//!
//! A [`MessageCipher`] is built once from a derived shared key and reused
//! for any number of messages in both directions. Every encryption draws
//! a fresh random 12-byte IV, so identical plaintexts never produce
//! identical envelopes; the IV travels with the ciphertext and is never
//! reused with the same key.

use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, KeyInit},
};
use rand::{RngCore, rngs::OsRng};

use noti_proto::{EncryptedMessage, IV_SIZE};

use crate::{
    agreement::SharedKey,
    codec,
    error::{DecryptionError, EncryptionError},
};

/// Authenticated cipher bound to one shared key.
pub struct MessageCipher {
    cipher: Aes256Gcm,
}

impl MessageCipher {
    /// Bind a cipher to a derived shared key.
    ///
    /// Consumes the key: once a cipher exists, the key material lives
    /// only inside the AEAD engine.
    #[must_use]
    pub fn new(shared_key: SharedKey) -> Self {
        Self { cipher: Aes256Gcm::new(shared_key.key().into()) }
    }

    /// Encrypt a message under a fresh random IV.
    ///
    /// The returned envelope carries both the ciphertext and the IV it
    /// was produced under, base64-encoded for transport.
    ///
    /// # Errors
    ///
    /// - [`EncryptionError`] if the AEAD engine rejects the operation
    pub fn encrypt(&self, message: &str) -> Result<EncryptedMessage, EncryptionError> {
        let mut iv = [0u8; IV_SIZE];
        OsRng.fill_bytes(&mut iv);

        let ciphertext =
            self.cipher.encrypt(Nonce::from_slice(&iv), message.as_bytes()).map_err(|_| {
                EncryptionError { reason: "aead engine rejected the message".to_string() }
            })?;

        Ok(EncryptedMessage { ciphertext: codec::encode(&ciphertext), iv: codec::encode(&iv) })
    }

    /// Decrypt an envelope back into the original message.
    ///
    /// # Errors
    ///
    /// - [`DecryptionError`] for every failure. Undecodable fields, a
    ///   wrong-length IV, a wrong key, a forged or truncated ciphertext
    ///   and non-UTF-8 plaintext are deliberately indistinguishable, so
    ///   an attacker probing with crafted envelopes learns nothing from
    ///   the error
    pub fn decrypt(&self, envelope: &EncryptedMessage) -> Result<String, DecryptionError> {
        let ciphertext = codec::decode(&envelope.ciphertext).map_err(|_| DecryptionError)?;
        let iv = codec::decode(&envelope.iv).map_err(|_| DecryptionError)?;
        if iv.len() != IV_SIZE {
            return Err(DecryptionError);
        }

        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(&iv), ciphertext.as_slice())
            .map_err(|_| DecryptionError)?;
        String::from_utf8(plaintext).map_err(|_| DecryptionError)
    }
}
