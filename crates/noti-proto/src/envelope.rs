//! Encrypted-message envelope.

use serde::{Deserialize, Serialize};

/// Number of raw bytes in a decoded `iv` (the AES-GCM nonce)
pub const IV_SIZE: usize = 12;

/// An encrypted message as it crosses storage or network boundaries.
///
/// Both fields are base64 text. The `iv` is generated fresh and
/// cryptographically random for every encryption; reuse under the same key
/// breaks AES-GCM's confidentiality and integrity guarantees.
///
/// No associated data is bound beyond ciphertext, iv and key: the envelope
/// does not identify sender, recipient or session, so it offers no
/// protection against replay or misrouting across connections. Callers that
/// need that binding must layer it themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedMessage {
    /// Base64 AES-GCM output, authentication tag included
    pub ciphertext: String,
    /// Base64 of the 12-byte nonce used for this one encryption
    pub iv: String,
}
