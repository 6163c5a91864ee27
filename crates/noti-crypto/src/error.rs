//! Error types for the encryption core.
//!
//! Every fallible operation returns one of these; nothing in this crate
//! panics on malformed or adversarial input. Engine-level causes are caught
//! at their call site and re-wrapped with context, never allowed to
//! propagate as an uncontrolled fault. Nothing here is fatal — every
//! failure is recoverable by the caller (retry, abort the handshake,
//! discard the message, surface to the user).

use std::fmt;

use noti_proto::ValidationError;
use thiserror::Error;

/// Which half of a key pair an operation was working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    /// The PKCS#8-encoded private half
    Private,
    /// The SPKI-encoded public half
    Public,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Private => f.write_str("private"),
            Self::Public => f.write_str("public"),
        }
    }
}

/// Errors from key-pair lifecycle operations
#[derive(Debug, Error)]
pub enum KeyPairError {
    /// The entropy source refused to produce key material
    #[error("key generation failed: {reason}")]
    Generation {
        /// Engine's description of the failure
        reason: String,
    },

    /// A key handle could not be serialized to its wire format
    #[error("failed to export {role} key: {reason}")]
    Export {
        /// Which half failed to export
        role: KeyRole,
        /// Engine's description of the failure
        reason: String,
    },

    /// Key material could not be decoded into a usable handle
    #[error("failed to import {role} key: {reason}")]
    Import {
        /// Which half failed to import
        role: KeyRole,
        /// What made the material unusable
        reason: String,
    },

    /// The document failed structural validation, before any engine call
    #[error("key-pair document rejected: {0}")]
    Validation(#[from] ValidationError),
}

impl KeyPairError {
    /// Which key half the failure concerns, for operations that work on
    /// one half at a time.
    pub fn role(&self) -> Option<KeyRole> {
        match self {
            Self::Export { role, .. } | Self::Import { role, .. } => Some(*role),
            Self::Generation { .. } | Self::Validation(_) => None,
        }
    }
}

/// A shared key could not be derived from the given handles
#[derive(Debug, Error)]
#[error("key agreement failed: {reason}")]
pub struct KeyAgreementError {
    /// Why the exchange was rejected
    pub(crate) reason: String,
}

/// The engine refused an encryption operation.
///
/// Rare by construction: the nonce is always fresh, so this is a resource
/// or misuse failure, not a cryptographic one.
#[derive(Debug, Error)]
#[error("encryption failed: {reason}")]
pub struct EncryptionError {
    /// Engine's description of the failure
    pub(crate) reason: String,
}

/// A message could not be decrypted.
///
/// Deliberately carries no detail: wrong key, tampered ciphertext, iv
/// mismatch, malformed base64 and non-text plaintext all collapse into
/// this one value so that decryption outcomes cannot serve as an oracle.
/// Treat the message as unusable; do not attempt to infer a cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("message could not be decrypted")]
pub struct DecryptionError;

/// Text payload could not be decoded as base64
#[derive(Debug, Error)]
#[error("base64 decoding failed: {source}")]
pub struct CodecError {
    /// Decoder's description of the malformed input
    #[from]
    source: base64::DecodeError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_and_import_errors_carry_their_role() {
        let err = KeyPairError::Export { role: KeyRole::Private, reason: "x".to_string() };
        assert_eq!(err.role(), Some(KeyRole::Private));

        let err = KeyPairError::Import { role: KeyRole::Public, reason: "x".to_string() };
        assert_eq!(err.role(), Some(KeyRole::Public));
    }

    #[test]
    fn generation_errors_have_no_role() {
        let err = KeyPairError::Generation { reason: "entropy exhausted".to_string() };
        assert_eq!(err.role(), None);
    }

    #[test]
    fn import_error_display() {
        let err = KeyPairError::Import {
            role: KeyRole::Public,
            reason: "expected 32 key bytes, got 16".to_string(),
        };
        assert_eq!(err.to_string(), "failed to import public key: expected 32 key bytes, got 16");
    }

    #[test]
    fn validation_errors_convert() {
        let validation = ValidationError::UnsupportedAlgorithm {
            expected: "X25519".to_string(),
            actual: "P-256".to_string(),
        };

        let err = KeyPairError::from(validation);
        assert!(matches!(err, KeyPairError::Validation(_)));
        assert_eq!(err.role(), None);
    }

    #[test]
    fn decryption_error_reveals_nothing() {
        // One message for every failure mode; callers cannot branch on a cause
        assert_eq!(DecryptionError.to_string(), "message could not be decrypted");
    }
}
