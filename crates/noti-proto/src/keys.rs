//! Canonical exported key-pair document.
//!
//! The only representation of key material that crosses a serialization
//! boundary. Private key bytes appear here exclusively in PKCS#8 DER form,
//! base64-encoded and paired with the format tag that determines their
//! decoding; a bare base64 string is not importable.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Algorithm tag carried by every key-pair document
pub const ALGORITHM_X25519: &str = "X25519";

/// Format tag for public keys (`SubjectPublicKeyInfo` DER)
pub const FORMAT_SPKI: &str = "spki";

/// Format tag for private keys (PKCS#8 `PrivateKeyInfo` DER)
pub const FORMAT_PKCS8: &str = "pkcs8";

/// A single exported key: format tag plus base64-encoded DER bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedKey {
    /// Encoding of `value`: `"spki"` for public keys, `"pkcs8"` for private
    pub format: String,
    /// Base64-encoded DER key material
    pub value: String,
}

/// Exported X25519 key pair as stored on disk or sent over the wire.
///
/// Field names and tag literals are the stable wire contract and must
/// round-trip byte-for-byte. Tags are plain strings so that malformed
/// documents are representable; [`validate`](Self::validate) is the required
/// gate before any import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedKeyPair {
    /// Key-agreement scheme, always `"X25519"`
    pub algorithm: String,
    /// Public half, SPKI format
    pub public_key: ExportedKey,
    /// Private half, PKCS#8 format
    pub private_key: ExportedKey,
}

impl ExportedKeyPair {
    /// Check tag literals without touching key material.
    ///
    /// Required precondition of import: malformed format tags must never
    /// reach the engine. Whether the `value` fields decode into actual keys
    /// is the importer's concern.
    ///
    /// # Errors
    ///
    /// - `UnsupportedAlgorithm` if `algorithm` is not `"X25519"`
    /// - `WrongFormat` if a key's format tag does not match its field
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.algorithm != ALGORITHM_X25519 {
            return Err(ValidationError::UnsupportedAlgorithm {
                expected: ALGORITHM_X25519.to_string(),
                actual: self.algorithm.clone(),
            });
        }

        if self.public_key.format != FORMAT_SPKI {
            return Err(ValidationError::WrongFormat {
                field: "publicKey",
                expected: FORMAT_SPKI.to_string(),
                actual: self.public_key.format.clone(),
            });
        }

        if self.private_key.format != FORMAT_PKCS8 {
            return Err(ValidationError::WrongFormat {
                field: "privateKey",
                expected: FORMAT_PKCS8.to_string(),
                actual: self.private_key.format.clone(),
            });
        }

        Ok(())
    }

    /// Parse a document from JSON text and validate its tags.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let document: Self = serde_json::from_str(json)?;
        document.validate()?;
        Ok(document)
    }

    /// Serialize to pretty-printed JSON, the on-disk shape.
    pub fn to_json(&self) -> String {
        let Ok(json) = serde_json::to_string_pretty(self) else {
            unreachable!("string-only document cannot fail JSON serialization");
        };
        json
    }
}
