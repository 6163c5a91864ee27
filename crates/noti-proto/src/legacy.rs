//! First-generation key-pair document and format detection.
//!
//! Early Noti builds exported key pairs as bare base64 of the raw 32-byte
//! keys under a `"type"` tag, with no per-key format information. Documents
//! in that shape are still accepted on import and migrated to the canonical
//! format; nothing writes them anymore.

use serde::{Deserialize, Serialize};

use crate::{
    error::ValidationError,
    keys::{ALGORITHM_X25519, ExportedKeyPair},
};

/// First-generation exported key pair: raw key bytes, base64, no format
/// tags.
///
/// Serialization support exists for test fixtures; the export path only
/// ever produces [`ExportedKeyPair`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyKeyPair {
    /// Key-agreement scheme tag, always `"X25519"`
    #[serde(rename = "type")]
    pub algorithm: String,
    /// Base64 of the raw 32-byte public key
    pub public_key: String,
    /// Base64 of the raw 32-byte private key
    pub private_key: String,
}

impl LegacyKeyPair {
    /// Check the `type` tag without touching key material.
    ///
    /// # Errors
    ///
    /// - `UnsupportedAlgorithm` if `type` is not `"X25519"`
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.algorithm != ALGORITHM_X25519 {
            return Err(ValidationError::UnsupportedAlgorithm {
                expected: ALGORITHM_X25519.to_string(),
                actual: self.algorithm.clone(),
            });
        }
        Ok(())
    }
}

/// A key-pair document in either accepted wire shape.
///
/// Detection keys on the tag field: canonical documents carry
/// `"algorithm"`, legacy documents carry `"type"`. A document with both is
/// treated as canonical; a document with neither is rejected outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPairDocument {
    /// Canonical SPKI/PKCS#8 document
    Current(ExportedKeyPair),
    /// First-generation raw-key document
    Legacy(LegacyKeyPair),
}

impl KeyPairDocument {
    /// Detect the format of a JSON document, parse and validate it.
    ///
    /// Both shapes are validated structurally; the returned document still
    /// has to go through key import to become usable handles.
    ///
    /// # Errors
    ///
    /// - `Malformed` if the text is not a JSON object, does not match the
    ///   detected shape, or carries neither tag field
    /// - tag errors as in [`ExportedKeyPair::validate`] and
    ///   [`LegacyKeyPair::validate`]
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(ValidationError::Malformed {
                reason: "document must be a JSON object".to_string(),
            });
        }

        if value.get("algorithm").is_some() {
            let document: ExportedKeyPair = serde_json::from_value(value)?;
            document.validate()?;
            return Ok(Self::Current(document));
        }

        if value.get("type").is_some() {
            let document: LegacyKeyPair = serde_json::from_value(value)?;
            document.validate()?;
            return Ok(Self::Legacy(document));
        }

        Err(ValidationError::Malformed {
            reason: "document carries neither an \"algorithm\" nor a \"type\" tag".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::ExportedKey;

    #[test]
    fn detects_canonical_document() {
        let json = r#"{
            "algorithm": "X25519",
            "publicKey": { "format": "spki", "value": "cHVi" },
            "privateKey": { "format": "pkcs8", "value": "cHJpdg==" }
        }"#;

        let document = KeyPairDocument::from_json(json).unwrap();
        assert!(matches!(document, KeyPairDocument::Current(_)));
    }

    #[test]
    fn detects_legacy_document() {
        let json = r#"{
            "type": "X25519",
            "publicKey": "cHVi",
            "privateKey": "cHJpdg=="
        }"#;

        let document = KeyPairDocument::from_json(json).unwrap();
        let KeyPairDocument::Legacy(legacy) = document else {
            unreachable!("expected legacy detection");
        };
        assert_eq!(legacy.algorithm, "X25519");
        assert_eq!(legacy.public_key, "cHVi");
        assert_eq!(legacy.private_key, "cHJpdg==");
    }

    #[test]
    fn untagged_document_is_rejected() {
        let json = r#"{ "publicKey": "cHVi", "privateKey": "cHJpdg==" }"#;

        let result = KeyPairDocument::from_json(json);
        assert!(matches!(result, Err(ValidationError::Malformed { .. })));
    }

    #[test]
    fn non_object_document_is_rejected() {
        let result = KeyPairDocument::from_json("[1, 2, 3]");
        assert!(matches!(result, Err(ValidationError::Malformed { .. })));

        let result = KeyPairDocument::from_json("\"X25519\"");
        assert!(matches!(result, Err(ValidationError::Malformed { .. })));
    }

    #[test]
    fn legacy_with_wrong_type_tag_is_rejected() {
        let json = r#"{
            "type": "Ed25519",
            "publicKey": "cHVi",
            "privateKey": "cHJpdg=="
        }"#;

        let result = KeyPairDocument::from_json(json);
        assert!(matches!(
            result,
            Err(ValidationError::UnsupportedAlgorithm { actual, .. }) if actual == "Ed25519"
        ));
    }

    #[test]
    fn legacy_serializes_under_type_key() {
        let legacy = LegacyKeyPair {
            algorithm: "X25519".to_string(),
            public_key: "cHVi".to_string(),
            private_key: "cHJpdg==".to_string(),
        };

        let json = serde_json::to_string(&legacy).unwrap();
        assert!(json.contains("\"type\":\"X25519\""));
        assert!(json.contains("\"publicKey\":\"cHVi\""));
    }

    #[test]
    fn document_with_both_tags_is_canonical() {
        let json = r#"{
            "algorithm": "X25519",
            "type": "X25519",
            "publicKey": { "format": "spki", "value": "cHVi" },
            "privateKey": { "format": "pkcs8", "value": "cHJpdg==" }
        }"#;

        let document = KeyPairDocument::from_json(json).unwrap();
        assert!(matches!(document, KeyPairDocument::Current(_)));
    }

    #[test]
    fn detection_round_trips_canonical() {
        let canonical = ExportedKeyPair {
            algorithm: "X25519".to_string(),
            public_key: ExportedKey { format: "spki".to_string(), value: "cHVi".to_string() },
            private_key: ExportedKey {
                format: "pkcs8".to_string(),
                value: "cHJpdg==".to_string(),
            },
        };

        let document = KeyPairDocument::from_json(&canonical.to_json()).unwrap();
        assert_eq!(document, KeyPairDocument::Current(canonical));
    }
}
