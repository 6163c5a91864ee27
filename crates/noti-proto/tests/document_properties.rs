//! Property-based tests for wire documents
//!
//! These tests verify the serialization invariants of the wire contract:
//!
//! 1. **Round-trip**: parse(serialize(d)) == d for every valid document
//! 2. **Detection**: the two key-pair shapes are never confused
//! 3. **Validation**: tag checks depend only on the tag fields, never on
//!    the key material

use noti_proto::{
    EncryptedMessage, ExportedKey, ExportedKeyPair, KeyPairDocument, LegacyKeyPair,
};
use proptest::prelude::*;

fn canonical_document(public_value: String, private_value: String) -> ExportedKeyPair {
    ExportedKeyPair {
        algorithm: "X25519".to_string(),
        public_key: ExportedKey { format: "spki".to_string(), value: public_value },
        private_key: ExportedKey { format: "pkcs8".to_string(), value: private_value },
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_canonical_document_round_trips(
        public_value in ".*",
        private_value in ".*",
    ) {
        let document = canonical_document(public_value, private_value);

        let parsed = ExportedKeyPair::from_json(&document.to_json()).unwrap();
        prop_assert_eq!(parsed, document);
    }

    #[test]
    fn prop_detection_identifies_canonical(
        public_value in ".*",
        private_value in ".*",
    ) {
        let document = canonical_document(public_value, private_value);

        let detected = KeyPairDocument::from_json(&document.to_json()).unwrap();
        prop_assert_eq!(detected, KeyPairDocument::Current(document));
    }

    #[test]
    fn prop_detection_identifies_legacy(
        public_value in ".*",
        private_value in ".*",
    ) {
        let document = LegacyKeyPair {
            algorithm: "X25519".to_string(),
            public_key: public_value,
            private_key: private_value,
        };

        let json = serde_json::to_string(&document).unwrap();
        let detected = KeyPairDocument::from_json(&json).unwrap();
        prop_assert_eq!(detected, KeyPairDocument::Legacy(document));
    }

    #[test]
    fn prop_validation_rejects_foreign_algorithms(
        algorithm in "[A-Za-z0-9-]+",
        value in ".*",
    ) {
        prop_assume!(algorithm != "X25519");

        let mut document = canonical_document(value.clone(), value);
        document.algorithm = algorithm;

        prop_assert!(document.validate().is_err());
    }

    #[test]
    fn prop_envelope_round_trips(
        ciphertext in ".*",
        iv in ".*",
    ) {
        let envelope = EncryptedMessage { ciphertext, iv };

        let json = serde_json::to_string(&envelope).unwrap();
        let parsed: EncryptedMessage = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, envelope);
    }
}
