//! Fuzz target for key-pair document import
//!
//! Feeds adversarial JSON documents through format detection, validation
//! and DER decoding.
//!
//! # Strategy
//!
//! - Raw arbitrary text straight into the JSON entry point
//! - Canonical-shaped documents with adversarial field values
//! - Legacy-shaped documents with adversarial raw key material
//!
//! # Invariants
//!
//! - Import never panics, whatever the input
//! - A document that imports re-exports as a valid canonical document
//! - A document with a foreign algorithm tag never imports
//! - Legacy key material that is not exactly 32 bytes never imports

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use noti_crypto::{KeyPair, codec};
use noti_proto::{ExportedKey, ExportedKeyPair, LegacyKeyPair};

#[derive(Debug, Arbitrary)]
enum DocumentScenario {
    /// Arbitrary text, mostly not even JSON
    RawText(String),
    /// Canonical shape, adversarial values
    Tagged {
        algorithm: String,
        public_format: String,
        public_value: String,
        private_format: String,
        private_value: String,
    },
    /// Legacy shape, adversarial raw key material
    Legacy { algorithm: String, public_value: Vec<u8>, private_value: Vec<u8> },
}

fuzz_target!(|scenario: DocumentScenario| {
    match scenario {
        DocumentScenario::RawText(text) => {
            // INVARIANT 1: arbitrary input never panics
            if let Ok(pair) = KeyPair::import_json(&text) {
                // INVARIANT 2: whatever imports, re-exports canonically
                let reexported = pair.export().expect("imported pair must re-export");
                assert!(reexported.validate().is_ok(), "re-export must validate");
                KeyPair::import(&reexported).expect("re-exported document must import");
            }
        },

        DocumentScenario::Tagged {
            algorithm,
            public_format,
            public_value,
            private_format,
            private_value,
        } => {
            let foreign_algorithm = algorithm != "X25519";
            let document = ExportedKeyPair {
                algorithm,
                public_key: ExportedKey { format: public_format, value: public_value },
                private_key: ExportedKey { format: private_format, value: private_value },
            };

            let result = KeyPair::import(&document);

            // INVARIANT 3: foreign algorithms never import
            if foreign_algorithm {
                assert!(result.is_err(), "foreign algorithm must be rejected");
            }
        },

        DocumentScenario::Legacy { algorithm, public_value, private_value } => {
            let wrong_size = public_value.len() != 32 || private_value.len() != 32;
            let document = LegacyKeyPair {
                algorithm: algorithm.clone(),
                public_key: codec::encode(&public_value),
                private_key: codec::encode(&private_value),
            };
            let json = serde_json::to_string(&document).expect("legacy document serializes");

            let result = KeyPair::import_json(&json);

            // INVARIANT 4: off-size raw keys and foreign tags never import
            if wrong_size || algorithm != "X25519" {
                assert!(result.is_err(), "invalid legacy document must be rejected");
            } else {
                let pair = result.expect("well-formed legacy document must import");
                assert!(pair.export().expect("migrated pair exports").validate().is_ok());
            }
        },
    }
});
