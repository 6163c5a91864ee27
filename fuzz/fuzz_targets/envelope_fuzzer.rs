//! Fuzz target for message envelope decryption
//!
//! Runs adversarial envelopes against a fixed cipher, interleaved with
//! honest and corrupted traffic.
//!
//! # Strategy
//!
//! - Forged ciphertext/IV strings straight off the wire
//! - Arbitrary bytes laundered through the base64 encoder
//! - Legitimate envelopes corrupted at one position
//! - Legitimate envelopes passed through untouched
//!
//! # Invariants
//!
//! - Decryption never panics, whatever the envelope
//! - Untouched envelopes round-trip to the original message
//! - Corrupted envelopes fail decryption

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use noti_crypto::{KeyPair, MessageCipher, codec, derive_shared_key};
use noti_proto::{EncryptedMessage, KeyPairDocument, LegacyKeyPair};

#[derive(Debug, Arbitrary)]
enum EnvelopeScenario {
    /// Raw adversarial fields straight off the wire
    Forged { ciphertext: String, iv: String },
    /// Arbitrary bytes passed through the base64 encoder first
    EncodedGarbage { ciphertext: Vec<u8>, iv: Vec<u8> },
    /// Legitimate envelope corrupted at one position
    Corrupted { message: String, position: usize, mask: u8 },
    /// Legitimate envelope decrypted untouched
    Honest { message: String },
}

/// Deterministic cipher so crashing inputs reproduce byte-for-byte.
fn fixed_cipher() -> MessageCipher {
    let mut point = [0u8; 32];
    point[0] = 9; // curve basepoint, not low-order

    let document = LegacyKeyPair {
        algorithm: "X25519".to_string(),
        public_key: codec::encode(&point),
        private_key: codec::encode(&[0x11; 32]),
    };
    let pair = KeyPair::import_document(&KeyPairDocument::Legacy(document))
        .expect("fixed key material imports");
    let key =
        derive_shared_key(pair.private_key(), pair.public_key()).expect("basepoint contributes");

    MessageCipher::new(key)
}

fuzz_target!(|scenario: EnvelopeScenario| {
    let cipher = fixed_cipher();

    match scenario {
        EnvelopeScenario::Forged { ciphertext, iv } => {
            // INVARIANT 1: never panics
            let _ = cipher.decrypt(&EncryptedMessage { ciphertext, iv });
        },

        EnvelopeScenario::EncodedGarbage { ciphertext, iv } => {
            let envelope = EncryptedMessage {
                ciphertext: codec::encode(&ciphertext),
                iv: codec::encode(&iv),
            };
            let _ = cipher.decrypt(&envelope);
        },

        EnvelopeScenario::Corrupted { message, position, mask } => {
            let mut envelope = cipher.encrypt(&message).expect("encryption succeeds");

            let mut ciphertext = codec::decode(&envelope.ciphertext).expect("own envelope decodes");
            let position = position % ciphertext.len();
            ciphertext[position] ^= mask;
            envelope.ciphertext = codec::encode(&ciphertext);

            // INVARIANT 3: corrupted envelopes fail decryption
            if mask != 0 {
                assert!(cipher.decrypt(&envelope).is_err(), "corruption must be detected");
            }
        },

        EnvelopeScenario::Honest { message } => {
            let envelope = cipher.encrypt(&message).expect("encryption succeeds");

            // INVARIANT 2: honest envelopes round-trip
            let decrypted = cipher.decrypt(&envelope).expect("own envelope decrypts");
            assert_eq!(decrypted, message, "round trip must preserve the message");
        },
    }
});
