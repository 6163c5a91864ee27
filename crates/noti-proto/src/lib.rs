//! Noti Wire Formats
//!
//! Serialized representations that cross storage or network boundaries:
//! exported key-pair documents and encrypted-message envelopes. Everything in
//! this crate is plain data with structural validation. No key handles, no
//! cryptography; the companion `noti-crypto` crate turns these documents into
//! usable keys.
//!
//! # Formats
//!
//! ```text
//! ExportedKeyPair (canonical, schema-validated)
//!   { "algorithm": "X25519",
//!     "publicKey":  { "format": "spki",  "value": <base64 DER> },
//!     "privateKey": { "format": "pkcs8", "value": <base64 DER> } }
//!
//! LegacyKeyPair (first generation, accepted on import only)
//!   { "type": "X25519",
//!     "publicKey":  <base64 raw 32 bytes>,
//!     "privateKey": <base64 raw 32 bytes> }
//!
//! EncryptedMessage
//!   { "ciphertext": <base64>, "iv": <base64, 12 bytes decoded> }
//! ```
//!
//! Field names and tag literals are the stable wire contract and round-trip
//! byte-for-byte. Validation here is structural only: field presence and tag
//! correctness. Whether a `value` actually decodes into key material is
//! decided by the importer.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod envelope;
pub mod error;
pub mod keys;
pub mod legacy;

pub use envelope::{EncryptedMessage, IV_SIZE};
pub use error::ValidationError;
pub use keys::{ALGORITHM_X25519, ExportedKey, ExportedKeyPair, FORMAT_PKCS8, FORMAT_SPKI};
pub use legacy::{KeyPairDocument, LegacyKeyPair};
