//! Noti End-to-End Encryption Core
//!
//! Key lifecycle and message cipher for peer-to-peer encrypted messaging.
//! Two parties who can exchange public keys through an untrusted channel
//! derive a shared secret and use it to encrypt arbitrary text messages
//! with authenticated encryption. The backend relaying those messages never
//! sees usable key material.
//!
//! # Protocol Flow
//!
//! ```text
//!     Alice                                     Bob
//! KeyPair::generate                       KeyPair::generate
//!        │                                       │
//!        ▼ export / import                       ▼
//! ExportedKeyPair  ◄── untrusted channel ──► ExportedKeyPair
//!        │                                       │
//!        ▼                                       ▼
//! derive_shared_key(A.priv, B.pub) == derive_shared_key(B.priv, A.pub)
//!        │                                       │
//!        ▼                                       ▼
//! MessageCipher ── EncryptedMessage {ciphertext, iv} ── MessageCipher
//! ```
//!
//! # Security
//!
//! - Private key bytes exist outside their handle only on the explicit,
//!   validated PKCS#8 export path; handles redact their `Debug` output and
//!   zeroize on drop
//! - Shared keys are non-exportable: no serialization, no byte accessor
//!   outside this crate
//! - Every encryption draws a fresh random 96-bit nonce; no counters, no
//!   cross-call state, so a cipher instance is safe to share across tasks
//! - Decryption failures are deliberately undifferentiated, so outcomes
//!   cannot serve as an oracle for what went wrong
//! - Malformed and adversarial inputs surface as typed errors, never panics
//!
//! All operations are synchronous in-process computations; callers that
//! need to offload them wrap the calls in their own executor. The
//! serialized forms (key-pair documents, message envelopes) live in
//! `noti-proto`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod agreement;
pub mod cipher;
pub mod codec;
pub mod error;
pub mod keypair;

pub use agreement::{SHARED_KEY_SIZE, SharedKey, derive_shared_key};
pub use cipher::MessageCipher;
pub use error::{
    CodecError, DecryptionError, EncryptionError, KeyAgreementError, KeyPairError, KeyRole,
};
pub use keypair::{KeyPair, PrivateKey, PublicKey};
