//! Shared-key derivation from X25519 key agreement.
//!
//! Both peers run the same derivation with their own private key and the
//! other side's public key and arrive at the same [`SharedKey`]. The raw
//! Diffie-Hellman output never leaves this module: it is stretched through
//! HKDF-SHA256 under a fixed usage label, so the key handed to the cipher
//! layer is already bound to its one purpose.

use std::fmt;

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::{
    error::KeyAgreementError,
    keypair::{PrivateKey, PublicKey},
};

/// Size of a derived shared key in bytes, sized for AES-GCM-256.
pub const SHARED_KEY_SIZE: usize = 32;

/// Domain-separation label for the messaging shared key
const SHARED_KEY_LABEL: &[u8] = b"noti-shared-key-v1";

/// Symmetric key derived from key agreement, usable only for message
/// encryption.
///
/// There is no export path: a shared key moves into a
/// [`MessageCipher`](crate::MessageCipher) or is dropped, and the bytes
/// are zeroized on drop.
pub struct SharedKey {
    key: [u8; SHARED_KEY_SIZE],
}

impl SharedKey {
    /// Key bytes, for cipher construction inside this crate.
    pub(crate) fn key(&self) -> &[u8; SHARED_KEY_SIZE] {
        &self.key
    }
}

impl fmt::Debug for SharedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedKey(redacted)")
    }
}

impl Drop for SharedKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

/// Derive the symmetric messaging key shared with a peer.
///
/// Symmetric in its inputs: `derive_shared_key(a, B)` and
/// `derive_shared_key(b, A)` produce the same key for key pairs `(a, A)`
/// and `(b, B)`.
///
/// # Errors
///
/// - [`KeyAgreementError`] if the peer public key is a low-order point,
///   which would force the shared secret to a value an attacker can
///   predict
pub fn derive_shared_key(
    own_private_key: &PrivateKey,
    peer_public_key: &PublicKey,
) -> Result<SharedKey, KeyAgreementError> {
    let shared_secret = own_private_key.secret().diffie_hellman(peer_public_key.key());
    if !shared_secret.was_contributory() {
        return Err(KeyAgreementError {
            reason: "peer public key is a low-order point".to_string(),
        });
    }

    let hkdf = Hkdf::<Sha256>::new(None, shared_secret.as_bytes());
    let mut key = [0u8; SHARED_KEY_SIZE];
    let Ok(()) = hkdf.expand(SHARED_KEY_LABEL, &mut key) else {
        unreachable!("32 bytes is a valid HKDF-SHA256 output length");
    };

    Ok(SharedKey { key })
}

#[cfg(test)]
mod tests {
    use super::*;

    use noti_proto::ExportedKey;

    use crate::{codec, keypair::KeyPair};

    #[test]
    fn derivation_is_symmetric() {
        let alice = KeyPair::generate().unwrap();
        let bob = KeyPair::generate().unwrap();

        let alice_key = derive_shared_key(alice.private_key(), bob.public_key()).unwrap();
        let bob_key = derive_shared_key(bob.private_key(), alice.public_key()).unwrap();

        assert_eq!(alice_key.key(), bob_key.key());
    }

    #[test]
    fn derivation_is_deterministic() {
        let alice = KeyPair::generate().unwrap();
        let bob = KeyPair::generate().unwrap();

        let first = derive_shared_key(alice.private_key(), bob.public_key()).unwrap();
        let second = derive_shared_key(alice.private_key(), bob.public_key()).unwrap();

        assert_eq!(first.key(), second.key());
    }

    #[test]
    fn different_peers_yield_different_keys() {
        let alice = KeyPair::generate().unwrap();
        let bob = KeyPair::generate().unwrap();
        let carol = KeyPair::generate().unwrap();

        let with_bob = derive_shared_key(alice.private_key(), bob.public_key()).unwrap();
        let with_carol = derive_shared_key(alice.private_key(), carol.public_key()).unwrap();

        assert_ne!(with_bob.key(), with_carol.key());
    }

    #[test]
    fn degenerate_peer_public_key_is_rejected() {
        let alice = KeyPair::generate().unwrap();

        // All-zero point smuggled in through the import path
        let mut spki = hex::decode("302a300506032b656e032100").unwrap();
        spki.extend_from_slice(&[0u8; 32]);
        let mut document = KeyPair::generate().unwrap().export().unwrap();
        document.public_key =
            ExportedKey { format: "spki".to_string(), value: codec::encode(&spki) };

        let peer = KeyPair::import(&document).unwrap();
        let result = derive_shared_key(alice.private_key(), peer.public_key());

        assert!(matches!(result, Err(KeyAgreementError { .. })));
    }

    #[test]
    fn debug_output_redacts_key_material() {
        let alice = KeyPair::generate().unwrap();
        let bob = KeyPair::generate().unwrap();
        let key = derive_shared_key(alice.private_key(), bob.public_key()).unwrap();

        assert_eq!(format!("{key:?}"), "SharedKey(redacted)");
    }
}
