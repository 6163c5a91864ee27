//! X25519 key-pair lifecycle: generation, export, validated import.
//!
//! Key handles are opaque capability types: a [`PrivateKey`] can derive
//! shared keys and nothing else, a [`PublicKey`] can only be combined by a
//! peer. Raw key bytes exist outside the handles exclusively on the export
//! path, wrapped in the RFC 8410 DER encodings (`SubjectPublicKeyInfo` for
//! public keys, PKCS#8 `PrivateKeyInfo` for private keys) that the wire
//! format's tags declare.

use std::fmt;

use pkcs8::{
    AlgorithmIdentifierRef, ObjectIdentifier, PrivateKeyInfo, SubjectPublicKeyInfoRef,
    der::{
        self, Decode, Encode,
        asn1::{BitStringRef, OctetStringRef},
    },
};
use rand::{RngCore, rngs::OsRng};
use x25519_dalek::{PublicKey as X25519Public, StaticSecret};
use zeroize::Zeroize;

use noti_proto::{
    ALGORITHM_X25519, ExportedKey, ExportedKeyPair, FORMAT_PKCS8, FORMAT_SPKI, KeyPairDocument,
    LegacyKeyPair,
};

use crate::{
    codec,
    error::{KeyPairError, KeyRole},
};

/// Size of raw X25519 key material in bytes
const RAW_KEY_SIZE: usize = 32;

/// RFC 8410 algorithm identifier for X25519 (id-X25519)
const ALGORITHM_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.110");

/// Algorithm identifier with absent parameters, as RFC 8410 requires
const ALGORITHM_IDENTIFIER: AlgorithmIdentifierRef<'static> =
    AlgorithmIdentifierRef { oid: ALGORITHM_OID, parameters: None };

/// Private half of an X25519 key pair.
///
/// Capable of deriving shared keys and nothing else. The scalar never
/// leaves the handle except through the explicit PKCS#8 export path;
/// `Debug` output is redacted and the underlying secret is zeroized on
/// drop.
pub struct PrivateKey {
    secret: StaticSecret,
}

impl PrivateKey {
    /// Underlying scalar, for key agreement inside this crate.
    pub(crate) fn secret(&self) -> &StaticSecret {
        &self.secret
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(redacted)")
    }
}

/// Public half of an X25519 key pair.
///
/// Capable of being combined with a peer's private key during agreement;
/// carries no secret material.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    key: X25519Public,
}

impl PublicKey {
    /// Underlying curve point, for key agreement inside this crate.
    pub(crate) fn key(&self) -> &X25519Public {
        &self.key
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Not secret, but full dumps add noise to logs
        let encoded = codec::encode(self.key.as_bytes());
        write!(f, "PublicKey({}..)", &encoded[..8])
    }
}

/// An X25519 key pair: exactly one private and one public handle,
/// generated or imported together.
#[derive(Debug)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    /// Generate a fresh key pair from operating-system randomness.
    ///
    /// # Errors
    ///
    /// - `Generation` if the entropy source refuses to produce key
    ///   material
    pub fn generate() -> Result<Self, KeyPairError> {
        let mut seed = [0u8; RAW_KEY_SIZE];
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|err| KeyPairError::Generation { reason: err.to_string() })?;

        let secret = StaticSecret::from(seed);
        seed.zeroize();

        let public = X25519Public::from(&secret);
        tracing::debug!("generated X25519 key pair");

        Ok(Self { private_key: PrivateKey { secret }, public_key: PublicKey { key: public } })
    }

    /// Private handle, for key agreement.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Public handle, for sharing with peers.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Serialize both halves into the canonical wire document.
    ///
    /// The private key becomes PKCS#8 v1 DER, the public key SPKI DER,
    /// both base64-encoded next to their format tags.
    ///
    /// # Errors
    ///
    /// - `Export` if a handle cannot be serialized, naming the half that
    ///   failed
    pub fn export(&self) -> Result<ExportedKeyPair, KeyPairError> {
        let private_der = pkcs8_from_private(&self.private_key).map_err(|err| {
            KeyPairError::Export { role: KeyRole::Private, reason: err.to_string() }
        })?;
        let public_der = spki_from_public(&self.public_key).map_err(|err| {
            KeyPairError::Export { role: KeyRole::Public, reason: err.to_string() }
        })?;

        Ok(ExportedKeyPair {
            algorithm: ALGORITHM_X25519.to_string(),
            public_key: ExportedKey {
                format: FORMAT_SPKI.to_string(),
                value: codec::encode(&public_der),
            },
            private_key: ExportedKey {
                format: FORMAT_PKCS8.to_string(),
                value: codec::encode(&private_der),
            },
        })
    }

    /// Import a canonical document back into usable handles.
    ///
    /// Structural validation runs first, before any decoding, so malformed
    /// tags never reach the engine. The decoded handles carry the same
    /// least-privilege capabilities as generated ones.
    ///
    /// # Errors
    ///
    /// - `Validation` if the document's tags are wrong
    /// - `Import` if a value does not decode into key material of the
    ///   declared format, naming the half that failed
    pub fn import(document: &ExportedKeyPair) -> Result<Self, KeyPairError> {
        document.validate()?;

        let private_der = codec::decode(&document.private_key.value).map_err(|err| {
            KeyPairError::Import { role: KeyRole::Private, reason: err.to_string() }
        })?;
        let private_key = private_from_pkcs8(&private_der)?;

        let public_der = codec::decode(&document.public_key.value).map_err(|err| {
            KeyPairError::Import { role: KeyRole::Public, reason: err.to_string() }
        })?;
        let public_key = public_from_spki(&public_der)?;

        Ok(Self { private_key, public_key })
    }

    /// Import a detected document of either accepted wire shape.
    ///
    /// Legacy raw-format documents are migrated on the way in; a
    /// subsequent [`export`](Self::export) produces the canonical shape.
    pub fn import_document(document: &KeyPairDocument) -> Result<Self, KeyPairError> {
        match document {
            KeyPairDocument::Current(exported) => Self::import(exported),
            KeyPairDocument::Legacy(legacy) => Self::import_legacy(legacy),
        }
    }

    /// Detect the format of a JSON key-pair document and import it.
    pub fn import_json(json: &str) -> Result<Self, KeyPairError> {
        let document = KeyPairDocument::from_json(json)?;
        Self::import_document(&document)
    }

    /// Migrate a first-generation raw-key document into handles.
    fn import_legacy(document: &LegacyKeyPair) -> Result<Self, KeyPairError> {
        document.validate()?;

        let mut scalar = decode_raw_key(&document.private_key, KeyRole::Private)?;
        let point = decode_raw_key(&document.public_key, KeyRole::Public)?;

        // Construction clamps the scalar, so a later export is canonical
        // rather than byte-identical to the legacy value; derived shared
        // keys are unaffected
        let secret = StaticSecret::from(scalar);
        scalar.zeroize();

        tracing::debug!("migrated legacy key-pair document");

        Ok(Self {
            private_key: PrivateKey { secret },
            public_key: PublicKey { key: X25519Public::from(point) },
        })
    }
}

/// Encode the private scalar as a PKCS#8 v1 `PrivateKeyInfo` document.
fn pkcs8_from_private(private_key: &PrivateKey) -> der::Result<Vec<u8>> {
    // RFC 8410: the PKCS#8 payload wraps the raw scalar in a nested
    // OCTET STRING (CurvePrivateKey)
    let mut scalar = private_key.secret.to_bytes();
    let mut curve_private_key = OctetStringRef::new(&scalar)?.to_der()?;
    let document = PrivateKeyInfo::new(ALGORITHM_IDENTIFIER, &curve_private_key).to_der();

    scalar.zeroize();
    curve_private_key.zeroize();
    document
}

/// Encode the public point as a `SubjectPublicKeyInfo` document.
fn spki_from_public(public_key: &PublicKey) -> der::Result<Vec<u8>> {
    let document = SubjectPublicKeyInfoRef {
        algorithm: ALGORITHM_IDENTIFIER,
        subject_public_key: BitStringRef::from_bytes(public_key.key.as_bytes())?,
    };
    document.to_der()
}

/// Decode a PKCS#8 document into a private handle.
fn private_from_pkcs8(der_bytes: &[u8]) -> Result<PrivateKey, KeyPairError> {
    let info = PrivateKeyInfo::from_der(der_bytes)
        .map_err(|err| KeyPairError::Import { role: KeyRole::Private, reason: err.to_string() })?;
    check_algorithm(&info.algorithm, KeyRole::Private)?;

    // v2 documents with an embedded public key parse fine; the embedded
    // key is ignored in favor of the document's own publicKey field
    let curve_private_key = OctetStringRef::from_der(info.private_key).map_err(|err| {
        KeyPairError::Import {
            role: KeyRole::Private,
            reason: format!("malformed curve private key: {err}"),
        }
    })?;

    let mut scalar = fixed_key_bytes(curve_private_key.as_bytes(), KeyRole::Private)?;
    let secret = StaticSecret::from(scalar);
    scalar.zeroize();

    Ok(PrivateKey { secret })
}

/// Decode an SPKI document into a public handle.
fn public_from_spki(der_bytes: &[u8]) -> Result<PublicKey, KeyPairError> {
    let info = SubjectPublicKeyInfoRef::from_der(der_bytes)
        .map_err(|err| KeyPairError::Import { role: KeyRole::Public, reason: err.to_string() })?;
    check_algorithm(&info.algorithm, KeyRole::Public)?;

    let Some(bytes) = info.subject_public_key.as_bytes() else {
        return Err(KeyPairError::Import {
            role: KeyRole::Public,
            reason: "public key bit string has unused bits".to_string(),
        });
    };

    let point = fixed_key_bytes(bytes, KeyRole::Public)?;
    Ok(PublicKey { key: X25519Public::from(point) })
}

/// Reject documents whose algorithm identifier is not plain X25519.
fn check_algorithm(
    algorithm: &AlgorithmIdentifierRef<'_>,
    role: KeyRole,
) -> Result<(), KeyPairError> {
    if algorithm.oid != ALGORITHM_OID {
        return Err(KeyPairError::Import {
            role,
            reason: format!("unexpected algorithm oid {}", algorithm.oid),
        });
    }
    if algorithm.parameters.is_some() {
        return Err(KeyPairError::Import {
            role,
            reason: "algorithm parameters must be absent for X25519".to_string(),
        });
    }
    Ok(())
}

/// Decode one base64 raw key from a legacy document.
fn decode_raw_key(value: &str, role: KeyRole) -> Result<[u8; RAW_KEY_SIZE], KeyPairError> {
    let mut bytes = codec::decode(value)
        .map_err(|err| KeyPairError::Import { role, reason: err.to_string() })?;
    let key = fixed_key_bytes(&bytes, role);
    bytes.zeroize();
    key
}

/// Require exactly 32 bytes of key material.
fn fixed_key_bytes(bytes: &[u8], role: KeyRole) -> Result<[u8; RAW_KEY_SIZE], KeyPairError> {
    bytes.try_into().map_err(|_| KeyPairError::Import {
        role,
        reason: format!("expected {RAW_KEY_SIZE} key bytes, got {}", bytes.len()),
    })
}
