//! Base64 codec for byte payloads crossing text boundaries.
//!
//! Standard alphabet with padding, shared by every serialized value in the
//! wire formats: DER key material, raw legacy keys, ciphertexts and nonces
//! alike.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::CodecError;

/// Encode raw bytes as base64 text.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode base64 text back into raw bytes.
///
/// # Errors
///
/// - `CodecError` if the input is not canonical standard-alphabet base64
///   (bad symbols, bad length, missing padding)
pub fn decode(text: &str) -> Result<Vec<u8>, CodecError> {
    Ok(STANDARD.decode(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_matches_known_vector() {
        assert_eq!(encode(b"hello"), "aGVsbG8=");
    }

    #[test]
    fn decode_inverts_encode() {
        let bytes = [0x00, 0x01, 0xFE, 0xFF, 0x42];
        assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn empty_input_round_trips() {
        assert_eq!(encode(b""), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn invalid_symbols_are_rejected() {
        assert!(decode("not base64!").is_err());
    }

    #[test]
    fn missing_padding_is_rejected() {
        assert!(decode("aGVsbG8").is_err());
    }
}
