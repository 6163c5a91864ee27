//! Error type for wire-document validation

use thiserror::Error;

/// A document failed structural validation.
///
/// Raised before any key material reaches the cryptographic engine: tag
/// literals and field shape are checked on the serialized form alone.
/// Every variant is recoverable; a caller typically discards the document
/// and reports it to the user.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Document is not well-formed JSON, or its fields do not match the
    /// declared shape
    #[error("malformed document: {reason}")]
    Malformed {
        /// Parser's description of the failure
        reason: String,
    },

    /// The algorithm tag does not name the supported scheme
    #[error("unsupported algorithm: expected \"{expected}\", got \"{actual}\"")]
    UnsupportedAlgorithm {
        /// The required tag literal
        expected: String,
        /// The tag the document carried
        actual: String,
    },

    /// A key's format tag does not match the literal required for its field
    #[error("wrong format for {field}: expected \"{expected}\", got \"{actual}\"")]
    WrongFormat {
        /// Which key field carried the bad tag
        field: &'static str,
        /// The required tag literal
        expected: String,
        /// The tag the document carried
        actual: String,
    },
}

/// Convert JSON parse failures into `Malformed`
impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed { reason: err.to_string() }
    }
}
