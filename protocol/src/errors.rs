//! Error types for the protocol layer.

use curve::CurveError;
use thiserror::Error;

/// Errors returned when opening a cryptogram.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The recomputed tag differs from the stored one.
    ///
    /// Raised for a wrong password, the wrong private key, or any change to the
    /// nonce, ciphertext or tag. The recovered plaintext is discarded.
    #[error("authentication failed: tag mismatch")]
    AuthenticationFailure,

    /// A persisted object could not be parsed.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Errors returned when parsing the line-oriented text form of a key,
/// cryptogram or signature.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("expected {expected} lines, found {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error("field `{field}` is not valid hex")]
    Hex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    /// Anything other than one or more ASCII digits.
    #[error("field `{field}` is not a decimal integer")]
    Decimal { field: &'static str },

    #[error("field `{field}` must be {expected} bytes, found {actual}")]
    Length {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The coordinates do not describe a point of E521.
    #[error("invalid point")]
    Point(#[from] CurveError),
}
