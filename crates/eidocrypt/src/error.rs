//! Error taxonomy for eidocrypt.

use core::fmt;

use aes_core::KeyLengthError;
use thiserror::Error;

/// Invalid PKCS#7 padding found while decrypting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PaddingError {
    /// There is no byte to read the padding count from.
    #[error("message is empty")]
    Empty,
    /// The final byte is not a count in `1..=16`.
    #[error("padding count {0} is outside 1..=16")]
    InvalidCount(u8),
    /// The padding count is larger than the message.
    #[error("padding count {count} exceeds message length {len}")]
    Overrun {
        /// Count read from the final byte.
        count: u8,
        /// Length of the padded message.
        len: usize,
    },
    /// Not every padding byte carries the padding count.
    #[error("padding bytes do not all equal {0}")]
    Mismatch(u8),
}

/// The ciphertext or the recovered plaintext could not be decoded.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodingError {
    /// Ciphertext is not valid standard Base64.
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// Decrypted bytes are not UTF-8.
    #[error("decrypted bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Which caller-supplied input was missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// Plaintext or ciphertext.
    Text,
    /// Secret key.
    Key,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Text => f.write_str("text"),
            Field::Key => f.write_str("secret key"),
        }
    }
}

/// Closed set of failure kinds.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A required input was empty.
    #[error("{0} is required")]
    InputValidation(Field),
    /// The key is not 16 bytes.
    #[error(transparent)]
    KeyLength(#[from] KeyLengthError),
    /// PKCS#7 validation failed after decryption.
    #[error("invalid padding: {0}")]
    Padding(#[from] PaddingError),
    /// Ciphertext length is zero or not a multiple of the block size.
    #[error("ciphertext length {len} is not a positive multiple of 16")]
    Length {
        /// Rejected length in bytes.
        len: usize,
    },
    /// Base64 or UTF-8 decoding failed.
    #[error(transparent)]
    Decoding(#[from] DecodingError),
}

/// Failure of a top-level [`encrypt`](crate::encrypt) or [`decrypt`](crate::decrypt) call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Raised by [`encrypt`](crate::encrypt).
    #[error("encryption failed: {0}")]
    Encryption(ErrorKind),
    /// Raised by [`decrypt`](crate::decrypt).
    #[error("decryption failed: {0}")]
    Decryption(ErrorKind),
}

impl Error {
    /// The underlying failure kind.
    pub fn kind(&self) -> &ErrorKind {
        match self {
            Error::Encryption(kind) | Error::Decryption(kind) => kind,
        }
    }
}
