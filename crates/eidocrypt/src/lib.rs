//! Text encryption with AES-128 in ECB mode and PKCS#7 padding.
//!
//! The layers, from the outside in:
//! - [`encrypt`] / [`decrypt`]: string key, string input, [`Error`] tagged by operation.
//! - [`encrypt_message`] / [`decrypt_message`]: UTF-8 text and Base64 ciphertext.
//! - [`encrypt_bytes`] / [`decrypt_bytes`] and [`Ecb`]: raw byte strings.
//! - [`pad`] / [`unpad`]: PKCS#7 framing.
//!
//! Block encryption itself lives in [`aes_core`].
//!
//! ECB encrypts equal plaintext blocks to equal ciphertext blocks and carries
//! no integrity tag. A wrong key usually shows up as a padding or decoding
//! error, never as a dedicated "wrong key" signal.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod api;
mod ecb;
mod error;
mod message;
mod padding;

pub use aes_core::{Aes128Key, KeyLengthError, BLOCK_LEN, KEY_LEN};

pub use crate::api::{decrypt, encrypt};
pub use crate::ecb::{decrypt_bytes, encrypt_bytes, Ecb};
pub use crate::error::{DecodingError, Error, ErrorKind, Field, PaddingError};
pub use crate::message::{decrypt_message, encrypt_message};
pub use crate::padding::{pad, unpad};
