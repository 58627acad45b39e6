//! String-keyed entry points for adapters such as the CLI.

use aes_core::Aes128Key;
use log::warn;

use crate::error::{Error, ErrorKind, Field};
use crate::message::{decrypt_message, encrypt_message};

fn require(value: &str, field: Field) -> Result<(), ErrorKind> {
    if value.is_empty() {
        return Err(ErrorKind::InputValidation(field));
    }
    Ok(())
}

fn parse_inputs(text: &str, key: &str) -> Result<Aes128Key, ErrorKind> {
    require(text, Field::Text)?;
    require(key, Field::Key)?;
    Ok(Aes128Key::from_text(key)?)
}

/// Encrypts `text` under the 16-byte UTF-8 `key`, returning Base64.
///
/// Empty text or key fails with [`ErrorKind::InputValidation`] before any
/// cipher work is done.
pub fn encrypt(text: &str, key: &str) -> Result<String, Error> {
    let key = parse_inputs(text, key).map_err(Error::Encryption)?;
    Ok(encrypt_message(text, &key))
}

/// Decrypts Base64 `encoded` under the 16-byte UTF-8 `key`.
pub fn decrypt(encoded: &str, key: &str) -> Result<String, Error> {
    let key = parse_inputs(encoded, key).map_err(Error::Decryption)?;
    decrypt_message(encoded, &key).map_err(|kind| {
        warn!("decryption rejected: {kind}");
        Error::Decryption(kind)
    })
}
