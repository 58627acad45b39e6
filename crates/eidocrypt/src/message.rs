//! UTF-8 text in, Base64 ciphertext out.

use aes_core::Aes128Key;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;

use crate::ecb::{decrypt_bytes, encrypt_bytes};
use crate::error::{DecodingError, ErrorKind};

/// Encrypts `text` and returns the ciphertext as standard, padded Base64.
pub fn encrypt_message(text: &str, key: &Aes128Key) -> String {
    let ciphertext = encrypt_bytes(text.as_bytes(), key);
    debug!(
        "encrypted {} bytes into {} ciphertext bytes",
        text.len(),
        ciphertext.len()
    );
    STANDARD.encode(ciphertext)
}

/// Reverses [`encrypt_message`].
///
/// A ciphertext that decrypts to zero bytes yields `Ok("")`; emptiness is not
/// treated as a failure.
pub fn decrypt_message(encoded: &str, key: &Aes128Key) -> Result<String, ErrorKind> {
    let ciphertext = STANDARD.decode(encoded).map_err(DecodingError::from)?;
    debug!("decrypting {} ciphertext bytes", ciphertext.len());
    let plaintext = decrypt_bytes(&ciphertext, key)?;
    String::from_utf8(plaintext).map_err(|err| DecodingError::Utf8(err.utf8_error()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaddingError;

    fn key() -> Aes128Key {
        Aes128Key::from_text("ThisIsASecretKey").expect("key")
    }

    #[test]
    fn matches_reference_ciphertexts() {
        assert_eq!(
            encrypt_message("Hello, World!", &key()),
            "sGcPScqj8Z6Y9c3thb0MZg=="
        );
        assert_eq!(
            encrypt_message("0123456789abcdef", &key()),
            "GaEBEqZPvCbYOnMH6e70JfRRYGjkU77b/7tz3twFxRc="
        );
        assert_eq!(
            encrypt_message("héllo wörld ✓", &key()),
            "7gUYZgbWR+G9LF95gNW+7I7CRVZ32za/y1ePQWtqZ1k="
        );
    }

    #[test]
    fn decrypts_reference_ciphertext() {
        assert_eq!(
            decrypt_message("sGcPScqj8Z6Y9c3thb0MZg==", &key()).as_deref(),
            Ok("Hello, World!")
        );
    }

    #[test]
    fn non_base64_is_a_decoding_error() {
        let err = decrypt_message("not base64!!", &key()).unwrap_err();
        assert!(matches!(err, ErrorKind::Decoding(DecodingError::Base64(_))));
    }

    #[test]
    fn short_ciphertext_is_a_length_error() {
        assert_eq!(
            decrypt_message("AAAA", &key()),
            Err(ErrorKind::Length { len: 3 })
        );
        assert_eq!(decrypt_message("", &key()), Err(ErrorKind::Length { len: 0 }));
    }

    #[test]
    fn invalid_utf8_is_a_decoding_error() {
        // Fifteen 0xff bytes followed by one byte of padding.
        let err = decrypt_message("RRWoJzCGMhPXtuHn6pKQ1g==", &key()).unwrap_err();
        assert!(matches!(err, ErrorKind::Decoding(DecodingError::Utf8(_))));
    }

    #[test]
    fn wrong_key_reports_padding() {
        let wrong = Aes128Key::from_text("ThisIsASecretKez").expect("key");
        assert_eq!(
            decrypt_message("sGcPScqj8Z6Y9c3thb0MZg==", &wrong),
            Err(ErrorKind::Padding(PaddingError::InvalidCount(0x49)))
        );
    }

    #[test]
    fn lone_padding_block_is_empty_text() {
        assert_eq!(
            decrypt_message("9FFgaORTvtv/u3Pe3AXFFw==", &key()).as_deref(),
            Ok("")
        );
    }
}
