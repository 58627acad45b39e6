//! Key types for AES-128.

use core::fmt;

use thiserror::Error;
use zeroize::ZeroizeOnDrop;

use crate::block::Block;

/// Length of an AES-128 key in bytes.
pub const KEY_LEN: usize = 16;

/// Number of AES-128 rounds.
pub const ROUNDS: usize = 10;

/// Key material of the wrong size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("AES-128 key must be 16 bytes, got {len}")]
pub struct KeyLengthError {
    /// Length of the rejected key in bytes.
    pub len: usize,
}

/// AES-128 key. Wiped on drop; `Debug` does not reveal the bytes.
#[derive(Clone, PartialEq, Eq, ZeroizeOnDrop)]
pub struct Aes128Key([u8; KEY_LEN]);

impl Aes128Key {
    /// Uses the UTF-8 bytes of `text` as the key. The text must encode to
    /// exactly 16 bytes; it is never truncated or padded.
    pub fn from_text(text: &str) -> Result<Self, KeyLengthError> {
        Self::try_from(text.as_bytes())
    }

    /// Raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl From<[u8; KEY_LEN]> for Aes128Key {
    fn from(value: [u8; KEY_LEN]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = KeyLengthError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; KEY_LEN] = value
            .try_into()
            .map_err(|_| KeyLengthError { len: value.len() })?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Aes128Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Aes128Key(<redacted>)")
    }
}

/// Expanded round keys for AES-128: the key itself followed by ten derived blocks.
#[derive(Clone, PartialEq, Eq, ZeroizeOnDrop)]
pub struct RoundKeys([Block; ROUNDS + 1]);

impl RoundKeys {
    pub(crate) fn new(blocks: [Block; ROUNDS + 1]) -> Self {
        Self(blocks)
    }

    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RoundKeys(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_key_must_be_sixteen_bytes() {
        assert!(Aes128Key::from_text("ThisIsASecretKey").is_ok());
        assert_eq!(
            Aes128Key::from_text("short").unwrap_err(),
            KeyLengthError { len: 5 }
        );
        assert_eq!(
            Aes128Key::from_text("ThisIsASecretKey!").unwrap_err(),
            KeyLengthError { len: 17 }
        );
        assert_eq!(Aes128Key::from_text("").unwrap_err().len, 0);
    }

    #[test]
    fn length_is_counted_in_bytes_not_chars() {
        // 8 two-byte characters.
        let key = Aes128Key::from_text("éééééééé").expect("16 bytes");
        assert_eq!(key.as_bytes()[0], 0xc3);
        assert!(Aes128Key::from_text("ééééééééé").is_err());
    }

    #[test]
    fn key_material_is_wiped_on_drop_only() {
        // Only the drop hook is exposed; there is no public in-place wipe.
        fn wiped_on_drop<T: ZeroizeOnDrop>() {}
        wiped_on_drop::<Aes128Key>();
        wiped_on_drop::<RoundKeys>();

        let key = Aes128Key::from([7u8; KEY_LEN]);
        let copy = key.clone();
        drop(key);
        assert_eq!(copy.as_bytes(), &[7u8; KEY_LEN]);
    }

    #[test]
    fn debug_does_not_leak_key_bytes() {
        let key = Aes128Key::from([0x41u8; KEY_LEN]);
        assert_eq!(format!("{key:?}"), "Aes128Key(<redacted>)");
        let rks = crate::schedule::expand_key(&key);
        assert_eq!(format!("{rks:?}"), "RoundKeys(<redacted>)");
    }
}
