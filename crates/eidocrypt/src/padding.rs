//! PKCS#7 padding for 16-byte blocks.

use aes_core::BLOCK_LEN;

use crate::error::PaddingError;

/// Appends `N = 16 - len % 16` bytes of value `N`.
///
/// Block-aligned input (including empty input) gains a full block of `0x10`,
/// so padding can always be removed unambiguously.
pub fn pad(bytes: &[u8]) -> Vec<u8> {
    let count = BLOCK_LEN - bytes.len() % BLOCK_LEN;
    let mut padded = Vec::with_capacity(bytes.len() + count);
    padded.extend_from_slice(bytes);
    padded.resize(bytes.len() + count, count as u8);
    padded
}

/// Strips PKCS#7 padding, returning the original message.
pub fn unpad(bytes: &[u8]) -> Result<&[u8], PaddingError> {
    let &count = bytes.last().ok_or(PaddingError::Empty)?;
    if count == 0 || usize::from(count) > BLOCK_LEN {
        return Err(PaddingError::InvalidCount(count));
    }
    let split = bytes
        .len()
        .checked_sub(usize::from(count))
        .ok_or(PaddingError::Overrun {
            count,
            len: bytes.len(),
        })?;
    let (message, padding) = bytes.split_at(split);
    if padding.iter().any(|&b| b != count) {
        return Err(PaddingError::Mismatch(count));
    }
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_partial_block() {
        let padded = pad(b"Hello, World!");
        assert_eq!(padded.len(), 16);
        assert_eq!(&padded[13..], &[3, 3, 3]);
    }

    #[test]
    fn aligned_input_gains_full_block() {
        let padded = pad(&[0u8; 16]);
        assert_eq!(
            hex::encode(&padded),
            "0000000000000000000000000000000010101010101010101010101010101010"
        );
        assert_eq!(pad(&[7u8; 32]).len(), 48);
    }

    #[test]
    fn empty_input_is_a_single_padding_block() {
        assert_eq!(pad(&[]), vec![16u8; 16]);
    }

    #[test]
    fn padded_length_is_always_a_block_multiple() {
        for len in 0..=48 {
            let data = vec![0xabu8; len];
            let padded = pad(&data);
            assert_eq!(padded.len() % BLOCK_LEN, 0);
            assert!(padded.len() > len && padded.len() <= len + BLOCK_LEN);
            assert_eq!(unpad(&padded), Ok(&data[..]));
        }
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(unpad(&[]), Err(PaddingError::Empty));
    }

    #[test]
    fn rejects_out_of_range_counts() {
        let mut block = [1u8; 16];
        block[15] = 0;
        assert_eq!(unpad(&block), Err(PaddingError::InvalidCount(0)));
        block[15] = 17;
        assert_eq!(unpad(&block), Err(PaddingError::InvalidCount(17)));
    }

    #[test]
    fn rejects_count_larger_than_message() {
        assert_eq!(
            unpad(&[4, 4, 4]),
            Err(PaddingError::Overrun { count: 4, len: 3 })
        );
    }

    #[test]
    fn rejects_inconsistent_padding_bytes() {
        let mut block = [0u8; 16];
        block[13..].copy_from_slice(&[3, 2, 3]);
        assert_eq!(unpad(&block), Err(PaddingError::Mismatch(3)));
    }

    #[test]
    fn full_padding_block_unpads_to_empty() {
        assert_eq!(unpad(&[16u8; 16]), Ok(&b""[..]));
    }
}
