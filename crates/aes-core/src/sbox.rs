//! Forward and inverse S-boxes, generated at compile time.

use crate::gf::gf_inv;

const AFFINE_CONSTANT: u8 = 0x63;

const fn affine(b: u8) -> u8 {
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ AFFINE_CONSTANT
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = affine(gf_inv(i as u8));
        i += 1;
    }
    table
}

const fn invert(table: &[u8; 256]) -> [u8; 256] {
    let mut inverse = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        inverse[table[i] as usize] = i as u8;
        i += 1;
    }
    inverse
}

/// The AES substitution table used by SubBytes.
pub const SBOX: [u8; 256] = build_sbox();

/// Inverse of [`SBOX`], used by InvSubBytes.
pub const INV_SBOX: [u8; 256] = invert(&SBOX);

/// Forward S-box lookup.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    SBOX[byte as usize]
}

/// Inverse S-box lookup.
#[inline]
pub fn inv_sbox(byte: u8) -> u8 {
    INV_SBOX[byte as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_entries() {
        assert_eq!(sbox(0x00), 0x63);
        assert_eq!(sbox(0x01), 0x7c);
        assert_eq!(sbox(0x53), 0xed);
        assert_eq!(sbox(0xc9), 0xdd);
        assert_eq!(sbox(0xff), 0x16);
        assert_eq!(inv_sbox(0x63), 0x00);
        assert_eq!(inv_sbox(0x00), 0x52);
    }

    #[test]
    fn tables_are_mutual_inverses() {
        for b in 0..=255u8 {
            assert_eq!(inv_sbox(sbox(b)), b);
            assert_eq!(sbox(inv_sbox(b)), b);
        }
    }

    #[test]
    fn sbox_has_no_fixed_points() {
        for b in 0..=255u8 {
            assert_ne!(sbox(b), b);
            assert_ne!(sbox(b), !b);
        }
    }
}
