//! AES round transformations over the column-major 4×4 state.

use crate::block::{xor_in_place, Block};
use crate::gf::gmul;
use crate::sbox::{inv_sbox, sbox};

type MixMatrix = [[u8; 4]; 4];

const MIX: MixMatrix = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

const INV_MIX: MixMatrix = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

#[inline]
const fn at(row: usize, col: usize) -> usize {
    row + 4 * col
}

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Rotates row `r` left by `r` positions.
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[at(row, col)] = src[at(row, (col + row) % 4)];
        }
    }
}

/// Rotates row `r` right by `r` positions.
pub fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[at(row, (col + row) % 4)] = src[at(row, col)];
        }
    }
}

fn multiply_columns(state: &mut Block, matrix: &MixMatrix) {
    for column in state.chunks_exact_mut(4) {
        let input = [column[0], column[1], column[2], column[3]];
        for (out, coefficients) in column.iter_mut().zip(matrix) {
            *out = coefficients
                .iter()
                .zip(&input)
                .fold(0, |acc, (&c, &b)| acc ^ gmul(c, b));
        }
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    multiply_columns(state, &MIX);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    multiply_columns(state, &INV_MIX);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
