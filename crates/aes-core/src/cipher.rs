//! AES-128 block encryption and decryption.

use crate::block::Block;
use crate::key::{RoundKeys, ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;
    add_round_key(&mut state, round_keys.get(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    // Final round has no MixColumns.
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(ROUNDS));
    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;
    add_round_key(&mut state, round_keys.get(ROUNDS));
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);

    for round in (1..ROUNDS).rev() {
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
    }

    add_round_key(&mut state, round_keys.get(0));
    state
}
