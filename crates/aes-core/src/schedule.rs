//! AES-128 key expansion (FIPS-197 section 5.2).

use zeroize::Zeroize;

use crate::block::{Block, BLOCK_LEN};
use crate::key::{Aes128Key, RoundKeys, KEY_LEN, ROUNDS};
use crate::sbox::sbox;

type Word = [u8; 4];

const KEY_WORDS: usize = KEY_LEN / 4;
const TOTAL_WORDS: usize = 4 * (ROUNDS + 1);

const RCON: [u8; ROUNDS] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

fn rot_word([a, b, c, d]: Word) -> Word {
    [b, c, d, a]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

fn xor_word(lhs: Word, rhs: Word) -> Word {
    [lhs[0] ^ rhs[0], lhs[1] ^ rhs[1], lhs[2] ^ rhs[2], lhs[3] ^ rhs[3]]
}

/// Expands a 128-bit key into 11 round keys (44 words).
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut words: [Word; TOTAL_WORDS] = [[0u8; 4]; TOTAL_WORDS];
    for (word, chunk) in words.iter_mut().zip(key.as_bytes().chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in KEY_WORDS..TOTAL_WORDS {
        let mut temp = words[i - 1];
        if i % KEY_WORDS == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / KEY_WORDS - 1];
        }
        words[i] = xor_word(words[i - KEY_WORDS], temp);
    }

    let mut blocks: [Block; ROUNDS + 1] = [[0u8; BLOCK_LEN]; ROUNDS + 1];
    for (block, quad) in blocks.iter_mut().zip(words.chunks_exact(4)) {
        for (dst, word) in block.chunks_exact_mut(4).zip(quad) {
            dst.copy_from_slice(word);
        }
    }
    let round_keys = RoundKeys::new(blocks);

    words.zeroize();
    blocks.zeroize();
    round_keys
}
