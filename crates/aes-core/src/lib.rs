//! From-scratch AES-128 used by eidocrypt.
//!
//! The crate follows FIPS-197 directly and provides:
//! - GF(2^8) arithmetic and compile-time generated S-boxes.
//! - The AES-128 key schedule.
//! - Single-block encryption and decryption.
//!
//! Keys and round keys are wiped on drop and never printed by `Debug`. The
//! table lookups are not constant-time; the implementation should not be
//! treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
pub mod gf;
mod key;
mod round;
mod sbox;
mod schedule;

pub use crate::block::{xor_in_place, Block, BLOCK_LEN};
pub use crate::cipher::{decrypt_block, encrypt_block};
pub use crate::key::{Aes128Key, KeyLengthError, RoundKeys, KEY_LEN, ROUNDS};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, SBOX};
pub use crate::schedule::expand_key;
