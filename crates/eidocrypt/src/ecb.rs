//! Electronic codebook chaining over whole blocks.

use aes_core::{decrypt_block, encrypt_block, expand_key, Aes128Key, Block, RoundKeys, BLOCK_LEN};
use log::trace;

use crate::error::ErrorKind;
use crate::padding::{pad, unpad};

/// ECB cipher for a single call. The round keys are expanded once in
/// [`Ecb::new`] and wiped when the value is dropped.
#[derive(Debug)]
pub struct Ecb {
    round_keys: RoundKeys,
}

impl Ecb {
    /// Expands `key` into a fresh schedule.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Encrypts every block of `data` independently, in order.
    pub fn encrypt_in_place(&self, data: &mut [u8]) -> Result<(), ErrorKind> {
        check_len(data.len())?;
        self.apply(data, encrypt_block);
        Ok(())
    }

    /// Decrypts every block of `data` independently, in order.
    pub fn decrypt_in_place(&self, data: &mut [u8]) -> Result<(), ErrorKind> {
        check_len(data.len())?;
        self.apply(data, decrypt_block);
        Ok(())
    }

    /// Pads `plaintext` and encrypts it.
    pub fn encrypt_padded(&self, plaintext: &[u8]) -> Vec<u8> {
        let mut data = pad(plaintext);
        self.apply(&mut data, encrypt_block);
        data
    }

    /// Decrypts `ciphertext` and strips its padding.
    pub fn decrypt_padded(&self, ciphertext: &[u8]) -> Result<Vec<u8>, ErrorKind> {
        let mut data = ciphertext.to_vec();
        self.decrypt_in_place(&mut data)?;
        let len = unpad(&data)?.len();
        data.truncate(len);
        Ok(data)
    }

    fn apply(&self, data: &mut [u8], transform: fn(&Block, &RoundKeys) -> Block) {
        trace!("ecb: {} blocks", data.len() / BLOCK_LEN);
        for chunk in data.chunks_exact_mut(BLOCK_LEN) {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            chunk.copy_from_slice(&transform(&block, &self.round_keys));
        }
    }
}

fn check_len(len: usize) -> Result<(), ErrorKind> {
    if len == 0 || len % BLOCK_LEN != 0 {
        return Err(ErrorKind::Length { len });
    }
    Ok(())
}

/// Pads and encrypts arbitrary bytes. Output length is a non-zero multiple of 16.
pub fn encrypt_bytes(plaintext: &[u8], key: &Aes128Key) -> Vec<u8> {
    Ecb::new(key).encrypt_padded(plaintext)
}

/// Decrypts and unpads bytes produced by [`encrypt_bytes`].
pub fn decrypt_bytes(ciphertext: &[u8], key: &Aes128Key) -> Result<Vec<u8>, ErrorKind> {
    Ecb::new(key).decrypt_padded(ciphertext)
}
