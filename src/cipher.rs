//! Bulk ciphers for cipher-and-MAC suites
//!
//! Pre-AEAD suites pair a bulk cipher with a separate record MAC. The bulk
//! cipher is either a stream cipher (RC4) or a CBC block mode (AES-128/256,
//! 3DES), with the traffic direction fixed at construction time for the
//! block modes. Record padding is applied and removed by the record layer;
//! block-mode input here must already be block aligned.

use aes::{Aes128, Aes256};
use cbc::cipher::generic_array::GenericArray;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use des::TdesEde3;
use rc4::{consts::U16, KeyInit, Rc4, StreamCipher};

use crate::error::{SuiteError, SuiteResult};

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;
type TdesCbcEnc = cbc::Encryptor<TdesEde3>;
type TdesCbcDec = cbc::Decryptor<TdesEde3>;

/// Stream cipher state. Encryption and decryption are the same keystream
/// XOR, so there is no direction.
pub enum StreamState {
    Rc4(Box<Rc4<U16>>),
}

/// CBC block mode state, direction fixed at construction.
pub enum BlockState {
    Aes128Encrypt(Aes128CbcEnc),
    Aes128Decrypt(Aes128CbcDec),
    Aes256Encrypt(Aes256CbcEnc),
    Aes256Decrypt(Aes256CbcDec),
    TdesEncrypt(TdesCbcEnc),
    TdesDecrypt(TdesCbcDec),
}

/// A bound bulk cipher for one traffic direction.
pub enum BulkCipher {
    Stream(StreamState),
    Block(BlockState),
}

impl BulkCipher {
    /// Cipher block length in bytes; 1 for stream ciphers.
    #[must_use]
    pub fn block_size(&self) -> usize {
        match self {
            Self::Stream(_) => 1,
            Self::Block(
                BlockState::Aes128Encrypt(_)
                | BlockState::Aes128Decrypt(_)
                | BlockState::Aes256Encrypt(_)
                | BlockState::Aes256Decrypt(_),
            ) => 16,
            Self::Block(BlockState::TdesEncrypt(_) | BlockState::TdesDecrypt(_)) => 8,
        }
    }

    /// Transform `buf` in place in the direction fixed at construction.
    ///
    /// For block modes, `buf` must be a whole number of blocks; anything
    /// else is caller misuse.
    pub fn apply_in_place(&mut self, buf: &mut [u8]) -> SuiteResult<()> {
        let block_size = self.block_size();
        if buf.len() % block_size != 0 {
            return Err(SuiteError::internal(format!(
                "bulk cipher input length {} is not a multiple of the block size {block_size}",
                buf.len()
            )));
        }

        match self {
            Self::Stream(StreamState::Rc4(cipher)) => cipher.apply_keystream(buf),
            Self::Block(BlockState::Aes128Encrypt(cipher)) => {
                for block in buf.chunks_exact_mut(16) {
                    cipher.encrypt_block_mut(GenericArray::from_mut_slice(block));
                }
            }
            Self::Block(BlockState::Aes128Decrypt(cipher)) => {
                for block in buf.chunks_exact_mut(16) {
                    cipher.decrypt_block_mut(GenericArray::from_mut_slice(block));
                }
            }
            Self::Block(BlockState::Aes256Encrypt(cipher)) => {
                for block in buf.chunks_exact_mut(16) {
                    cipher.encrypt_block_mut(GenericArray::from_mut_slice(block));
                }
            }
            Self::Block(BlockState::Aes256Decrypt(cipher)) => {
                for block in buf.chunks_exact_mut(16) {
                    cipher.decrypt_block_mut(GenericArray::from_mut_slice(block));
                }
            }
            Self::Block(BlockState::TdesEncrypt(cipher)) => {
                for block in buf.chunks_exact_mut(8) {
                    cipher.encrypt_block_mut(GenericArray::from_mut_slice(block));
                }
            }
            Self::Block(BlockState::TdesDecrypt(cipher)) => {
                for block in buf.chunks_exact_mut(8) {
                    cipher.decrypt_block_mut(GenericArray::from_mut_slice(block));
                }
            }
        }
        Ok(())
    }
}

/// RC4 stream cipher. The IV is unused; suites carrying RC4 have a zero IV
/// length.
pub fn new_rc4(key: &[u8]) -> SuiteResult<BulkCipher> {
    let cipher = Rc4::<U16>::new_from_slice(key)
        .map_err(|_| SuiteError::internal(format!("invalid RC4 key length: {}", key.len())))?;
    Ok(BulkCipher::Stream(StreamState::Rc4(Box::new(cipher))))
}

/// AES in CBC mode; the key length selects AES-128 or AES-256.
pub fn new_aes_cbc(key: &[u8], iv: &[u8], for_reading: bool) -> SuiteResult<BulkCipher> {
    let state = match (key.len(), for_reading) {
        (16, false) => BlockState::Aes128Encrypt(
            Aes128CbcEnc::new_from_slices(key, iv)
                .map_err(|_| SuiteError::internal("invalid AES-128-CBC key/IV length"))?,
        ),
        (16, true) => BlockState::Aes128Decrypt(
            Aes128CbcDec::new_from_slices(key, iv)
                .map_err(|_| SuiteError::internal("invalid AES-128-CBC key/IV length"))?,
        ),
        (32, false) => BlockState::Aes256Encrypt(
            Aes256CbcEnc::new_from_slices(key, iv)
                .map_err(|_| SuiteError::internal("invalid AES-256-CBC key/IV length"))?,
        ),
        (32, true) => BlockState::Aes256Decrypt(
            Aes256CbcDec::new_from_slices(key, iv)
                .map_err(|_| SuiteError::internal("invalid AES-256-CBC key/IV length"))?,
        ),
        (n, _) => {
            return Err(SuiteError::internal(format!(
                "invalid AES-CBC key length: {n} (expected 16 or 32)"
            )))
        }
    };
    Ok(BulkCipher::Block(state))
}

/// Three-key triple DES in CBC mode (24-byte key, 8-byte blocks).
pub fn new_tdes_cbc(key: &[u8], iv: &[u8], for_reading: bool) -> SuiteResult<BulkCipher> {
    let state = if for_reading {
        BlockState::TdesDecrypt(
            TdesCbcDec::new_from_slices(key, iv)
                .map_err(|_| SuiteError::internal("invalid 3DES-CBC key/IV length"))?,
        )
    } else {
        BlockState::TdesEncrypt(
            TdesCbcEnc::new_from_slices(key, iv)
                .map_err(|_| SuiteError::internal("invalid 3DES-CBC key/IV length"))?,
        )
    };
    Ok(BulkCipher::Block(state))
}
