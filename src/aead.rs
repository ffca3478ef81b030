//! AEAD record protection with TLS nonce construction
//!
//! Two nonce schemes wrap the raw AEAD primitives:
//! - **Prefix nonce** (pre-TLS-1.3 GCM suites, RFC 5288): the nonce is
//!   `fixed_prefix(4) || explicit_nonce(8)`, and the 8 explicit bytes
//!   travel on the wire with each record.
//! - **XOR nonce** (ChaCha20-Poly1305 and all TLS 1.3 suites, RFC 8446):
//!   a 12-byte mask is XORed with the 64-bit record sequence number in its
//!   low 8 bytes. Nothing is sent on the wire.
//!
//! One adapter instance per traffic direction, bound to one set of derived
//! keys. Instances are not safe for concurrent invocation.

use aes_gcm::{
    aead::{Aead, KeyInit, Payload},
    Aes128Gcm, Aes256Gcm,
};
use chacha20poly1305::ChaCha20Poly1305;

use crate::common::{AEAD_NONCE_SIZE, AEAD_TAG_SIZE, EXPLICIT_NONCE_SIZE, NONCE_PREFIX_SIZE};
use crate::error::{SuiteError, SuiteResult};

/// Raw AEAD primitive, keyed once at construction.
///
/// Wraps the appropriate cipher for the suite's bulk algorithm and provides
/// a unified seal/open API over a full 12-byte nonce.
pub enum RecordAead {
    Aes128Gcm(Box<Aes128Gcm>),
    Aes256Gcm(Box<Aes256Gcm>),
    ChaCha20Poly1305(Box<ChaCha20Poly1305>),
}

impl RecordAead {
    /// Create an AES-GCM primitive; the key length selects AES-128 or AES-256.
    fn new_aes_gcm(key: &[u8]) -> SuiteResult<Self> {
        match key.len() {
            16 => {
                let cipher = Aes128Gcm::new_from_slice(key)
                    .map_err(|_| SuiteError::internal("invalid AES-128-GCM key length"))?;
                Ok(Self::Aes128Gcm(Box::new(cipher)))
            }
            32 => {
                let cipher = Aes256Gcm::new_from_slice(key)
                    .map_err(|_| SuiteError::internal("invalid AES-256-GCM key length"))?;
                Ok(Self::Aes256Gcm(Box::new(cipher)))
            }
            n => Err(SuiteError::internal(format!(
                "invalid AES-GCM key length: {n} (expected 16 or 32)"
            ))),
        }
    }

    fn new_chacha20_poly1305(key: &[u8]) -> SuiteResult<Self> {
        let cipher = ChaCha20Poly1305::new_from_slice(key)
            .map_err(|_| SuiteError::internal("invalid ChaCha20-Poly1305 key length"))?;
        Ok(Self::ChaCha20Poly1305(Box::new(cipher)))
    }

    fn seal(&self, nonce: &[u8; AEAD_NONCE_SIZE], plaintext: &[u8], aad: &[u8]) -> SuiteResult<Vec<u8>> {
        let result = match self {
            Self::Aes128Gcm(cipher) => cipher.encrypt(
                aes_gcm::Nonce::from_slice(nonce),
                Payload { msg: plaintext, aad },
            ),
            Self::Aes256Gcm(cipher) => cipher.encrypt(
                aes_gcm::Nonce::from_slice(nonce),
                Payload { msg: plaintext, aad },
            ),
            Self::ChaCha20Poly1305(cipher) => cipher.encrypt(
                chacha20poly1305::Nonce::from_slice(nonce),
                chacha20poly1305::aead::Payload { msg: plaintext, aad },
            ),
        };
        result.map_err(|_| SuiteError::internal("AEAD encryption failed"))
    }

    fn open(&self, nonce: &[u8; AEAD_NONCE_SIZE], ciphertext: &[u8], aad: &[u8]) -> SuiteResult<Vec<u8>> {
        let result = match self {
            Self::Aes128Gcm(cipher) => cipher.decrypt(
                aes_gcm::Nonce::from_slice(nonce),
                Payload { msg: ciphertext, aad },
            ),
            Self::Aes256Gcm(cipher) => cipher.decrypt(
                aes_gcm::Nonce::from_slice(nonce),
                Payload { msg: ciphertext, aad },
            ),
            Self::ChaCha20Poly1305(cipher) => cipher.decrypt(
                chacha20poly1305::Nonce::from_slice(nonce),
                chacha20poly1305::aead::Payload { msg: ciphertext, aad },
            ),
        };
        result.map_err(|_| SuiteError::AuthenticationFailed)
    }
}

/// AEAD adapter that prefixes a fixed 4-byte value to each 8-byte explicit
/// nonce supplied by the caller (pre-TLS-1.3 GCM suites).
pub struct PrefixNonceAead {
    /// The first four bytes hold the fixed prefix; the rest is per-call scratch.
    nonce: [u8; AEAD_NONCE_SIZE],
    aead: RecordAead,
}

impl PrefixNonceAead {
    fn new(aead: RecordAead, nonce_prefix: &[u8]) -> SuiteResult<Self> {
        if nonce_prefix.len() != NONCE_PREFIX_SIZE {
            return Err(SuiteError::internal(format!(
                "invalid nonce prefix length: {} (expected {})",
                nonce_prefix.len(),
                NONCE_PREFIX_SIZE
            )));
        }
        let mut nonce = [0u8; AEAD_NONCE_SIZE];
        nonce[..NONCE_PREFIX_SIZE].copy_from_slice(nonce_prefix);
        Ok(Self { nonce, aead })
    }

    fn fill_nonce(&mut self, explicit_nonce: &[u8]) -> SuiteResult<[u8; AEAD_NONCE_SIZE]> {
        if explicit_nonce.len() != EXPLICIT_NONCE_SIZE {
            return Err(SuiteError::internal(format!(
                "invalid explicit nonce length: {} (expected {})",
                explicit_nonce.len(),
                EXPLICIT_NONCE_SIZE
            )));
        }
        self.nonce[NONCE_PREFIX_SIZE..].copy_from_slice(explicit_nonce);
        Ok(self.nonce)
    }

    /// Encrypt a record, returning `ciphertext || tag`.
    pub fn seal(&mut self, explicit_nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> SuiteResult<Vec<u8>> {
        let nonce = self.fill_nonce(explicit_nonce)?;
        self.aead.seal(&nonce, plaintext, aad)
    }

    /// Decrypt and verify a record.
    pub fn open(&mut self, explicit_nonce: &[u8], ciphertext: &[u8], aad: &[u8]) -> SuiteResult<Vec<u8>> {
        let nonce = self.fill_nonce(explicit_nonce)?;
        self.aead.open(&nonce, ciphertext, aad)
    }
}

/// AEAD adapter that XORs the caller-supplied 8-byte sequence value into the
/// low bytes of a fixed 12-byte mask (ChaCha20-Poly1305 and TLS 1.3 suites).
///
/// The XOR is applied again after every call, restoring the mask so the
/// instance carries no state between records.
pub struct XorNonceAead {
    nonce_mask: [u8; AEAD_NONCE_SIZE],
    aead: RecordAead,
}

impl XorNonceAead {
    fn new(aead: RecordAead, nonce_mask: &[u8]) -> SuiteResult<Self> {
        if nonce_mask.len() != AEAD_NONCE_SIZE {
            return Err(SuiteError::internal(format!(
                "invalid nonce mask length: {} (expected {})",
                nonce_mask.len(),
                AEAD_NONCE_SIZE
            )));
        }
        let mut mask = [0u8; AEAD_NONCE_SIZE];
        mask.copy_from_slice(nonce_mask);
        Ok(Self { nonce_mask: mask, aead })
    }

    fn apply_mask(&mut self, nonce: &[u8]) {
        for (i, b) in nonce.iter().enumerate() {
            self.nonce_mask[NONCE_PREFIX_SIZE + i] ^= b;
        }
    }

    fn check_nonce(nonce: &[u8]) -> SuiteResult<()> {
        if nonce.len() != EXPLICIT_NONCE_SIZE {
            return Err(SuiteError::internal(format!(
                "invalid sequence nonce length: {} (expected {})",
                nonce.len(),
                EXPLICIT_NONCE_SIZE
            )));
        }
        Ok(())
    }

    /// Encrypt a record, returning `ciphertext || tag`. Nothing of the nonce
    /// goes on the wire.
    pub fn seal(&mut self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> SuiteResult<Vec<u8>> {
        Self::check_nonce(nonce)?;
        self.apply_mask(nonce);
        let full_nonce = self.nonce_mask;
        let result = self.aead.seal(&full_nonce, plaintext, aad);
        self.apply_mask(nonce);
        result
    }

    /// Decrypt and verify a record.
    pub fn open(&mut self, nonce: &[u8], ciphertext: &[u8], aad: &[u8]) -> SuiteResult<Vec<u8>> {
        Self::check_nonce(nonce)?;
        self.apply_mask(nonce);
        let full_nonce = self.nonce_mask;
        let result = self.aead.open(&full_nonce, ciphertext, aad);
        self.apply_mask(nonce);
        result
    }
}

/// A bound AEAD for one traffic direction, with its nonce scheme fixed.
pub enum TlsAead {
    Prefix(PrefixNonceAead),
    Xor(XorNonceAead),
}

impl TlsAead {
    /// Encrypt a record. `nonce` is the 8-byte explicit nonce (prefix scheme)
    /// or the 8-byte big-endian record sequence number (XOR scheme).
    pub fn seal(&mut self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> SuiteResult<Vec<u8>> {
        match self {
            Self::Prefix(aead) => aead.seal(nonce, plaintext, aad),
            Self::Xor(aead) => aead.seal(nonce, plaintext, aad),
        }
    }

    /// Decrypt and verify a record. Fails with
    /// [`SuiteError::AuthenticationFailed`] on any tag mismatch.
    pub fn open(&mut self, nonce: &[u8], ciphertext: &[u8], aad: &[u8]) -> SuiteResult<Vec<u8>> {
        match self {
            Self::Prefix(aead) => aead.open(nonce, ciphertext, aad),
            Self::Xor(aead) => aead.open(nonce, ciphertext, aad),
        }
    }

    /// Length of the per-call nonce argument
    #[must_use]
    pub fn nonce_size(&self) -> usize {
        EXPLICIT_NONCE_SIZE
    }

    /// Ciphertext expansion (authentication tag length)
    #[must_use]
    pub fn overhead(&self) -> usize {
        AEAD_TAG_SIZE
    }

    /// Number of nonce bytes carried on the wire with each record
    #[must_use]
    pub fn explicit_nonce_len(&self) -> usize {
        match self {
            Self::Prefix(_) => EXPLICIT_NONCE_SIZE,
            Self::Xor(_) => 0,
        }
    }
}

/// AES-GCM with the pre-TLS-1.3 prefix nonce scheme.
///
/// `nonce_prefix` is the 4-byte fixed IV from the key block.
pub fn aead_aes_gcm(key: &[u8], nonce_prefix: &[u8]) -> SuiteResult<TlsAead> {
    let aead = RecordAead::new_aes_gcm(key)?;
    Ok(TlsAead::Prefix(PrefixNonceAead::new(aead, nonce_prefix)?))
}

/// AES-GCM with the TLS 1.3 XOR nonce scheme.
///
/// `nonce_mask` is the full 12-byte IV from the key schedule.
pub fn aead_aes_gcm_tls13(key: &[u8], nonce_mask: &[u8]) -> SuiteResult<TlsAead> {
    let aead = RecordAead::new_aes_gcm(key)?;
    Ok(TlsAead::Xor(XorNonceAead::new(aead, nonce_mask)?))
}

/// ChaCha20-Poly1305 with the XOR nonce scheme (same layout at TLS 1.2
/// per RFC 7905 and TLS 1.3).
pub fn aead_chacha20_poly1305(key: &[u8], nonce_mask: &[u8]) -> SuiteResult<TlsAead> {
    let aead = RecordAead::new_chacha20_poly1305(key)?;
    Ok(TlsAead::Xor(XorNonceAead::new(aead, nonce_mask)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(n: u64) -> [u8; 8] {
        n.to_be_bytes()
    }

    #[test]
    fn test_prefix_nonce_roundtrip() {
        let key = vec![0x42u8; 16];
        let prefix = vec![0x99u8; 4];
        let plaintext = b"prefix nonce record";
        let aad = b"additional data";

        let mut aead = aead_aes_gcm(&key, &prefix).unwrap();
        let ciphertext = aead.seal(&seq(1), plaintext, aad).unwrap();
        assert_eq!(ciphertext.len(), plaintext.len() + AEAD_TAG_SIZE);

        let decrypted = aead.open(&seq(1), &ciphertext, aad).unwrap();
        assert_eq!(&decrypted[..], plaintext);
    }

    #[test]
    fn test_prefix_nonce_bit_flip_fails() {
        let key = vec![0x42u8; 32];
        let prefix = vec![0x99u8; 4];
        let plaintext = b"tamper target";
        let aad = b"aad";

        let mut aead = aead_aes_gcm(&key, &prefix).unwrap();
        let ciphertext = aead.seal(&seq(7), plaintext, aad).unwrap();

        // Flipping any single bit of the ciphertext breaks authentication
        for byte in 0..ciphertext.len() {
            let mut tampered = ciphertext.clone();
            tampered[byte] ^= 0x01;
            let result = aead.open(&seq(7), &tampered, aad);
            assert!(matches!(result, Err(SuiteError::AuthenticationFailed)));
        }

        // So does modifying the associated data
        let result = aead.open(&seq(7), &ciphertext, b"bad");
        assert!(matches!(result, Err(SuiteError::AuthenticationFailed)));
    }

    #[test]
    fn test_xor_nonce_roundtrip() {
        let key = vec![0x42u8; 32];
        let mask = vec![0xABu8; 12];
        let plaintext = b"xor nonce record";
        let aad = b"aad";

        let mut aead = aead_chacha20_poly1305(&key, &mask).unwrap();
        let ciphertext = aead.seal(&seq(5), plaintext, aad).unwrap();
        let decrypted = aead.open(&seq(5), &ciphertext, aad).unwrap();
        assert_eq!(&decrypted[..], plaintext);
    }

    #[test]
    fn test_xor_nonce_mask_restored_after_calls() {
        let key = vec![0x42u8; 16];
        let mask: Vec<u8> = (0u8..12).collect();

        let mut aead = match aead_aes_gcm_tls13(&key, &mask).unwrap() {
            TlsAead::Xor(inner) => inner,
            TlsAead::Prefix(_) => unreachable!(),
        };
        assert_eq!(&aead.nonce_mask[..], &mask[..]);

        let ciphertext = aead.seal(&seq(3), b"payload", b"").unwrap();
        assert_eq!(&aead.nonce_mask[..], &mask[..]);

        aead.open(&seq(3), &ciphertext, b"").unwrap();
        assert_eq!(&aead.nonce_mask[..], &mask[..]);

        // The mask survives a failed open too
        assert!(aead.open(&seq(4), &ciphertext, b"").is_err());
        assert_eq!(&aead.nonce_mask[..], &mask[..]);
    }

    #[test]
    fn test_xor_nonce_sequence_uniqueness() {
        let key = vec![0x42u8; 32];
        let mask = vec![0xCDu8; 12];
        let plaintext = b"identical plaintext";

        let mut aead = aead_chacha20_poly1305(&key, &mask).unwrap();
        let c1 = aead.seal(&seq(1), plaintext, b"").unwrap();
        let c2 = aead.seal(&seq(2), plaintext, b"").unwrap();
        assert_ne!(c1, c2);
    }

    #[test]
    fn test_explicit_nonce_len() {
        let key = vec![0x42u8; 16];
        let gcm12 = aead_aes_gcm(&key, &[0u8; 4]).unwrap();
        assert_eq!(gcm12.explicit_nonce_len(), 8);
        assert_eq!(gcm12.nonce_size(), 8);
        assert_eq!(gcm12.overhead(), 16);

        let gcm13 = aead_aes_gcm_tls13(&key, &[0u8; 12]).unwrap();
        assert_eq!(gcm13.explicit_nonce_len(), 0);

        let chacha = aead_chacha20_poly1305(&[0u8; 32], &[0u8; 12]).unwrap();
        assert_eq!(chacha.explicit_nonce_len(), 0);
    }

    #[test]
    fn test_wrong_fixed_nonce_length_rejected() {
        let key = vec![0x42u8; 16];
        assert!(matches!(
            aead_aes_gcm(&key, &[0u8; 12]),
            Err(SuiteError::Internal(_))
        ));
        assert!(matches!(
            aead_aes_gcm_tls13(&key, &[0u8; 4]),
            Err(SuiteError::Internal(_))
        ));
        assert!(matches!(
            aead_chacha20_poly1305(&[0u8; 32], &[0u8; 11]),
            Err(SuiteError::Internal(_))
        ));
    }

    #[test]
    fn test_wrong_key_length_rejected() {
        assert!(matches!(
            aead_aes_gcm(&[0u8; 24], &[0u8; 4]),
            Err(SuiteError::Internal(_))
        ));
        assert!(matches!(
            aead_chacha20_poly1305(&[0u8; 16], &[0u8; 12]),
            Err(SuiteError::Internal(_))
        ));
    }

    #[test]
    fn test_wrong_per_call_nonce_length_rejected() {
        let key = vec![0x42u8; 16];
        let mut aead = aead_aes_gcm(&key, &[0u8; 4]).unwrap();
        assert!(matches!(
            aead.seal(&[0u8; 12], b"data", b""),
            Err(SuiteError::Internal(_))
        ));
    }

    #[test]
    fn test_empty_plaintext() {
        let key = vec![0x42u8; 16];
        let mut aead = aead_aes_gcm_tls13(&key, &[0u8; 12]).unwrap();
        let ciphertext = aead.seal(&seq(0), b"", b"aad").unwrap();
        assert_eq!(ciphertext.len(), AEAD_TAG_SIZE);
        let decrypted = aead.open(&seq(0), &ciphertext, b"aad").unwrap();
        assert!(decrypted.is_empty());
    }
}
