//! Cipher suite registry for TLS 1.3
//!
//! TLS 1.3 suites are AEAD-only and carry no capability flags or key
//! agreement kind: key exchange is negotiated separately, and every suite
//! pairs an AEAD with the transcript hash used by the external key
//! schedule (RFC 8446, Appendix B.4).

use std::fmt;

use crate::aead::{aead_aes_gcm_tls13, aead_chacha20_poly1305, TlsAead};
use crate::error::SuiteResult;
use crate::suites::AeadAlgorithm;

// =============================================================================
// IANA cipher suite identifiers (TLS 1.3)
// =============================================================================

pub const TLS_AES_128_GCM_SHA256: u16 = 0x1301;
pub const TLS_AES_256_GCM_SHA384: u16 = 0x1302;
pub const TLS_CHACHA20_POLY1305_SHA256: u16 = 0x1303;

/// Transcript hash algorithm for a TLS 1.3 suite.
///
/// Selected here, consumed by the external key schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
}

impl HashAlgorithm {
    /// Hash output length in bytes
    #[must_use]
    pub fn hash_len(&self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha384 => 48,
        }
    }
}

/// A TLS 1.3 cipher suite descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherSuiteTls13 {
    /// IANA-assigned identifier
    pub id: u16,
    /// AEAD key length in bytes
    pub key_len: usize,
    /// AEAD algorithm; all TLS 1.3 suites use the XOR nonce scheme
    pub aead_algorithm: AeadAlgorithm,
    /// Transcript hash for the key schedule
    pub hash: HashAlgorithm,
}

impl CipherSuiteTls13 {
    /// Standard name for this suite
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self.id {
            TLS_AES_128_GCM_SHA256 => "TLS_AES_128_GCM_SHA256",
            TLS_AES_256_GCM_SHA384 => "TLS_AES_256_GCM_SHA384",
            TLS_CHACHA20_POLY1305_SHA256 => "TLS_CHACHA20_POLY1305_SHA256",
            _ => "UNKNOWN",
        }
    }

    /// Instantiate the AEAD for one traffic direction.
    ///
    /// `nonce_mask` is the full 12-byte IV from the key schedule.
    pub fn aead(&self, key: &[u8], nonce_mask: &[u8]) -> SuiteResult<TlsAead> {
        match self.aead_algorithm {
            AeadAlgorithm::AesGcm => aead_aes_gcm_tls13(key, nonce_mask),
            AeadAlgorithm::ChaCha20Poly1305 => aead_chacha20_poly1305(key, nonce_mask),
        }
    }
}

impl fmt::Display for CipherSuiteTls13 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// All implemented TLS 1.3 suites, in preference order.
pub const CIPHER_SUITES_TLS13: &[CipherSuiteTls13] = &[
    CipherSuiteTls13 {
        id: TLS_AES_128_GCM_SHA256,
        key_len: 16,
        aead_algorithm: AeadAlgorithm::AesGcm,
        hash: HashAlgorithm::Sha256,
    },
    CipherSuiteTls13 {
        id: TLS_CHACHA20_POLY1305_SHA256,
        key_len: 32,
        aead_algorithm: AeadAlgorithm::ChaCha20Poly1305,
        hash: HashAlgorithm::Sha256,
    },
    CipherSuiteTls13 {
        id: TLS_AES_256_GCM_SHA384,
        key_len: 32,
        aead_algorithm: AeadAlgorithm::AesGcm,
        hash: HashAlgorithm::Sha384,
    },
];

/// Look up a TLS 1.3 suite descriptor by its IANA identifier.
#[must_use]
pub fn cipher_suite_tls13_by_id(id: u16) -> Option<&'static CipherSuiteTls13> {
    CIPHER_SUITES_TLS13.iter().find(|suite| suite.id == id)
}

/// Resolve `want` against a peer's list of acceptable TLS 1.3 identifiers.
#[must_use]
pub fn mutual_cipher_suite_tls13(have: &[u16], want: u16) -> Option<&'static CipherSuiteTls13> {
    if have.contains(&want) {
        cipher_suite_tls13_by_id(want)
    } else {
        None
    }
}
