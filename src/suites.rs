//! Cipher suite registry for TLS 1.0 - 1.2
//!
//! Each suite descriptor bundles the IANA-assigned 16-bit identifier with
//! the key material lengths, the key agreement kind, capability flags, and
//! the record protection algorithms (either an AEAD, or a bulk cipher plus
//! a MAC - never both, never neither; the sum type makes the invariant
//! structural).
//!
//! The table is the wire contract: identifiers match the IANA TLS Cipher
//! Suite registry. It is built once at compile time, never mutated, and
//! safe for unsynchronized concurrent reads.

use std::fmt;

use crate::aead::{aead_aes_gcm, aead_chacha20_poly1305, TlsAead};
use crate::cipher::{new_aes_cbc, new_rc4, new_tdes_cbc, BulkCipher};
use crate::common::VERSION_SSL30;
use crate::error::{SuiteError, SuiteResult};
use crate::kx::{EcdheKeyAgreement, KeyAgreement, KeyKind, RsaKeyAgreement};
use crate::mac::RecordMac;

// =============================================================================
// IANA cipher suite identifiers (TLS 1.0 - 1.2)
// =============================================================================

pub const TLS_RSA_WITH_RC4_128_SHA: u16 = 0x0005;
pub const TLS_RSA_WITH_3DES_EDE_CBC_SHA: u16 = 0x000a;
pub const TLS_RSA_WITH_AES_128_CBC_SHA: u16 = 0x002f;
pub const TLS_RSA_WITH_AES_256_CBC_SHA: u16 = 0x0035;
pub const TLS_RSA_WITH_AES_128_CBC_SHA256: u16 = 0x003c;
pub const TLS_RSA_WITH_AES_128_GCM_SHA256: u16 = 0x009c;
pub const TLS_RSA_WITH_AES_256_GCM_SHA384: u16 = 0x009d;
pub const TLS_ECDHE_ECDSA_WITH_RC4_128_SHA: u16 = 0xc007;
pub const TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA: u16 = 0xc009;
pub const TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA: u16 = 0xc00a;
pub const TLS_ECDHE_RSA_WITH_RC4_128_SHA: u16 = 0xc011;
pub const TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA: u16 = 0xc012;
pub const TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA: u16 = 0xc013;
pub const TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA: u16 = 0xc014;
pub const TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256: u16 = 0xc023;
pub const TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256: u16 = 0xc027;
pub const TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256: u16 = 0xc02b;
pub const TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384: u16 = 0xc02c;
pub const TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256: u16 = 0xc02f;
pub const TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384: u16 = 0xc030;
pub const TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305: u16 = 0xcca8;
pub const TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305: u16 = 0xcca9;

/// Not a cipher suite: a client-side indicator that a lowered protocol
/// version is a deliberate fallback (RFC 7507).
pub const TLS_FALLBACK_SCSV: u16 = 0x5600;

// =============================================================================
// Capability flags
// =============================================================================

/// Descriptive capability flags for a suite.
///
/// Flags carry requirements; enforcement is the caller's responsibility
/// (see [`crate::policy`]). The registry itself never rejects a suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteFlags(u8);

impl SuiteFlags {
    pub const NONE: Self = Self(0);
    /// Requires an ephemeral ECDH exchange, and therefore a mutually
    /// supported curve.
    pub const ECDHE: Self = Self(1);
    /// Requires the server certificate key to be ECDSA; without this flag
    /// the suite is RSA based.
    pub const ECDSA: Self = Self(1 << 1);
    /// Only usable when the negotiated version is exactly TLS 1.2.
    pub const TLS12: Self = Self(1 << 2);
    /// The handshake hash for this suite is SHA-384.
    pub const SHA384: Self = Self(1 << 3);
    /// Not offered unless explicitly enabled by configuration.
    pub const DEFAULT_OFF: Self = Self(1 << 4);

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for SuiteFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

// =============================================================================
// Descriptor
// =============================================================================

/// Key agreement families implemented by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAgreementKind {
    /// Shared secret encrypted directly under the server's RSA key
    Rsa,
    /// Ephemeral ECDH signed with an RSA certificate key
    EcdheRsa,
    /// Ephemeral ECDH signed with an ECDSA certificate key
    EcdheEcdsa,
}

/// AEAD algorithms referenced by suite descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AeadAlgorithm {
    AesGcm,
    ChaCha20Poly1305,
}

/// Bulk cipher algorithms for cipher-and-MAC suites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAlgorithm {
    Rc4,
    AesCbc,
    TdesCbc,
}

/// MAC algorithms for cipher-and-MAC suites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacAlgorithm {
    Sha1,
    Sha256,
}

/// Record protection shape of a suite: an AEAD, or a bulk cipher with a
/// separate MAC. Exactly one, by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteCrypto {
    Aead(AeadAlgorithm),
    CipherMac {
        cipher: BulkAlgorithm,
        mac: MacAlgorithm,
    },
}

/// A cipher suite descriptor for TLS 1.0 - 1.2.
///
/// Immutable after table construction; one instance per known suite id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherSuite {
    /// IANA-assigned identifier
    pub id: u16,
    /// Symmetric key length in bytes
    pub key_len: usize,
    /// MAC key length in bytes (0 for AEAD suites)
    pub mac_len: usize,
    /// IV length (CBC) or fixed nonce length (GCM: 4, ChaCha20: 12)
    pub iv_len: usize,
    /// Key agreement family
    pub key_agreement: KeyAgreementKind,
    /// Descriptive capability flags
    pub flags: SuiteFlags,
    /// Record protection algorithms
    pub crypto: SuiteCrypto,
}

impl CipherSuite {
    /// Standard name for this suite
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self.id {
            TLS_RSA_WITH_RC4_128_SHA => "TLS_RSA_WITH_RC4_128_SHA",
            TLS_RSA_WITH_3DES_EDE_CBC_SHA => "TLS_RSA_WITH_3DES_EDE_CBC_SHA",
            TLS_RSA_WITH_AES_128_CBC_SHA => "TLS_RSA_WITH_AES_128_CBC_SHA",
            TLS_RSA_WITH_AES_256_CBC_SHA => "TLS_RSA_WITH_AES_256_CBC_SHA",
            TLS_RSA_WITH_AES_128_CBC_SHA256 => "TLS_RSA_WITH_AES_128_CBC_SHA256",
            TLS_RSA_WITH_AES_128_GCM_SHA256 => "TLS_RSA_WITH_AES_128_GCM_SHA256",
            TLS_RSA_WITH_AES_256_GCM_SHA384 => "TLS_RSA_WITH_AES_256_GCM_SHA384",
            TLS_ECDHE_ECDSA_WITH_RC4_128_SHA => "TLS_ECDHE_ECDSA_WITH_RC4_128_SHA",
            TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA => "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA",
            TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA => "TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA",
            TLS_ECDHE_RSA_WITH_RC4_128_SHA => "TLS_ECDHE_RSA_WITH_RC4_128_SHA",
            TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA => "TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA",
            TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA => "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA",
            TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA => "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA",
            TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256 => "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256",
            TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256 => "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256",
            TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256 => "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256",
            TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384 => "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384",
            TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256 => "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256",
            TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384 => "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384",
            TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305 => "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305",
            TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305 => "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305",
            _ => "UNKNOWN",
        }
    }

    /// Instantiate the AEAD for one traffic direction.
    ///
    /// `fixed_nonce` is the IV material from the key block; its expected
    /// length is this descriptor's `iv_len`.
    pub fn aead(&self, key: &[u8], fixed_nonce: &[u8]) -> SuiteResult<TlsAead> {
        match self.crypto {
            SuiteCrypto::Aead(AeadAlgorithm::AesGcm) => aead_aes_gcm(key, fixed_nonce),
            SuiteCrypto::Aead(AeadAlgorithm::ChaCha20Poly1305) => {
                aead_chacha20_poly1305(key, fixed_nonce)
            }
            SuiteCrypto::CipherMac { .. } => {
                Err(SuiteError::internal("not an AEAD cipher suite"))
            }
        }
    }

    /// Instantiate the bulk cipher for one traffic direction.
    pub fn bulk_cipher(&self, key: &[u8], iv: &[u8], for_reading: bool) -> SuiteResult<BulkCipher> {
        match self.crypto {
            SuiteCrypto::CipherMac { cipher: BulkAlgorithm::Rc4, .. } => new_rc4(key),
            SuiteCrypto::CipherMac { cipher: BulkAlgorithm::AesCbc, .. } => {
                new_aes_cbc(key, iv, for_reading)
            }
            SuiteCrypto::CipherMac { cipher: BulkAlgorithm::TdesCbc, .. } => {
                new_tdes_cbc(key, iv, for_reading)
            }
            SuiteCrypto::Aead(_) => {
                Err(SuiteError::internal("AEAD cipher suite has no bulk cipher"))
            }
        }
    }

    /// Instantiate the record MAC for one traffic direction.
    ///
    /// SHA-1 suites fall back to the legacy scheme at SSL 3.0; SHA-256
    /// suites exist only at TLS 1.2 and ignore the version.
    pub fn mac(&self, version: u16, key: &[u8]) -> SuiteResult<RecordMac> {
        match self.crypto {
            SuiteCrypto::CipherMac { mac: MacAlgorithm::Sha1, .. } => {
                if version == VERSION_SSL30 {
                    Ok(RecordMac::legacy_sha1(key))
                } else {
                    Ok(RecordMac::hmac_sha1(key))
                }
            }
            SuiteCrypto::CipherMac { mac: MacAlgorithm::Sha256, .. } => {
                Ok(RecordMac::hmac_sha256(key))
            }
            SuiteCrypto::Aead(_) => Err(SuiteError::internal("AEAD cipher suite has no MAC")),
        }
    }

    /// Create a fresh key agreement session for one handshake.
    #[must_use]
    pub fn key_agreement(&self, version: u16) -> KeyAgreement {
        match self.key_agreement {
            KeyAgreementKind::Rsa => KeyAgreement::Rsa(RsaKeyAgreement::new()),
            KeyAgreementKind::EcdheRsa => {
                KeyAgreement::Ecdhe(EcdheKeyAgreement::new(version, KeyKind::Rsa))
            }
            KeyAgreementKind::EcdheEcdsa => {
                KeyAgreement::Ecdhe(EcdheKeyAgreement::new(version, KeyKind::Ecdsa))
            }
        }
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::LowerHex for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.id, f)
    }
}

// =============================================================================
// The table
// =============================================================================

/// All implemented TLS 1.0 - 1.2 suites, in preference order: ECDHE before
/// plain RSA, AEADs first, RC4 last (and disabled by default).
pub const CIPHER_SUITES: &[CipherSuite] = &[
    CipherSuite {
        id: TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305,
        key_len: 32,
        mac_len: 0,
        iv_len: 12,
        key_agreement: KeyAgreementKind::EcdheRsa,
        flags: SuiteFlags::ECDHE.union(SuiteFlags::TLS12),
        crypto: SuiteCrypto::Aead(AeadAlgorithm::ChaCha20Poly1305),
    },
    CipherSuite {
        id: TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305,
        key_len: 32,
        mac_len: 0,
        iv_len: 12,
        key_agreement: KeyAgreementKind::EcdheEcdsa,
        flags: SuiteFlags::ECDHE.union(SuiteFlags::ECDSA).union(SuiteFlags::TLS12),
        crypto: SuiteCrypto::Aead(AeadAlgorithm::ChaCha20Poly1305),
    },
    CipherSuite {
        id: TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
        key_len: 16,
        mac_len: 0,
        iv_len: 4,
        key_agreement: KeyAgreementKind::EcdheRsa,
        flags: SuiteFlags::ECDHE.union(SuiteFlags::TLS12),
        crypto: SuiteCrypto::Aead(AeadAlgorithm::AesGcm),
    },
    CipherSuite {
        id: TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
        key_len: 16,
        mac_len: 0,
        iv_len: 4,
        key_agreement: KeyAgreementKind::EcdheEcdsa,
        flags: SuiteFlags::ECDHE.union(SuiteFlags::ECDSA).union(SuiteFlags::TLS12),
        crypto: SuiteCrypto::Aead(AeadAlgorithm::AesGcm),
    },
    CipherSuite {
        id: TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
        key_len: 32,
        mac_len: 0,
        iv_len: 4,
        key_agreement: KeyAgreementKind::EcdheRsa,
        flags: SuiteFlags::ECDHE.union(SuiteFlags::TLS12).union(SuiteFlags::SHA384),
        crypto: SuiteCrypto::Aead(AeadAlgorithm::AesGcm),
    },
    CipherSuite {
        id: TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
        key_len: 32,
        mac_len: 0,
        iv_len: 4,
        key_agreement: KeyAgreementKind::EcdheEcdsa,
        flags: SuiteFlags::ECDHE
            .union(SuiteFlags::ECDSA)
            .union(SuiteFlags::TLS12)
            .union(SuiteFlags::SHA384),
        crypto: SuiteCrypto::Aead(AeadAlgorithm::AesGcm),
    },
    CipherSuite {
        id: TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256,
        key_len: 16,
        mac_len: 32,
        iv_len: 16,
        key_agreement: KeyAgreementKind::EcdheRsa,
        flags: SuiteFlags::ECDHE.union(SuiteFlags::TLS12).union(SuiteFlags::DEFAULT_OFF),
        crypto: SuiteCrypto::CipherMac {
            cipher: BulkAlgorithm::AesCbc,
            mac: MacAlgorithm::Sha256,
        },
    },
    CipherSuite {
        id: TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA,
        key_len: 16,
        mac_len: 20,
        iv_len: 16,
        key_agreement: KeyAgreementKind::EcdheRsa,
        flags: SuiteFlags::ECDHE,
        crypto: SuiteCrypto::CipherMac {
            cipher: BulkAlgorithm::AesCbc,
            mac: MacAlgorithm::Sha1,
        },
    },
    CipherSuite {
        id: TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256,
        key_len: 16,
        mac_len: 32,
        iv_len: 16,
        key_agreement: KeyAgreementKind::EcdheEcdsa,
        flags: SuiteFlags::ECDHE
            .union(SuiteFlags::ECDSA)
            .union(SuiteFlags::TLS12)
            .union(SuiteFlags::DEFAULT_OFF),
        crypto: SuiteCrypto::CipherMac {
            cipher: BulkAlgorithm::AesCbc,
            mac: MacAlgorithm::Sha256,
        },
    },
    CipherSuite {
        id: TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA,
        key_len: 16,
        mac_len: 20,
        iv_len: 16,
        key_agreement: KeyAgreementKind::EcdheEcdsa,
        flags: SuiteFlags::ECDHE.union(SuiteFlags::ECDSA),
        crypto: SuiteCrypto::CipherMac {
            cipher: BulkAlgorithm::AesCbc,
            mac: MacAlgorithm::Sha1,
        },
    },
    CipherSuite {
        id: TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA,
        key_len: 32,
        mac_len: 20,
        iv_len: 16,
        key_agreement: KeyAgreementKind::EcdheRsa,
        flags: SuiteFlags::ECDHE,
        crypto: SuiteCrypto::CipherMac {
            cipher: BulkAlgorithm::AesCbc,
            mac: MacAlgorithm::Sha1,
        },
    },
    CipherSuite {
        id: TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA,
        key_len: 32,
        mac_len: 20,
        iv_len: 16,
        key_agreement: KeyAgreementKind::EcdheEcdsa,
        flags: SuiteFlags::ECDHE.union(SuiteFlags::ECDSA),
        crypto: SuiteCrypto::CipherMac {
            cipher: BulkAlgorithm::AesCbc,
            mac: MacAlgorithm::Sha1,
        },
    },
    CipherSuite {
        id: TLS_RSA_WITH_AES_128_GCM_SHA256,
        key_len: 16,
        mac_len: 0,
        iv_len: 4,
        key_agreement: KeyAgreementKind::Rsa,
        flags: SuiteFlags::TLS12,
        crypto: SuiteCrypto::Aead(AeadAlgorithm::AesGcm),
    },
    CipherSuite {
        id: TLS_RSA_WITH_AES_256_GCM_SHA384,
        key_len: 32,
        mac_len: 0,
        iv_len: 4,
        key_agreement: KeyAgreementKind::Rsa,
        flags: SuiteFlags::TLS12.union(SuiteFlags::SHA384),
        crypto: SuiteCrypto::Aead(AeadAlgorithm::AesGcm),
    },
    CipherSuite {
        id: TLS_RSA_WITH_AES_128_CBC_SHA256,
        key_len: 16,
        mac_len: 32,
        iv_len: 16,
        key_agreement: KeyAgreementKind::Rsa,
        flags: SuiteFlags::TLS12.union(SuiteFlags::DEFAULT_OFF),
        crypto: SuiteCrypto::CipherMac {
            cipher: BulkAlgorithm::AesCbc,
            mac: MacAlgorithm::Sha256,
        },
    },
    CipherSuite {
        id: TLS_RSA_WITH_AES_128_CBC_SHA,
        key_len: 16,
        mac_len: 20,
        iv_len: 16,
        key_agreement: KeyAgreementKind::Rsa,
        flags: SuiteFlags::NONE,
        crypto: SuiteCrypto::CipherMac {
            cipher: BulkAlgorithm::AesCbc,
            mac: MacAlgorithm::Sha1,
        },
    },
    CipherSuite {
        id: TLS_RSA_WITH_AES_256_CBC_SHA,
        key_len: 32,
        mac_len: 20,
        iv_len: 16,
        key_agreement: KeyAgreementKind::Rsa,
        flags: SuiteFlags::NONE,
        crypto: SuiteCrypto::CipherMac {
            cipher: BulkAlgorithm::AesCbc,
            mac: MacAlgorithm::Sha1,
        },
    },
    CipherSuite {
        id: TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA,
        key_len: 24,
        mac_len: 20,
        iv_len: 8,
        key_agreement: KeyAgreementKind::EcdheRsa,
        flags: SuiteFlags::ECDHE,
        crypto: SuiteCrypto::CipherMac {
            cipher: BulkAlgorithm::TdesCbc,
            mac: MacAlgorithm::Sha1,
        },
    },
    CipherSuite {
        id: TLS_RSA_WITH_3DES_EDE_CBC_SHA,
        key_len: 24,
        mac_len: 20,
        iv_len: 8,
        key_agreement: KeyAgreementKind::Rsa,
        flags: SuiteFlags::NONE,
        crypto: SuiteCrypto::CipherMac {
            cipher: BulkAlgorithm::TdesCbc,
            mac: MacAlgorithm::Sha1,
        },
    },
    // RC4-based suites are disabled by default.
    CipherSuite {
        id: TLS_RSA_WITH_RC4_128_SHA,
        key_len: 16,
        mac_len: 20,
        iv_len: 0,
        key_agreement: KeyAgreementKind::Rsa,
        flags: SuiteFlags::DEFAULT_OFF,
        crypto: SuiteCrypto::CipherMac {
            cipher: BulkAlgorithm::Rc4,
            mac: MacAlgorithm::Sha1,
        },
    },
    CipherSuite {
        id: TLS_ECDHE_RSA_WITH_RC4_128_SHA,
        key_len: 16,
        mac_len: 20,
        iv_len: 0,
        key_agreement: KeyAgreementKind::EcdheRsa,
        flags: SuiteFlags::ECDHE.union(SuiteFlags::DEFAULT_OFF),
        crypto: SuiteCrypto::CipherMac {
            cipher: BulkAlgorithm::Rc4,
            mac: MacAlgorithm::Sha1,
        },
    },
    CipherSuite {
        id: TLS_ECDHE_ECDSA_WITH_RC4_128_SHA,
        key_len: 16,
        mac_len: 20,
        iv_len: 0,
        key_agreement: KeyAgreementKind::EcdheEcdsa,
        flags: SuiteFlags::ECDHE.union(SuiteFlags::ECDSA).union(SuiteFlags::DEFAULT_OFF),
        crypto: SuiteCrypto::CipherMac {
            cipher: BulkAlgorithm::Rc4,
            mac: MacAlgorithm::Sha1,
        },
    },
];

// =============================================================================
// Lookup
// =============================================================================

/// Look up a suite descriptor by its IANA identifier.
#[must_use]
pub fn cipher_suite_by_id(id: u16) -> Option<&'static CipherSuite> {
    CIPHER_SUITES.iter().find(|suite| suite.id == id)
}

/// Resolve `want` against a peer's list of acceptable identifiers.
///
/// Returns the descriptor for `want` iff `want` appears in `have`.
/// Identifiers are unique, so the result does not depend on scan order.
#[must_use]
pub fn mutual_cipher_suite(have: &[u16], want: u16) -> Option<&'static CipherSuite> {
    if have.contains(&want) {
        cipher_suite_by_id(want)
    } else {
        None
    }
}
