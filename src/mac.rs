//! Record MAC adapters
//!
//! Two authentication schemes protect cipher-and-MAC records:
//!
//! - **Legacy scheme** (SSL 3.0 only):
//!   `H(key || pad2 || H(key || pad1 || seq || type || length || data))`
//!   with pad1 = 0x36 repeated and pad2 = 0x5c repeated. Deliberately not
//!   constant time; the protocol it serves is broken at a higher level
//!   regardless (POODLE), so no timing mitigation is attempted.
//!
//! - **TLS scheme**: HMAC over `seq || header || data`. The optional
//!   `filler` argument is hashed *after* the tag is finalized, so it never
//!   changes the output; it exists to equalize the number of processed
//!   bytes across records with different padding lengths and close the
//!   Lucky13-class timing channel in CBC decryption.

use hmac::{Hmac, Mac};
use sha1::{Digest, Sha1};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

const SSL30_PAD1: [u8; 48] = [0x36; 48];
const SSL30_PAD2: [u8; 48] = [0x5c; 48];

/// SSL 3.0 record MAC (SHA-1 based).
pub struct LegacyMac {
    key: Vec<u8>,
}

impl Drop for LegacyMac {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl LegacyMac {
    fn new(key: &[u8]) -> Self {
        Self { key: key.to_vec() }
    }

    /// MAC of (seq, record type, record length, data). The header's version
    /// bytes are skipped, matching the SSL 3.0 wire definition.
    fn mac(&self, seq: &[u8], header: &[u8], data: &[u8]) -> Vec<u8> {
        // 40 pad bytes for a 20-byte digest, 48 otherwise
        let pad_len = if Sha1::output_size() == 20 { 40 } else { 48 };

        let mut hash = Sha1::new();
        hash.update(&self.key);
        hash.update(&SSL30_PAD1[..pad_len]);
        hash.update(seq);
        hash.update(&header[..1]);
        hash.update(&header[3..5]);
        hash.update(data);
        let inner = hash.finalize();

        let mut hash = Sha1::new();
        hash.update(&self.key);
        hash.update(&SSL30_PAD2[..pad_len]);
        hash.update(inner);
        hash.finalize().to_vec()
    }
}

/// TLS record MAC: HMAC over `seq || header || data`.
///
/// Holds a pristine keyed context; each call clones it, so an instance is
/// reusable for the lifetime of its key epoch.
pub enum HmacMac {
    Sha1(HmacSha1),
    Sha256(HmacSha256),
}

impl HmacMac {
    fn sha1(key: &[u8]) -> Self {
        Self::Sha1(HmacSha1::new_from_slice(key).expect("HMAC can take key of any size"))
    }

    fn sha256(key: &[u8]) -> Self {
        Self::Sha256(HmacSha256::new_from_slice(key).expect("HMAC can take key of any size"))
    }

    fn mac(&self, seq: &[u8], header: &[u8], data: &[u8], filler: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha1(context) => {
                let mut mac = context.clone();
                mac.update(seq);
                mac.update(header);
                mac.update(data);
                let tag = mac.clone().finalize().into_bytes().to_vec();
                // Hashed after finalization: equalizes processed bytes
                // without affecting the tag.
                mac.update(filler);
                tag
            }
            Self::Sha256(context) => {
                let mut mac = context.clone();
                mac.update(seq);
                mac.update(header);
                mac.update(data);
                let tag = mac.clone().finalize().into_bytes().to_vec();
                mac.update(filler);
                tag
            }
        }
    }

    fn size(&self) -> usize {
        match self {
            Self::Sha1(_) => 20,
            Self::Sha256(_) => 32,
        }
    }
}

/// A bound record MAC for one traffic direction.
pub enum RecordMac {
    Legacy(LegacyMac),
    Hmac(HmacMac),
}

impl RecordMac {
    /// SSL 3.0 legacy MAC over SHA-1
    #[must_use]
    pub fn legacy_sha1(key: &[u8]) -> Self {
        Self::Legacy(LegacyMac::new(key))
    }

    /// TLS HMAC-SHA1 MAC
    #[must_use]
    pub fn hmac_sha1(key: &[u8]) -> Self {
        Self::Hmac(HmacMac::sha1(key))
    }

    /// TLS HMAC-SHA256 MAC
    #[must_use]
    pub fn hmac_sha256(key: &[u8]) -> Self {
        Self::Hmac(HmacMac::sha256(key))
    }

    /// Compute the MAC of a record.
    ///
    /// # Arguments
    /// * `seq` - 8-byte record sequence number
    /// * `header` - 5-byte record header (type, version, length)
    /// * `data` - record payload
    /// * `filler` - timing-equalization bytes; never changes the result
    #[must_use]
    pub fn mac(&self, seq: &[u8], header: &[u8], data: &[u8], filler: &[u8]) -> Vec<u8> {
        match self {
            Self::Legacy(mac) => mac.mac(seq, header, data),
            Self::Hmac(mac) => mac.mac(seq, header, data, filler),
        }
    }

    /// Length of the produced tag in bytes
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Legacy(_) => 20,
            Self::Hmac(mac) => mac.size(),
        }
    }
}

/// Constant-time tag comparison. Returns false for mismatched lengths.
#[must_use]
pub fn mac_equal(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
