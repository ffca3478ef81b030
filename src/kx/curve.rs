//! Ephemeral curve key pairs for ECDHE
//!
//! Supports X25519 (RFC 7748) and NIST P-256. Key pairs live for one
//! handshake; the shared secret is the raw X25519 output or the X
//! coordinate of the P-256 product, as TLS specifies.

use p256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};

use crate::error::{SuiteError, SuiteResult};

/// Named curve identifiers from the IANA TLS Supported Groups registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum CurveId {
    Secp256r1 = 0x0017,
    X25519 = 0x001d,
}

impl CurveId {
    /// Convert from wire format.
    #[must_use]
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x0017 => Some(Self::Secp256r1),
            0x001d => Some(Self::X25519),
            _ => None,
        }
    }

    /// Convert to wire format.
    #[must_use]
    pub fn to_u16(self) -> u16 {
        self as u16
    }
}

/// An ephemeral key pair on one of the supported curves.
pub enum EphemeralKeyPair {
    X25519(x25519_dalek::StaticSecret),
    P256(p256::SecretKey),
}

impl EphemeralKeyPair {
    /// Generate a fresh key pair on the given curve.
    #[must_use]
    pub fn generate(curve: CurveId) -> Self {
        let mut rng = rand::thread_rng();
        match curve {
            CurveId::X25519 => {
                Self::X25519(x25519_dalek::StaticSecret::random_from_rng(&mut rng))
            }
            CurveId::Secp256r1 => Self::P256(p256::SecretKey::random(&mut rng)),
        }
    }

    /// The curve this key pair lives on.
    #[must_use]
    pub fn curve(&self) -> CurveId {
        match self {
            Self::X25519(_) => CurveId::X25519,
            Self::P256(_) => CurveId::Secp256r1,
        }
    }

    /// Wire encoding of the public key: 32 raw bytes for X25519, an
    /// uncompressed SEC1 point (65 bytes) for P-256.
    #[must_use]
    pub fn public_bytes(&self) -> Vec<u8> {
        match self {
            Self::X25519(secret) => {
                x25519_dalek::PublicKey::from(secret).as_bytes().to_vec()
            }
            Self::P256(secret) => secret
                .public_key()
                .to_encoded_point(false)
                .as_bytes()
                .to_vec(),
        }
    }

    /// Compute the shared secret with a peer's wire-encoded public key.
    pub fn shared_secret(&self, peer_public: &[u8]) -> SuiteResult<Vec<u8>> {
        match self {
            Self::X25519(secret) => {
                let peer: [u8; 32] = peer_public.try_into().map_err(|_| {
                    SuiteError::malformed(format!(
                        "invalid X25519 public key length: {}",
                        peer_public.len()
                    ))
                })?;
                let peer = x25519_dalek::PublicKey::from(peer);
                Ok(secret.diffie_hellman(&peer).as_bytes().to_vec())
            }
            Self::P256(secret) => {
                let point = p256::EncodedPoint::from_bytes(peer_public)
                    .map_err(|_| SuiteError::malformed("invalid P-256 point encoding"))?;
                let peer = p256::PublicKey::from_encoded_point(&point);
                if peer.is_none().into() {
                    return Err(SuiteError::malformed("P-256 point is not on the curve"));
                }
                let peer = peer.unwrap();
                let shared = p256::ecdh::diffie_hellman(secret.to_nonzero_scalar(), peer.as_affine());
                Ok(shared.raw_secret_bytes().to_vec())
            }
        }
    }
}
