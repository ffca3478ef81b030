//! Handshake key agreement
//!
//! A [`KeyAgreement`] is a single-use, handshake-scoped session that
//! produces and consumes the key exchange messages of the negotiated suite.
//! Three variants exist: plain RSA (the client encrypts the premaster
//! secret under the server's key; no ServerKeyExchange is sent), and
//! ephemeral ECDH signed with either an RSA or an ECDSA certificate key.
//!
//! Call order is fixed. Server: `generate_server_key_exchange`, then
//! `process_client_key_exchange`. Client: `process_server_key_exchange`
//! (skipped for plain RSA), then `generate_client_key_exchange`. The
//! session is discarded afterwards.

mod curve;
mod ecdhe;
mod rsa_kx;
mod sign;

pub use curve::{CurveId, EphemeralKeyPair};
pub use ecdhe::EcdheKeyAgreement;
pub use rsa_kx::RsaKeyAgreement;
pub use sign::SignatureScheme;

use crate::error::SuiteResult;

/// Configuration inputs consumed by key agreement.
#[derive(Debug, Clone)]
pub struct Config {
    /// Supported curves, most preferred first
    pub curve_preferences: Vec<CurveId>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            curve_preferences: vec![CurveId::X25519, CurveId::Secp256r1],
        }
    }
}

/// Kind of an asymmetric key, used to match certificates against suites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Rsa,
    Ecdsa,
}

/// A server's certificate private key, already parsed by the caller.
pub enum SigningKey {
    Rsa(rsa::RsaPrivateKey),
    Ecdsa(p256::ecdsa::SigningKey),
}

impl SigningKey {
    #[must_use]
    pub fn kind(&self) -> KeyKind {
        match self {
            Self::Rsa(_) => KeyKind::Rsa,
            Self::Ecdsa(_) => KeyKind::Ecdsa,
        }
    }
}

/// The public key of a leaf certificate, already parsed by the caller.
pub enum PublicKey {
    Rsa(rsa::RsaPublicKey),
    Ecdsa(p256::ecdsa::VerifyingKey),
}

impl PublicKey {
    #[must_use]
    pub fn kind(&self) -> KeyKind {
        match self {
            Self::Rsa(_) => KeyKind::Rsa,
            Self::Ecdsa(_) => KeyKind::Ecdsa,
        }
    }
}

/// Server certificate material needed by key agreement.
pub struct Certificate {
    pub private_key: SigningKey,
}

impl Certificate {
    #[must_use]
    pub fn new(private_key: SigningKey) -> Self {
        Self { private_key }
    }
}

/// ClientHello fields consumed by key agreement.
#[derive(Debug, Clone)]
pub struct ClientHelloParams {
    pub random: [u8; 32],
    /// Curves the client advertised support for
    pub supported_curves: Vec<CurveId>,
    /// The client's offered protocol version (embedded in the RSA
    /// premaster secret)
    pub version: u16,
}

/// ServerHello fields consumed by key agreement.
#[derive(Debug, Clone)]
pub struct ServerHelloParams {
    pub random: [u8; 32],
}

/// An opaque ServerKeyExchange message body, RFC-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerKeyExchange {
    pub body: Vec<u8>,
}

/// An opaque ClientKeyExchange message body, RFC-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientKeyExchange {
    pub body: Vec<u8>,
}

/// A key agreement session. Created fresh per handshake via
/// [`crate::suites::CipherSuite::key_agreement`].
pub enum KeyAgreement {
    Rsa(RsaKeyAgreement),
    Ecdhe(EcdheKeyAgreement),
}

impl KeyAgreement {
    /// Server side, first call. Returns `None` when the key agreement does
    /// not use a ServerKeyExchange message (plain RSA). Fails only on
    /// signature engine failure, which is fatal.
    pub fn generate_server_key_exchange(
        &mut self,
        config: &Config,
        cert: &Certificate,
        client_hello: &ClientHelloParams,
        server_hello: &ServerHelloParams,
    ) -> SuiteResult<Option<ServerKeyExchange>> {
        match self {
            Self::Rsa(ka) => ka.generate_server_key_exchange(),
            Self::Ecdhe(ka) => {
                ka.generate_server_key_exchange(config, cert, client_hello, server_hello)
            }
        }
    }

    /// Server side, second call. Decodes the peer's exchange value and
    /// derives the shared secret.
    pub fn process_client_key_exchange(
        &mut self,
        config: &Config,
        cert: &Certificate,
        ckx: &ClientKeyExchange,
        version: u16,
    ) -> SuiteResult<Vec<u8>> {
        match self {
            Self::Rsa(ka) => ka.process_client_key_exchange(config, cert, ckx, version),
            Self::Ecdhe(ka) => ka.process_client_key_exchange(config, cert, ckx, version),
        }
    }

    /// Client side, first call. Not invoked when the server sends no
    /// ServerKeyExchange message. Validates the curve and the signature
    /// over the exchange parameters; any failure aborts the handshake.
    pub fn process_server_key_exchange(
        &mut self,
        config: &Config,
        client_hello: &ClientHelloParams,
        server_hello: &ServerHelloParams,
        leaf_key: &PublicKey,
        skx: &ServerKeyExchange,
    ) -> SuiteResult<()> {
        match self {
            Self::Rsa(ka) => ka.process_server_key_exchange(skx),
            Self::Ecdhe(ka) => {
                ka.process_server_key_exchange(config, client_hello, server_hello, leaf_key, skx)
            }
        }
    }

    /// Client side, second call. Returns the shared secret and the
    /// ClientKeyExchange message to put on the wire.
    pub fn generate_client_key_exchange(
        &mut self,
        config: &Config,
        client_hello: &ClientHelloParams,
        leaf_key: &PublicKey,
    ) -> SuiteResult<(Vec<u8>, ClientKeyExchange)> {
        match self {
            Self::Rsa(ka) => ka.generate_client_key_exchange(client_hello, leaf_key),
            Self::Ecdhe(ka) => ka.generate_client_key_exchange(config, client_hello, leaf_key),
        }
    }
}
