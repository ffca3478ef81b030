//! Ephemeral ECDH key agreement with signed parameters
//!
//! The server generates an ephemeral key pair on a mutually supported
//! curve, signs the ECDH parameters together with both hello randoms
//! using its certificate key (RSA or ECDSA per the suite), and sends them
//! in a ServerKeyExchange message (RFC 4492 named-curve format). The
//! client verifies curve and signature, then answers with its own
//! ephemeral public key in the ClientKeyExchange.

use tracing::{debug, trace};

use super::curve::{CurveId, EphemeralKeyPair};
use super::sign::{sign_params, verify_params, SignatureScheme};
use super::{
    Certificate, ClientHelloParams, ClientKeyExchange, Config, KeyKind, PublicKey,
    ServerHelloParams, ServerKeyExchange,
};
use crate::common::VERSION_TLS12;
use crate::error::{SuiteError, SuiteResult};

/// Wire value for the named-curve ECDH parameter format (RFC 4492).
const CURVE_TYPE_NAMED: u8 = 3;

enum EcdheState {
    /// Server side, after the key exchange message is generated
    Server { keys: EphemeralKeyPair },
    /// Client side, after the server's parameters were accepted
    Client {
        curve: CurveId,
        peer_public: Vec<u8>,
    },
}

/// Ephemeral ECDH key agreement session for one handshake.
pub struct EcdheKeyAgreement {
    version: u16,
    key_kind: KeyKind,
    state: Option<EcdheState>,
}

impl EcdheKeyAgreement {
    /// `key_kind` selects the signature family the suite requires from the
    /// server certificate.
    #[must_use]
    pub fn new(version: u16, key_kind: KeyKind) -> Self {
        Self {
            version,
            key_kind,
            state: None,
        }
    }

    fn pick_curve(config: &Config, client_hello: &ClientHelloParams) -> Option<CurveId> {
        config
            .curve_preferences
            .iter()
            .copied()
            .find(|curve| client_hello.supported_curves.contains(curve))
    }

    /// Generate the ephemeral key pair and the signed ServerKeyExchange.
    pub fn generate_server_key_exchange(
        &mut self,
        config: &Config,
        cert: &Certificate,
        client_hello: &ClientHelloParams,
        server_hello: &ServerHelloParams,
    ) -> SuiteResult<Option<ServerKeyExchange>> {
        if cert.private_key.kind() != self.key_kind {
            return Err(SuiteError::internal(
                "certificate key type does not match cipher suite",
            ));
        }
        let curve = Self::pick_curve(config, client_hello).ok_or_else(|| {
            SuiteError::unsupported("no mutually supported curve for ECDHE")
        })?;
        debug!(curve = ?curve, "generating ephemeral ECDH key exchange");

        let keys = EphemeralKeyPair::generate(curve);
        let public = keys.public_bytes();

        let mut params = Vec::with_capacity(4 + public.len());
        params.push(CURVE_TYPE_NAMED);
        params.extend_from_slice(&curve.to_u16().to_be_bytes());
        params.push(public.len() as u8);
        params.extend_from_slice(&public);

        let scheme = SignatureScheme::for_key(self.key_kind, self.version);
        let signature = sign_params(
            &cert.private_key,
            scheme,
            &client_hello.random,
            &server_hello.random,
            &params,
        )?;

        let mut body = params;
        if self.version >= VERSION_TLS12 {
            body.extend_from_slice(&scheme.to_u16().to_be_bytes());
        }
        body.extend_from_slice(&(signature.len() as u16).to_be_bytes());
        body.extend_from_slice(&signature);

        self.state = Some(EcdheState::Server { keys });
        Ok(Some(ServerKeyExchange { body }))
    }

    /// Derive the shared secret from the client's ephemeral public key.
    pub fn process_client_key_exchange(
        &mut self,
        _config: &Config,
        _cert: &Certificate,
        ckx: &ClientKeyExchange,
        _version: u16,
    ) -> SuiteResult<Vec<u8>> {
        let Some(EcdheState::Server { keys }) = &self.state else {
            return Err(SuiteError::internal(
                "ServerKeyExchange was not generated first",
            ));
        };

        if ckx.body.is_empty() {
            return Err(SuiteError::malformed("empty ClientKeyExchange"));
        }
        let point_len = usize::from(ckx.body[0]);
        if ckx.body.len() != 1 + point_len {
            return Err(SuiteError::malformed(
                "ClientKeyExchange length prefix mismatch",
            ));
        }

        keys.shared_secret(&ckx.body[1..])
    }

    /// Validate the server's parameters: acceptable curve, well-formed
    /// point, and a correct signature over both randoms and the params.
    pub fn process_server_key_exchange(
        &mut self,
        config: &Config,
        client_hello: &ClientHelloParams,
        server_hello: &ServerHelloParams,
        leaf_key: &PublicKey,
        skx: &ServerKeyExchange,
    ) -> SuiteResult<()> {
        let body = &skx.body;
        if body.len() < 4 {
            return Err(SuiteError::malformed("ServerKeyExchange too short"));
        }
        if body[0] != CURVE_TYPE_NAMED {
            return Err(SuiteError::unsupported("only named curves are supported"));
        }
        let curve_value = u16::from_be_bytes([body[1], body[2]]);
        let curve = CurveId::from_u16(curve_value).ok_or_else(|| {
            SuiteError::unsupported(format!("unsupported curve 0x{curve_value:04x}"))
        })?;
        if !config.curve_preferences.contains(&curve) {
            return Err(SuiteError::unsupported(format!(
                "server chose a curve we did not offer: {curve:?}"
            )));
        }

        let point_len = usize::from(body[3]);
        let params_len = 4 + point_len;
        if body.len() < params_len {
            return Err(SuiteError::malformed("truncated ECDH point"));
        }
        let params = &body[..params_len];
        let peer_public = body[4..params_len].to_vec();

        let mut rest = &body[params_len..];
        let scheme = if self.version >= VERSION_TLS12 {
            if rest.len() < 2 {
                return Err(SuiteError::malformed("missing signature algorithm"));
            }
            let value = u16::from_be_bytes([rest[0], rest[1]]);
            rest = &rest[2..];
            let scheme = SignatureScheme::from_u16(value).ok_or_else(|| {
                SuiteError::unsupported(format!("unsupported signature scheme 0x{value:04x}"))
            })?;
            if scheme.key_kind() != self.key_kind {
                return Err(SuiteError::unsupported(
                    "signature scheme does not match the cipher suite",
                ));
            }
            scheme
        } else {
            SignatureScheme::for_key(self.key_kind, self.version)
        };

        if rest.len() < 2 {
            return Err(SuiteError::malformed("missing signature"));
        }
        let signature_len = usize::from(u16::from_be_bytes([rest[0], rest[1]]));
        let signature = &rest[2..];
        if signature.len() != signature_len {
            return Err(SuiteError::malformed("signature length mismatch"));
        }

        verify_params(
            leaf_key,
            scheme,
            &client_hello.random,
            &server_hello.random,
            params,
            signature,
        )?;
        trace!(curve = ?curve, "server key exchange verified");

        self.state = Some(EcdheState::Client { curve, peer_public });
        Ok(())
    }

    /// Generate the client's ephemeral key pair and derive the secret.
    pub fn generate_client_key_exchange(
        &mut self,
        _config: &Config,
        _client_hello: &ClientHelloParams,
        _leaf_key: &PublicKey,
    ) -> SuiteResult<(Vec<u8>, ClientKeyExchange)> {
        let Some(EcdheState::Client { curve, peer_public }) = &self.state else {
            return Err(SuiteError::internal(
                "ServerKeyExchange was not processed first",
            ));
        };

        let keys = EphemeralKeyPair::generate(*curve);
        let premaster = keys.shared_secret(peer_public)?;

        let public = keys.public_bytes();
        let mut body = Vec::with_capacity(1 + public.len());
        body.push(public.len() as u8);
        body.extend_from_slice(&public);

        Ok((premaster, ClientKeyExchange { body }))
    }
}
