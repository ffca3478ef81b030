//! Plain RSA key agreement
//!
//! The client generates the 48-byte premaster secret (offered version in
//! the first two bytes, 46 random bytes after) and encrypts it under the
//! server's RSA key with PKCS#1 v1.5 padding. No ServerKeyExchange message
//! is used.

use rand::RngCore;
use rsa::Pkcs1v15Encrypt;
use zeroize::Zeroizing;

use super::{Certificate, ClientHelloParams, ClientKeyExchange, Config, PublicKey, ServerKeyExchange, SigningKey};
use crate::common::{PREMASTER_SECRET_SIZE, VERSION_SSL30};
use crate::error::{SuiteError, SuiteResult};

/// Plain RSA key agreement session. Stateless: nothing carries over
/// between the two calls on either side.
pub struct RsaKeyAgreement;

impl RsaKeyAgreement {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Plain RSA sends no ServerKeyExchange.
    pub fn generate_server_key_exchange(&mut self) -> SuiteResult<Option<ServerKeyExchange>> {
        Ok(None)
    }

    /// Decrypt the client's encrypted premaster secret.
    ///
    /// The returned secret is always `PREMASTER_SECRET_SIZE` bytes. When
    /// decryption fails (bad padding, wrong plaintext length) the random
    /// fallback secret is returned instead, on the same path: the peer
    /// learns nothing here and the connection fails a later integrity
    /// check. Only message framing errors, which are observable before any
    /// decryption, are reported directly.
    pub fn process_client_key_exchange(
        &mut self,
        _config: &Config,
        cert: &Certificate,
        ckx: &ClientKeyExchange,
        version: u16,
    ) -> SuiteResult<Vec<u8>> {
        let SigningKey::Rsa(private_key) = &cert.private_key else {
            return Err(SuiteError::internal(
                "cipher suite requires an RSA certificate key",
            ));
        };

        if ckx.body.len() < 2 {
            return Err(SuiteError::malformed("ClientKeyExchange too short"));
        }
        // SSL 3.0 carried the ciphertext bare; later versions prefix a
        // two-byte length that must span the rest of the message.
        let ciphertext = if version == VERSION_SSL30 {
            &ckx.body[..]
        } else {
            let declared = usize::from(u16::from_be_bytes([ckx.body[0], ckx.body[1]]));
            if declared != ckx.body.len() - 2 {
                return Err(SuiteError::malformed(
                    "ClientKeyExchange length prefix mismatch",
                ));
            }
            &ckx.body[2..]
        };

        let mut secret = vec![0u8; PREMASTER_SECRET_SIZE];
        rand::thread_rng().fill_bytes(&mut secret);

        // PKCS#1 v1.5 unpadding runs in constant time inside the rsa
        // crate. A failure leaves the random secret in place; the version
        // bytes are deliberately not checked, since acting on them would
        // reopen the padding oracle this path exists to close.
        if let Ok(plaintext) = private_key.decrypt(Pkcs1v15Encrypt, ciphertext) {
            let plaintext = Zeroizing::new(plaintext);
            if plaintext.len() == PREMASTER_SECRET_SIZE {
                secret.copy_from_slice(&plaintext);
            }
        }

        Ok(secret)
    }

    /// Plain RSA expects no ServerKeyExchange.
    pub fn process_server_key_exchange(&mut self, _skx: &ServerKeyExchange) -> SuiteResult<()> {
        Err(SuiteError::malformed(
            "unexpected ServerKeyExchange for RSA key agreement",
        ))
    }

    /// Build the premaster secret and its encryption for the server.
    pub fn generate_client_key_exchange(
        &mut self,
        client_hello: &ClientHelloParams,
        leaf_key: &PublicKey,
    ) -> SuiteResult<(Vec<u8>, ClientKeyExchange)> {
        let PublicKey::Rsa(server_key) = leaf_key else {
            return Err(SuiteError::internal(
                "cipher suite requires an RSA certificate key",
            ));
        };

        let mut premaster = vec![0u8; PREMASTER_SECRET_SIZE];
        premaster[0] = (client_hello.version >> 8) as u8;
        premaster[1] = client_hello.version as u8;
        rand::thread_rng().fill_bytes(&mut premaster[2..]);

        let ciphertext = server_key
            .encrypt(&mut rand::thread_rng(), Pkcs1v15Encrypt, &premaster)
            .map_err(|_| SuiteError::internal("RSA encryption failed"))?;

        let mut body = Vec::with_capacity(2 + ciphertext.len());
        body.extend_from_slice(&(ciphertext.len() as u16).to_be_bytes());
        body.extend_from_slice(&ciphertext);

        Ok((premaster, ClientKeyExchange { body }))
    }
}

impl Default for RsaKeyAgreement {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::VERSION_TLS12;

    fn test_certificate() -> Certificate {
        let private_key = rsa::RsaPrivateKey::new(&mut rand::thread_rng(), 1024).unwrap();
        Certificate::new(SigningKey::Rsa(private_key))
    }

    fn client_hello() -> ClientHelloParams {
        ClientHelloParams {
            random: [0x11; 32],
            supported_curves: vec![],
            version: VERSION_TLS12,
        }
    }

    #[test]
    fn test_roundtrip() {
        let cert = test_certificate();
        let SigningKey::Rsa(private_key) = &cert.private_key else {
            unreachable!()
        };
        let leaf_key = PublicKey::Rsa(private_key.to_public_key());
        let config = Config::default();

        let mut client = RsaKeyAgreement::new();
        let (client_secret, ckx) = client
            .generate_client_key_exchange(&client_hello(), &leaf_key)
            .unwrap();

        let mut server = RsaKeyAgreement::new();
        let server_secret = server
            .process_client_key_exchange(&config, &cert, &ckx, VERSION_TLS12)
            .unwrap();

        assert_eq!(client_secret, server_secret);
        assert_eq!(client_secret.len(), PREMASTER_SECRET_SIZE);
        assert_eq!(&client_secret[..2], &[0x03, 0x03]);
    }

    #[test]
    fn test_no_server_key_exchange() {
        let mut server = RsaKeyAgreement::new();
        assert!(server.generate_server_key_exchange().unwrap().is_none());

        let mut client = RsaKeyAgreement::new();
        let skx = ServerKeyExchange { body: vec![0u8; 4] };
        assert!(matches!(
            client.process_server_key_exchange(&skx),
            Err(SuiteError::MalformedExchangeMessage(_))
        ));
    }

    #[test]
    fn test_invalid_ciphertext_yields_fixed_length_secret() {
        let cert = test_certificate();
        let config = Config::default();
        let mut server = RsaKeyAgreement::new();

        // Correctly framed but structurally invalid ciphertext: random
        // bytes of the modulus length. Decryption fails internally, yet
        // the call succeeds with a 48-byte secret.
        let mut garbage = vec![0u8; 128];
        rand::thread_rng().fill_bytes(&mut garbage);
        garbage[0] = 0; // keep the value below the modulus
        let mut body = vec![0u8, 128];
        body.extend_from_slice(&garbage);
        let ckx = ClientKeyExchange { body };

        let secret = server
            .process_client_key_exchange(&config, &cert, &ckx, VERSION_TLS12)
            .unwrap();
        assert_eq!(secret.len(), PREMASTER_SECRET_SIZE);

        // A second run with the same input yields a different secret:
        // the fallback is freshly random, never derived from the input.
        let secret2 = server
            .process_client_key_exchange(&config, &cert, &ckx, VERSION_TLS12)
            .unwrap();
        assert_ne!(secret, secret2);
    }

    #[test]
    fn test_framing_errors_are_reported() {
        let cert = test_certificate();
        let config = Config::default();
        let mut server = RsaKeyAgreement::new();

        let short = ClientKeyExchange { body: vec![0x01] };
        assert!(matches!(
            server.process_client_key_exchange(&config, &cert, &short, VERSION_TLS12),
            Err(SuiteError::MalformedExchangeMessage(_))
        ));

        let bad_prefix = ClientKeyExchange {
            body: vec![0x00, 0xFF, 0x01, 0x02],
        };
        assert!(matches!(
            server.process_client_key_exchange(&config, &cert, &bad_prefix, VERSION_TLS12),
            Err(SuiteError::MalformedExchangeMessage(_))
        ));
    }

    #[test]
    fn test_ssl30_ciphertext_is_bare() {
        let cert = test_certificate();
        let SigningKey::Rsa(private_key) = &cert.private_key else {
            unreachable!()
        };
        let config = Config::default();

        let mut premaster = vec![0u8; PREMASTER_SECRET_SIZE];
        premaster[0] = 0x03;
        premaster[1] = 0x00;
        rand::thread_rng().fill_bytes(&mut premaster[2..]);
        let ciphertext = private_key
            .to_public_key()
            .encrypt(&mut rand::thread_rng(), Pkcs1v15Encrypt, &premaster)
            .unwrap();

        let mut server = RsaKeyAgreement::new();
        let secret = server
            .process_client_key_exchange(
                &config,
                &cert,
                &ClientKeyExchange { body: ciphertext },
                VERSION_SSL30,
            )
            .unwrap();
        assert_eq!(secret, premaster);
    }
}
