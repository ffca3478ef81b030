//! Signatures over ServerKeyExchange parameters
//!
//! The signature covers `client_random || server_random || params`. At
//! TLS 1.2 the chosen algorithm travels on the wire as a two-byte prefix;
//! earlier versions imply it from the certificate key type.

use p256::ecdsa::signature::{Signer, Verifier};
use rsa::Pkcs1v15Sign;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use super::{KeyKind, PublicKey, SigningKey};
use crate::common::VERSION_TLS12;
use crate::error::{SuiteError, SuiteResult};

/// Signature algorithms from the IANA TLS SignatureScheme registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum SignatureScheme {
    RsaPkcs1Sha1 = 0x0201,
    RsaPkcs1Sha256 = 0x0401,
    EcdsaSecp256r1Sha256 = 0x0403,
}

impl SignatureScheme {
    /// Convert from wire format.
    #[must_use]
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x0201 => Some(Self::RsaPkcs1Sha1),
            0x0401 => Some(Self::RsaPkcs1Sha256),
            0x0403 => Some(Self::EcdsaSecp256r1Sha256),
            _ => None,
        }
    }

    /// Convert to wire format.
    #[must_use]
    pub fn to_u16(self) -> u16 {
        self as u16
    }

    /// The certificate key kind this scheme requires.
    #[must_use]
    pub fn key_kind(self) -> KeyKind {
        match self {
            Self::RsaPkcs1Sha1 | Self::RsaPkcs1Sha256 => KeyKind::Rsa,
            Self::EcdsaSecp256r1Sha256 => KeyKind::Ecdsa,
        }
    }

    /// The scheme used for a certificate key kind at a protocol version.
    /// RSA drops to SHA-1 before TLS 1.2; ECDSA signs with SHA-256 at
    /// every version.
    #[must_use]
    pub fn for_key(kind: KeyKind, version: u16) -> Self {
        match kind {
            KeyKind::Rsa => {
                if version >= VERSION_TLS12 {
                    Self::RsaPkcs1Sha256
                } else {
                    Self::RsaPkcs1Sha1
                }
            }
            KeyKind::Ecdsa => Self::EcdsaSecp256r1Sha256,
        }
    }
}

fn signed_message(client_random: &[u8], server_random: &[u8], params: &[u8]) -> Vec<u8> {
    let mut message = Vec::with_capacity(client_random.len() + server_random.len() + params.len());
    message.extend_from_slice(client_random);
    message.extend_from_slice(server_random);
    message.extend_from_slice(params);
    message
}

/// Sign the ServerKeyExchange parameters with the certificate key.
pub fn sign_params(
    key: &SigningKey,
    scheme: SignatureScheme,
    client_random: &[u8],
    server_random: &[u8],
    params: &[u8],
) -> SuiteResult<Vec<u8>> {
    let message = signed_message(client_random, server_random, params);
    match (key, scheme) {
        (SigningKey::Rsa(private_key), SignatureScheme::RsaPkcs1Sha1) => {
            let digest = Sha1::digest(&message);
            private_key
                .sign(Pkcs1v15Sign::new::<Sha1>(), &digest)
                .map_err(|_| SuiteError::internal("RSA signing failed"))
        }
        (SigningKey::Rsa(private_key), SignatureScheme::RsaPkcs1Sha256) => {
            let digest = Sha256::digest(&message);
            private_key
                .sign(Pkcs1v15Sign::new::<Sha256>(), &digest)
                .map_err(|_| SuiteError::internal("RSA signing failed"))
        }
        (SigningKey::Ecdsa(private_key), SignatureScheme::EcdsaSecp256r1Sha256) => {
            let signature: p256::ecdsa::Signature = private_key.sign(&message);
            Ok(signature.to_der().as_bytes().to_vec())
        }
        _ => Err(SuiteError::internal(
            "certificate key type does not match signature scheme",
        )),
    }
}

/// Verify a signature over the ServerKeyExchange parameters.
pub fn verify_params(
    key: &PublicKey,
    scheme: SignatureScheme,
    client_random: &[u8],
    server_random: &[u8],
    params: &[u8],
    signature: &[u8],
) -> SuiteResult<()> {
    let message = signed_message(client_random, server_random, params);
    match (key, scheme) {
        (PublicKey::Rsa(public_key), SignatureScheme::RsaPkcs1Sha1) => {
            let digest = Sha1::digest(&message);
            public_key
                .verify(Pkcs1v15Sign::new::<Sha1>(), &digest, signature)
                .map_err(|_| SuiteError::SignatureVerificationFailed)
        }
        (PublicKey::Rsa(public_key), SignatureScheme::RsaPkcs1Sha256) => {
            let digest = Sha256::digest(&message);
            public_key
                .verify(Pkcs1v15Sign::new::<Sha256>(), &digest, signature)
                .map_err(|_| SuiteError::SignatureVerificationFailed)
        }
        (PublicKey::Ecdsa(public_key), SignatureScheme::EcdsaSecp256r1Sha256) => {
            let signature = p256::ecdsa::Signature::from_der(signature)
                .map_err(|_| SuiteError::malformed("invalid ECDSA signature encoding"))?;
            public_key
                .verify(&message, &signature)
                .map_err(|_| SuiteError::SignatureVerificationFailed)
        }
        _ => Err(SuiteError::unsupported(
            "signature scheme does not match certificate key type",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_roundtrip() {
        for scheme in [
            SignatureScheme::RsaPkcs1Sha1,
            SignatureScheme::RsaPkcs1Sha256,
            SignatureScheme::EcdsaSecp256r1Sha256,
        ] {
            assert_eq!(SignatureScheme::from_u16(scheme.to_u16()), Some(scheme));
        }
        assert_eq!(SignatureScheme::from_u16(0x0804), None); // rsa_pss_rsae_sha256
    }

    #[test]
    fn test_scheme_for_key() {
        assert_eq!(
            SignatureScheme::for_key(KeyKind::Rsa, 0x0303),
            SignatureScheme::RsaPkcs1Sha256
        );
        assert_eq!(
            SignatureScheme::for_key(KeyKind::Rsa, 0x0301),
            SignatureScheme::RsaPkcs1Sha1
        );
        assert_eq!(
            SignatureScheme::for_key(KeyKind::Ecdsa, 0x0301),
            SignatureScheme::EcdsaSecp256r1Sha256
        );
    }

    #[test]
    fn test_ecdsa_sign_verify() {
        let private_key = p256::ecdsa::SigningKey::random(&mut rand::thread_rng());
        let public_key = PublicKey::Ecdsa(*private_key.verifying_key());
        let key = SigningKey::Ecdsa(private_key);

        let cr = [0x11u8; 32];
        let sr = [0x22u8; 32];
        let params = b"ecdhe params";

        let scheme = SignatureScheme::EcdsaSecp256r1Sha256;
        let signature = sign_params(&key, scheme, &cr, &sr, params).unwrap();
        verify_params(&public_key, scheme, &cr, &sr, params, &signature).unwrap();

        // Any change to the signed content fails verification
        let result = verify_params(&public_key, scheme, &cr, &sr, b"other params", &signature);
        assert!(matches!(result, Err(SuiteError::SignatureVerificationFailed)));
    }

    #[test]
    fn test_rsa_sign_verify() {
        let private_key = rsa::RsaPrivateKey::new(&mut rand::thread_rng(), 1024).unwrap();
        let public_key = PublicKey::Rsa(private_key.to_public_key());
        let key = SigningKey::Rsa(private_key);

        let cr = [0x33u8; 32];
        let sr = [0x44u8; 32];
        let params = b"ecdhe params";

        for scheme in [SignatureScheme::RsaPkcs1Sha1, SignatureScheme::RsaPkcs1Sha256] {
            let signature = sign_params(&key, scheme, &cr, &sr, params).unwrap();
            verify_params(&public_key, scheme, &cr, &sr, params, &signature).unwrap();

            let result = verify_params(&public_key, scheme, &[0u8; 32], &sr, params, &signature);
            assert!(matches!(result, Err(SuiteError::SignatureVerificationFailed)));
        }
    }

    #[test]
    fn test_key_scheme_mismatch() {
        let private_key = p256::ecdsa::SigningKey::random(&mut rand::thread_rng());
        let key = SigningKey::Ecdsa(private_key);
        let result = sign_params(&key, SignatureScheme::RsaPkcs1Sha256, &[], &[], b"p");
        assert!(matches!(result, Err(SuiteError::Internal(_))));
    }
}
