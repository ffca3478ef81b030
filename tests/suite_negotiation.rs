//! End-to-end negotiation tests: select a suite, run its key agreement
//! between a simulated client and server, then protect a record with the
//! primitives the descriptor hands out.

use tls_suites::common::{EXPLICIT_NONCE_SIZE, VERSION_TLS12};
use tls_suites::kx::{
    Certificate, ClientHelloParams, Config, CurveId, KeyKind, PublicKey, ServerHelloParams,
    SigningKey,
};
use tls_suites::mac::mac_equal;
use tls_suites::policy::{default_cipher_suite_ids, select_cipher_suite, SuitePolicy};
use tls_suites::suites::{
    cipher_suite_by_id, SuiteCrypto, TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305,
    TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256, TLS_RSA_WITH_AES_128_CBC_SHA,
};
use tls_suites::tls13::{mutual_cipher_suite_tls13, TLS_CHACHA20_POLY1305_SHA256};
use tls_suites::CipherSuite;

fn hellos() -> (ClientHelloParams, ServerHelloParams) {
    (
        ClientHelloParams {
            random: [0xA1; 32],
            supported_curves: vec![CurveId::X25519, CurveId::Secp256r1],
            version: VERSION_TLS12,
        },
        ServerHelloParams { random: [0xB2; 32] },
    )
}

/// Run the four-call key agreement for `suite` and return the shared
/// secret both sides computed.
fn agree(suite: &CipherSuite, cert: &Certificate, leaf_key: &PublicKey) -> Vec<u8> {
    let config = Config::default();
    let (client_hello, server_hello) = hellos();

    let mut server = suite.key_agreement(VERSION_TLS12);
    let mut client = suite.key_agreement(VERSION_TLS12);

    let skx = server
        .generate_server_key_exchange(&config, cert, &client_hello, &server_hello)
        .unwrap();
    if let Some(skx) = &skx {
        client
            .process_server_key_exchange(&config, &client_hello, &server_hello, leaf_key, skx)
            .unwrap();
    }
    let (client_secret, ckx) = client
        .generate_client_key_exchange(&config, &client_hello, leaf_key)
        .unwrap();
    let server_secret = server
        .process_client_key_exchange(&config, cert, &ckx, VERSION_TLS12)
        .unwrap();

    assert_eq!(client_secret, server_secret);
    client_secret
}

fn rsa_identity() -> (Certificate, PublicKey) {
    let private_key = rsa::RsaPrivateKey::new(&mut rand::thread_rng(), 1024).unwrap();
    let public_key = PublicKey::Rsa(private_key.to_public_key());
    (Certificate::new(SigningKey::Rsa(private_key)), public_key)
}

fn ecdsa_identity() -> (Certificate, PublicKey) {
    let private_key = p256::ecdsa::SigningKey::random(&mut rand::thread_rng());
    let public_key = PublicKey::Ecdsa(*private_key.verifying_key());
    (Certificate::new(SigningKey::Ecdsa(private_key)), public_key)
}

#[test]
fn ecdhe_rsa_gcm_end_to_end() {
    let (cert, leaf_key) = rsa_identity();

    let policy = SuitePolicy {
        version: VERSION_TLS12,
        cert_key: KeyKind::Rsa,
        has_mutual_curve: true,
        allow_default_off: false,
    };
    let offered = vec![TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256];
    let suite = select_cipher_suite(&offered, &default_cipher_suite_ids(), &policy).unwrap();
    assert_eq!(suite.id, TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256);

    let secret = agree(suite, &cert, &leaf_key);
    assert!(!secret.is_empty());

    // Pretend the external key schedule produced these from the secret.
    let key = vec![0x5A; suite.key_len];
    let fixed_iv = vec![0x1B; suite.iv_len];
    let mut client_write = suite.aead(&key, &fixed_iv).unwrap();
    let mut server_read = suite.aead(&key, &fixed_iv).unwrap();

    assert_eq!(client_write.explicit_nonce_len(), EXPLICIT_NONCE_SIZE);
    let nonce = 42u64.to_be_bytes();
    let record = client_write.seal(&nonce, b"GET / HTTP/1.1", b"aad").unwrap();
    let plaintext = server_read.open(&nonce, &record, b"aad").unwrap();
    assert_eq!(plaintext, b"GET / HTTP/1.1");
}

#[test]
fn ecdhe_ecdsa_chacha20_end_to_end() {
    let (cert, leaf_key) = ecdsa_identity();

    let policy = SuitePolicy {
        version: VERSION_TLS12,
        cert_key: KeyKind::Ecdsa,
        has_mutual_curve: true,
        allow_default_off: false,
    };
    let offered = vec![TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305];
    let suite = select_cipher_suite(&offered, &default_cipher_suite_ids(), &policy).unwrap();
    assert_eq!(suite.id, TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305);

    agree(suite, &cert, &leaf_key);

    let key = vec![0x5A; suite.key_len];
    let nonce_mask = vec![0x1B; suite.iv_len];
    let mut write = suite.aead(&key, &nonce_mask).unwrap();
    let mut read = suite.aead(&key, &nonce_mask).unwrap();

    assert_eq!(write.explicit_nonce_len(), 0);
    let seq = 7u64.to_be_bytes();
    let record = write.seal(&seq, b"encrypted alert", b"hdr").unwrap();
    assert_eq!(read.open(&seq, &record, b"hdr").unwrap(), b"encrypted alert");
}

#[test]
fn plain_rsa_cbc_sha_end_to_end() {
    let (cert, leaf_key) = rsa_identity();

    let suite = cipher_suite_by_id(TLS_RSA_WITH_AES_128_CBC_SHA).unwrap();
    assert!(matches!(suite.crypto, SuiteCrypto::CipherMac { .. }));

    let secret = agree(suite, &cert, &leaf_key);
    assert_eq!(secret.len(), 48);

    // Cipher + MAC record protection, one instance per direction.
    let key = vec![0x5A; suite.key_len];
    let iv = vec![0x1B; suite.iv_len];
    let mac_key = vec![0x0C; suite.mac_len];

    let write_mac = suite.mac(VERSION_TLS12, &mac_key).unwrap();
    let read_mac = suite.mac(VERSION_TLS12, &mac_key).unwrap();
    let mut write_cipher = suite.bulk_cipher(&key, &iv, false).unwrap();
    let mut read_cipher = suite.bulk_cipher(&key, &iv, true).unwrap();

    let seq = 3u64.to_be_bytes();
    let payload = b"application payload";
    let header = [0x17, 0x03, 0x03, 0x00, payload.len() as u8];
    let tag = write_mac.mac(&seq, &header, payload, &[]);
    assert_eq!(tag.len(), suite.mac_len);

    // payload || MAC || padding, padded to the block size
    let block_size = write_cipher.block_size();
    let mut record = payload.to_vec();
    record.extend_from_slice(&tag);
    let padding = block_size - (record.len() % block_size);
    record.extend(std::iter::repeat((padding - 1) as u8).take(padding));

    write_cipher.apply_in_place(&mut record).unwrap();
    read_cipher.apply_in_place(&mut record).unwrap();

    let padding = usize::from(*record.last().unwrap()) + 1;
    let mac_start = record.len() - padding - suite.mac_len;
    let received_tag = &record[mac_start..mac_start + suite.mac_len];
    let received_payload = &record[..mac_start];

    let filler = vec![0u8; padding];
    let expected = read_mac.mac(&seq, &header, received_payload, &filler);
    assert!(mac_equal(&expected, received_tag));
    assert_eq!(received_payload, payload);
}

#[test]
fn tls13_resolution_and_record_protection() {
    let offered = vec![TLS_CHACHA20_POLY1305_SHA256];
    let suite = mutual_cipher_suite_tls13(&offered, TLS_CHACHA20_POLY1305_SHA256).unwrap();

    let key = vec![0x42; suite.key_len];
    let iv = vec![0x24; 12];
    let mut write = suite.aead(&key, &iv).unwrap();
    let mut read = suite.aead(&key, &iv).unwrap();

    for sequence in 0u64..4 {
        let seq = sequence.to_be_bytes();
        let record = write.seal(&seq, b"handshake flight", b"\x17\x03\x03\x00\x20").unwrap();
        let plaintext = read.open(&seq, &record, b"\x17\x03\x03\x00\x20").unwrap();
        assert_eq!(plaintext, b"handshake flight");
    }
}
