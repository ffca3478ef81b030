//! tls-suites: cipher suite registry and per-record crypto assembly
//!
//! This crate maps 16-bit TLS cipher suite identifiers to concrete
//! cryptographic machinery and drives the handshake key agreement. It
//! covers the security boundary of a TLS stack: nonce construction, MAC
//! input framing, constant-time verification and the Bleichenbacher
//! defense all live here. Handshake message framing, record
//! fragmentation, X.509 handling and the key schedule are external
//! collaborators.
//!
//! # Features
//!
//! - **Suite registries**: immutable TLS 1.0-1.2 and TLS 1.3 tables with
//!   IANA identifiers, lookup and mutual-suite resolution
//! - **AEAD adapters**: prefix-nonce (RFC 5288) and XOR-nonce (RFC 8446)
//!   record protection over AES-GCM and ChaCha20-Poly1305
//! - **MAC adapters**: the legacy SSL 3.0 scheme and HMAC with
//!   timing-equalizing padding filler
//! - **Key agreement**: plain RSA and ephemeral ECDH (RSA- or
//!   ECDSA-signed) handshake sessions
//! - **Selection policy**: server-side suite selection honoring the
//!   declarative capability flags
//!
//! # Quick Start
//!
//! ```
//! use tls_suites::suites::{cipher_suite_by_id, TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256};
//!
//! let suite = cipher_suite_by_id(TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256).unwrap();
//! let key = vec![0x42; suite.key_len];
//! let fixed_iv = vec![0x99; suite.iv_len];
//!
//! // One AEAD per traffic direction, bound to the derived key material
//! let mut write = suite.aead(&key, &fixed_iv).unwrap();
//! let mut read = suite.aead(&key, &fixed_iv).unwrap();
//!
//! let explicit_nonce = 1u64.to_be_bytes();
//! let record = write.seal(&explicit_nonce, b"application data", b"header").unwrap();
//! let plaintext = read.open(&explicit_nonce, &record, b"header").unwrap();
//! assert_eq!(plaintext, b"application data");
//! ```
//!
//! # Modules
//!
//! - [`suites`]: TLS 1.0-1.2 registry and descriptors
//! - [`tls13`]: TLS 1.3 registry
//! - [`aead`]: nonce-construction AEAD adapters
//! - [`cipher`]: bulk ciphers for cipher-and-MAC suites
//! - [`mac`]: record MAC adapters
//! - [`kx`]: handshake key agreement sessions
//! - [`policy`]: suite selection and flag gating
//! - [`error`]: error types

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod aead;
pub mod cipher;
pub mod common;
pub mod error;
pub mod kx;
pub mod mac;
pub mod policy;
pub mod suites;
pub mod tls13;

pub use aead::TlsAead;
pub use cipher::BulkCipher;
pub use error::{SuiteError, SuiteResult};
pub use kx::KeyAgreement;
pub use mac::RecordMac;
pub use suites::{cipher_suite_by_id, mutual_cipher_suite, CipherSuite, SuiteFlags};
pub use tls13::{cipher_suite_tls13_by_id, mutual_cipher_suite_tls13, CipherSuiteTls13};
