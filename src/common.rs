//! Protocol constants shared across the crate
//!
//! This module defines the wire-encoded protocol version values this layer
//! branches on, and the fixed lengths used by record protection and key
//! agreement.

// =============================================================================
// Protocol version constants (wire-encoded major/minor pairs)
// =============================================================================

/// SSL 3.0 (0x0300) - only the legacy record MAC is supported at this version
pub const VERSION_SSL30: u16 = 0x0300;

/// TLS 1.0 (0x0301)
pub const VERSION_TLS10: u16 = 0x0301;

/// TLS 1.1 (0x0302)
pub const VERSION_TLS11: u16 = 0x0302;

/// TLS 1.2 (0x0303)
pub const VERSION_TLS12: u16 = 0x0303;

/// TLS 1.3 (0x0304)
pub const VERSION_TLS13: u16 = 0x0304;

// =============================================================================
// Record protection lengths
// =============================================================================

/// Full AEAD nonce length in bytes (RFC 5116)
pub const AEAD_NONCE_SIZE: usize = 12;

/// Fixed (implicit) nonce prefix length for pre-TLS-1.3 GCM suites
pub const NONCE_PREFIX_SIZE: usize = 4;

/// Explicit per-record nonce length carried on the wire by prefix-nonce
/// suites, and the sequence-number length fed to XOR-nonce suites
pub const EXPLICIT_NONCE_SIZE: usize = 8;

/// AEAD authentication tag length (16 for GCM and Poly1305)
pub const AEAD_TAG_SIZE: usize = 16;

/// Record header length fed into the record MAC (type + version + length)
pub const RECORD_HEADER_SIZE: usize = 5;

// =============================================================================
// Key agreement lengths
// =============================================================================

/// Length of the RSA-exchanged premaster secret: version(2) || random(46)
pub const PREMASTER_SECRET_SIZE: usize = 48;
