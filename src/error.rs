//! Error types for cipher suite negotiation and record protection
//!
//! Every error produced by this crate is fatal to the handshake or the
//! connection, with one exception: a cipher suite lookup miss, which the
//! caller's negotiation loop consumes by moving to the next candidate.
//! Decryption and signature failures never carry the underlying reason
//! beyond the coarse error kind.

use thiserror::Error;

/// Cipher suite and record protection errors
#[derive(Debug, Error)]
pub enum SuiteError {
    /// Cipher suite id not present in the registry
    #[error("Unknown cipher suite: 0x{0:04x}")]
    UnknownCipherSuite(u16),

    /// Key exchange message failed to decode
    #[error("Malformed key exchange message: {0}")]
    MalformedExchangeMessage(String),

    /// Curve or signature algorithm not supported by this side
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Signature over the key exchange parameters did not verify
    #[error("Signature verification failed")]
    SignatureVerificationFailed,

    /// AEAD or MAC tag mismatch on a record
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Programmer error: a constructor or operation was handed material of
    /// the wrong shape. Not reachable under correct use.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SuiteError {
    /// Check whether this error is an ordinary negotiation miss
    ///
    /// A lookup miss lets the caller try the next candidate suite. Every
    /// other error in this crate terminates the handshake or connection;
    /// retrying a cryptographic failure has no corrective value.
    #[must_use]
    pub fn is_negotiation_miss(&self) -> bool {
        matches!(self, Self::UnknownCipherSuite(_))
    }

    /// Create a malformed exchange message error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedExchangeMessage(msg.into())
    }

    /// Create an unsupported algorithm error
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Type alias for Result with `SuiteError`
pub type SuiteResult<T> = std::result::Result<T, SuiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SuiteError::UnknownCipherSuite(0x1234);
        assert!(err.to_string().contains("0x1234"));

        let err = SuiteError::malformed("truncated point");
        assert!(err.to_string().contains("Malformed key exchange message"));
        assert!(err.to_string().contains("truncated point"));

        let err = SuiteError::AuthenticationFailed;
        assert_eq!(err.to_string(), "Authentication failed");
    }

    #[test]
    fn test_negotiation_miss_classification() {
        assert!(SuiteError::UnknownCipherSuite(0x0005).is_negotiation_miss());

        assert!(!SuiteError::SignatureVerificationFailed.is_negotiation_miss());
        assert!(!SuiteError::AuthenticationFailed.is_negotiation_miss());
        assert!(!SuiteError::malformed("x").is_negotiation_miss());
        assert!(!SuiteError::unsupported("x").is_negotiation_miss());
        assert!(!SuiteError::internal("x").is_negotiation_miss());
    }
}
