//! Server-side cipher suite selection
//!
//! The registry only describes suites; the checks its capability flags
//! call for live here. A suite is usable when:
//!
//! - an ECDHE flag is backed by a mutually supported curve,
//! - an ECDSA flag is backed by an ECDSA certificate key (RSA otherwise),
//! - a TLS 1.2 flag matches a negotiated version of exactly TLS 1.2,
//! - a default-off flag is backed by explicit opt-in from configuration.

use tracing::{debug, trace};

use crate::common::VERSION_TLS12;
use crate::kx::KeyKind;
use crate::suites::{cipher_suite_by_id, CipherSuite, SuiteFlags, CIPHER_SUITES};

/// The negotiated facts a suite is checked against.
#[derive(Debug, Clone)]
pub struct SuitePolicy {
    /// The negotiated protocol version
    pub version: u16,
    /// Kind of the server certificate key
    pub cert_key: KeyKind,
    /// Whether a mutually supported curve was negotiated
    pub has_mutual_curve: bool,
    /// Whether configuration explicitly enabled default-off suites
    pub allow_default_off: bool,
}

/// Check a descriptor's flags against the negotiated facts.
#[must_use]
pub fn suite_usable(suite: &CipherSuite, policy: &SuitePolicy) -> bool {
    if suite.flags.contains(SuiteFlags::ECDHE) && !policy.has_mutual_curve {
        trace!(suite = %suite, "skipping: no mutually supported curve");
        return false;
    }
    if suite.flags.contains(SuiteFlags::ECDSA) {
        if policy.cert_key != KeyKind::Ecdsa {
            trace!(suite = %suite, "skipping: certificate key is not ECDSA");
            return false;
        }
    } else if policy.cert_key != KeyKind::Rsa {
        trace!(suite = %suite, "skipping: certificate key is not RSA");
        return false;
    }
    if suite.flags.contains(SuiteFlags::TLS12) && policy.version != VERSION_TLS12 {
        trace!(suite = %suite, "skipping: requires TLS 1.2");
        return false;
    }
    if suite.flags.contains(SuiteFlags::DEFAULT_OFF) && !policy.allow_default_off {
        trace!(suite = %suite, "skipping: disabled by default");
        return false;
    }
    true
}

/// Pick the first suite from `supported` (in preference order) that the
/// peer offered and that passes the policy checks.
#[must_use]
pub fn select_cipher_suite(
    offered: &[u16],
    supported: &[u16],
    policy: &SuitePolicy,
) -> Option<&'static CipherSuite> {
    for &id in supported {
        if !offered.contains(&id) {
            continue;
        }
        let Some(suite) = cipher_suite_by_id(id) else {
            continue;
        };
        if suite_usable(suite, policy) {
            debug!(suite = %suite, "selected cipher suite");
            return Some(suite);
        }
    }
    None
}

/// Identifiers of the suites offered by default, in table preference
/// order. Default-off suites (RC4, the CBC-SHA256 pairings) are excluded.
#[must_use]
pub fn default_cipher_suite_ids() -> Vec<u16> {
    CIPHER_SUITES
        .iter()
        .filter(|suite| !suite.flags.contains(SuiteFlags::DEFAULT_OFF))
        .map(|suite| suite.id)
        .collect()
}
