//! Error types for registry lookups

use std::net::IpAddr;
use thiserror::Error;

/// Errors that can occur during an ASN registry lookup
#[derive(Debug, Error)]
pub enum LookupError {
    /// The address sits in a reserved or special-use block
    ///
    /// Such blocks have no public registry attribution, so no query is
    /// attempted for them.
    #[error("{ip} is a reserved address ({reason})")]
    ReservedAddress {
        /// The queried address
        ip: IpAddr,
        /// Name of the special-use block (e.g. "loopback", "private network")
        reason: &'static str,
    },

    /// TCP or HTTP transport failure while talking to a registry
    #[error("network error: {0}")]
    Network(String),

    /// A configured deadline elapsed before the registry answered
    #[error("{stage} query timed out")]
    Timeout {
        /// The stage that hit its deadline ("whois" or "rdap")
        stage: &'static str,
    },

    /// Response did not match the expected WHOIS row or RDAP document shape
    #[error("malformed registry response: {0}")]
    MalformedResponse(String),

    /// The registry returned no origin data for the address
    #[error("no ASN data found for address")]
    NoAsnData,
}
