//! Target resolution: classify user input as an IP literal or a hostname
//!
//! IP literals pass through untouched; anything else is treated as a
//! hostname and forward-resolved over DNS, first answer wins.

use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use std::net::IpAddr;
use std::sync::Arc;

/// Error type for target resolution
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Input is neither an IP literal nor a resolvable hostname
    #[error("{input} is neither a valid IP address nor a resolvable domain")]
    NotResolvable {
        /// The raw input that failed to resolve
        input: String,
    },
}

/// A lookup target resolved to a concrete address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// The address the registry lookup will run against
    pub address: IpAddr,
    /// True when the input was a hostname that required DNS resolution
    pub from_hostname: bool,
}

/// Resolve user input to an IP address.
///
/// Both IPv4 and IPv6 literals are accepted directly. Non-literal input is
/// forward-resolved with an A lookup, then an AAAA lookup; the first address
/// returned wins. A single resolution attempt is made, with no retries.
///
/// # Arguments
///
/// * `input` - Raw user input, an IP literal or a hostname
/// * `resolver` - Optional DNS resolver; a Cloudflare-config resolver is
///   built when none is given
///
/// # Errors
///
/// Returns [`ResolveError::NotResolvable`] when the input is not an IP
/// literal and DNS resolution yields no address.
pub async fn resolve_target(
    input: &str,
    resolver: Option<Arc<TokioResolver>>,
) -> Result<ResolvedTarget, ResolveError> {
    // Literals never touch DNS
    if let Ok(address) = input.parse::<IpAddr>() {
        return Ok(ResolvedTarget {
            address,
            from_hostname: false,
        });
    }

    let resolver = match resolver {
        Some(r) => r,
        None => Arc::new(create_default_resolver()),
    };

    if let Ok(lookup) = resolver.ipv4_lookup(input).await {
        if let Some(a) = lookup.iter().next() {
            return Ok(ResolvedTarget {
                address: IpAddr::V4(a.0),
                from_hostname: true,
            });
        }
    }

    if let Ok(lookup) = resolver.ipv6_lookup(input).await {
        if let Some(aaaa) = lookup.iter().next() {
            return Ok(ResolvedTarget {
                address: IpAddr::V6(aaaa.0),
                from_hostname: true,
            });
        }
    }

    Err(ResolveError::NotResolvable {
        input: input.to_string(),
    })
}

/// Create the default DNS resolver used when none is injected.
pub fn create_default_resolver() -> TokioResolver {
    TokioResolver::builder_with_config(
        ResolverConfig::cloudflare(),
        TokioConnectionProvider::default(),
    )
    .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[tokio::test]
    async fn test_ipv4_literal_passes_through() {
        let result = resolve_target("8.8.8.8", None).await.unwrap();
        assert_eq!(result.address, IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)));
        assert!(!result.from_hostname);
    }

    #[tokio::test]
    async fn test_ipv6_literal_passes_through() {
        let result = resolve_target("2001:4860:4860::8888", None).await.unwrap();
        assert_eq!(
            result.address,
            IpAddr::V6("2001:4860:4860::8888".parse::<Ipv6Addr>().unwrap())
        );
        assert!(!result.from_hostname);
    }

    #[tokio::test]
    async fn test_literal_resolution_is_idempotent() {
        let first = resolve_target("192.0.2.1", None).await.unwrap();
        let second = resolve_target("192.0.2.1", None).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_reserved_literal_not_rejected_here() {
        // Range validation belongs to the lookup stage, not resolution
        let result = resolve_target("127.0.0.1", None).await.unwrap();
        assert_eq!(result.address, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert!(!result.from_hostname);
    }

    #[tokio::test]
    async fn test_unresolvable_input_fails() {
        // .invalid is reserved and guaranteed not to resolve
        let result = resolve_target("not-a-real-host.invalid", None).await;
        match result {
            Err(ResolveError::NotResolvable { input }) => {
                assert_eq!(input, "not-a-real-host.invalid");
            }
            Ok(r) => panic!("Expected NotResolvable, got {:?}", r),
        }
    }

    #[tokio::test]
    async fn test_hostname_resolution() {
        // Live DNS; skip silently when the network is unavailable
        if let Ok(result) = resolve_target("dns.google", None).await {
            assert!(result.from_hostname);
        }
    }
}
