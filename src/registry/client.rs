//! Registry lookup client
//!
//! Runs the WHOIS origin stage and the RDAP enrichment stage in order,
//! each under its own configured deadline. Reserved addresses are refused
//! before any connection is opened.

use super::error::LookupError;
use super::origin::{whois_origin, DEFAULT_WHOIS_SERVER};
use super::rdap::{fetch_network, rdap_base_url};
use super::reserved::special_use_name;
use super::types::LookupResult;
use std::net::IpAddr;
use std::time::Duration;

/// Default deadline for each network stage in milliseconds
pub const DEFAULT_STAGE_TIMEOUT_MS: u64 = 5000;

/// Configuration for a registry lookup client.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// WHOIS endpoint queried for ASN origin data, as `host:port`
    pub whois_server: String,
    /// Override for the RDAP base URL; `None` selects the per-registry
    /// endpoint from the origin data
    pub rdap_base: Option<String>,
    /// Deadline for the WHOIS stage
    pub whois_timeout: Duration,
    /// Deadline for the RDAP stage
    pub rdap_timeout: Duration,
    /// Skip RDAP enrichment entirely (origin data only)
    pub skip_rdap: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            whois_server: DEFAULT_WHOIS_SERVER.to_string(),
            rdap_base: None,
            whois_timeout: Duration::from_millis(DEFAULT_STAGE_TIMEOUT_MS),
            rdap_timeout: Duration::from_millis(DEFAULT_STAGE_TIMEOUT_MS),
            skip_rdap: false,
        }
    }
}

/// ASN registry lookup client
///
/// Every call performs live network queries; results are not cached.
///
/// # Examples
///
/// ```no_run
/// use asnwho::registry::RegistryClient;
/// use std::net::IpAddr;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = RegistryClient::new();
///
///     let ip: IpAddr = "8.8.8.8".parse()?;
///     let result = client.lookup(ip).await?;
///
///     println!("AS{}: {}", result.asn.asn, result.asn.asn_description);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegistryClient {
    config: LookupConfig,
}

impl RegistryClient {
    /// Create a client with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client with a specific configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoints and deadlines to use for each stage
    pub fn with_config(config: LookupConfig) -> Self {
        Self { config }
    }

    /// Look up ASN and network block data for an address.
    ///
    /// The address is expected to be already resolved; no re-validation is
    /// performed beyond the reserved-block screen.
    ///
    /// # Arguments
    ///
    /// * `ip` - The address to look up
    ///
    /// # Errors
    ///
    /// [`LookupError::ReservedAddress`] for special-use blocks; otherwise
    /// whichever [`LookupError`] the failing stage produced.
    pub async fn lookup(&self, ip: IpAddr) -> Result<LookupResult, LookupError> {
        if let Some(reason) = special_use_name(&ip) {
            return Err(LookupError::ReservedAddress { ip, reason });
        }

        let asn = whois_origin(&self.config.whois_server, ip, self.config.whois_timeout).await?;

        if self.config.skip_rdap {
            return Ok(LookupResult {
                asn,
                network: None,
                events: Vec::new(),
            });
        }

        let base = self
            .config
            .rdap_base
            .as_deref()
            .unwrap_or_else(|| rdap_base_url(&asn.asn_registry));
        let (network, events) = fetch_network(base, ip, self.config.rdap_timeout).await?;

        Ok(LookupResult {
            asn,
            network: Some(network),
            events,
        })
    }
}
