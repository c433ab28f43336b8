//! asnwho - look up the ASN and network block that own an IP address
//!
//! This library resolves a hostname or IP literal to a concrete address,
//! then queries registry data for it: ASN origin fields over the Team Cymru
//! WHOIS service, enriched with network block details and lifecycle events
//! from the owning RIR's RDAP endpoint.

pub mod registry;
pub mod resolve;

// Re-export core types for library users
pub use registry::{
    AsnRecord, LookupConfig, LookupError, LookupResult, NetworkEvent, NetworkInfo, RegistryClient,
    NOT_AVAILABLE,
};
pub use resolve::{resolve_target, ResolveError, ResolvedTarget};
