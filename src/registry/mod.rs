//! ASN registry lookup (RDAP network data over WHOIS-backed origin data)

pub mod client;
pub mod error;
pub mod origin;
pub mod rdap;
pub mod reserved;
pub mod types;

pub use client::{LookupConfig, RegistryClient};
pub use error::LookupError;
pub use types::{AsnRecord, LookupResult, NetworkEvent, NetworkInfo, NOT_AVAILABLE};
