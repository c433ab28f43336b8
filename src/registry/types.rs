//! Result types produced by a registry lookup

use serde::{Deserialize, Serialize};

/// Sentinel substituted when a registry omits a field.
pub const NOT_AVAILABLE: &str = "N/A";

/// ASN origin data for an IP address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsnRecord {
    /// Autonomous System Number without the "AS" prefix (e.g. "15169")
    pub asn: String,
    /// Announced BGP prefix covering the address (e.g. "8.8.8.0/24")
    pub asn_cidr: String,
    /// Two-letter country code for the allocation (e.g. "US")
    pub asn_country_code: String,
    /// Regional Internet Registry holding the allocation (e.g. "arin")
    pub asn_registry: String,
    /// AS name / operator description
    pub asn_description: String,
    /// Allocation date reported by the registry
    pub asn_date: String,
}

/// Network block details from the RDAP document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInfo {
    /// Registry-assigned network name
    pub name: String,
    /// First address of the block
    pub start_address: String,
    /// Last address of the block
    pub end_address: String,
    /// Country the block is registered in
    pub country: String,
    /// Allocation type (e.g. "DIRECT ALLOCATION", "ASSIGNED PA")
    #[serde(rename = "type")]
    pub kind: String,
    /// Remark text attached to the block
    pub description: String,
}

/// A registry-reported lifecycle event for the network block.
///
/// Events keep the order the registry returned them in; they are never
/// re-sorted by date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkEvent {
    /// Event action as reported (e.g. "registration", "last changed")
    pub action: String,
    /// Event date as reported, preserved verbatim
    pub date: String,
}

/// Complete result of a registry lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    /// ASN origin fields
    pub asn: AsnRecord,
    /// Network block details, when RDAP enrichment ran
    pub network: Option<NetworkInfo>,
    /// Lifecycle events in registry order
    pub events: Vec<NetworkEvent>,
}
