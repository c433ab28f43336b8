//! RDAP network enrichment
//!
//! Once the WHOIS stage has pinned down the owning registry, the RIR's RDAP
//! endpoint supplies network block details and lifecycle events. The RDAP
//! response for an `/ip/` query is an IP network object; only the fields
//! reported by the lookup are deserialized.

use super::error::LookupError;
use super::types::{NetworkEvent, NetworkInfo, NOT_AVAILABLE};
use serde::Deserialize;
use std::net::IpAddr;
use std::time::Duration;

/// Returns the RDAP base URL for a registry name.
///
/// Unknown registries fall back to the rdap.org redirector, which bootstraps
/// to the right RIR.
pub fn rdap_base_url(registry: &str) -> &'static str {
    match registry {
        "arin" => "https://rdap.arin.net/registry",
        "ripencc" => "https://rdap.db.ripe.net",
        "apnic" => "https://rdap.apnic.net",
        "lacnic" => "https://rdap.lacnic.net/rdap",
        "afrinic" => "https://rdap.afrinic.net/rdap",
        _ => "https://rdap.org",
    }
}

/// Wire shape of an RDAP IP network document (only the extracted fields)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RdapDocument {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    start_address: Option<String>,
    #[serde(default)]
    end_address: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    remarks: Vec<RdapRemark>,
    #[serde(default)]
    events: Vec<RdapEvent>,
}

#[derive(Debug, Deserialize)]
struct RdapRemark {
    #[serde(default)]
    description: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RdapEvent {
    #[serde(default)]
    event_action: Option<String>,
    #[serde(default)]
    event_date: Option<String>,
}

/// Fetch and decode the RDAP network document for `ip`.
///
/// # Arguments
///
/// * `base` - RDAP base URL, normally from [`rdap_base_url`]
/// * `ip` - The address to query
/// * `timeout` - Deadline for the whole HTTP exchange
///
/// # Errors
///
/// [`LookupError::Timeout`] when the deadline elapses, [`LookupError::Network`]
/// on transport failure or a non-success HTTP status, and
/// [`LookupError::MalformedResponse`] when the body is not a decodable RDAP
/// document.
pub async fn fetch_network(
    base: &str,
    ip: IpAddr,
    timeout: Duration,
) -> Result<(NetworkInfo, Vec<NetworkEvent>), LookupError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LookupError::Network(e.to_string()))?;

    let url = format!("{base}/ip/{ip}");
    let response = client
        .get(&url)
        .header("Accept", "application/rdap+json")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout { stage: "rdap" }
            } else {
                LookupError::Network(e.to_string())
            }
        })?;

    if !response.status().is_success() {
        return Err(LookupError::Network(format!(
            "rdap query for {ip} returned {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| LookupError::Network(e.to_string()))?;

    parse_document(&body)
}

/// Decode an RDAP JSON body into network details plus ordered events.
pub(crate) fn parse_document(
    body: &str,
) -> Result<(NetworkInfo, Vec<NetworkEvent>), LookupError> {
    let doc: RdapDocument =
        serde_json::from_str(body).map_err(|e| LookupError::MalformedResponse(e.to_string()))?;

    let description = {
        let lines: Vec<&str> = doc
            .remarks
            .iter()
            .flat_map(|r| r.description.iter().map(String::as_str))
            .collect();
        if lines.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            lines.join(" ")
        }
    };

    let network = NetworkInfo {
        name: or_na(doc.name),
        start_address: or_na(doc.start_address),
        end_address: or_na(doc.end_address),
        country: or_na(doc.country),
        kind: or_na(doc.kind),
        description,
    };

    // Registry event order is meaningful; keep it verbatim
    let events = doc
        .events
        .into_iter()
        .map(|e| NetworkEvent {
            action: e.event_action.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            date: e.event_date.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        })
        .collect();

    Ok((network, events))
}

fn or_na(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NOT_AVAILABLE.to_string(),
    }
}
