//! ASN origin lookup over the Team Cymru WHOIS service
//!
//! The bulk verbose interface returns one pipe-separated row per queried
//! address:
//!
//! `AS | IP | BGP Prefix | CC | Registry | Allocated | AS Name`

use super::error::LookupError;
use super::types::{AsnRecord, NOT_AVAILABLE};
use ipnet::IpNet;
use std::net::IpAddr;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

/// Default WHOIS endpoint for ASN origin data
pub const DEFAULT_WHOIS_SERVER: &str = "whois.cymru.com:43";

/// Query the WHOIS service for the ASN origin data of `ip`.
///
/// # Arguments
///
/// * `server` - WHOIS endpoint as `host:port`
/// * `ip` - The address to query; the caller has already screened out
///   reserved blocks
/// * `timeout` - Deadline for the whole connect/send/read exchange
///
/// # Errors
///
/// [`LookupError::Timeout`] when the deadline elapses, [`LookupError::Network`]
/// on transport failure, [`LookupError::NoAsnData`] when the service reports
/// no origin for the address, and [`LookupError::MalformedResponse`] for
/// rows that do not match the verbose format.
pub async fn whois_origin(
    server: &str,
    ip: IpAddr,
    timeout: Duration,
) -> Result<AsnRecord, LookupError> {
    tokio::time::timeout(timeout, query(server, ip))
        .await
        .map_err(|_| LookupError::Timeout { stage: "whois" })?
}

async fn query(server: &str, ip: IpAddr) -> Result<AsnRecord, LookupError> {
    let mut stream = TcpStream::connect(server)
        .await
        .map_err(|e| LookupError::Network(e.to_string()))?;
    let (read, mut write) = stream.split();
    let mut lines = BufReader::new(read).lines();

    let request = format!("begin\nverbose\n{ip}\nend\n");
    write
        .write_all(request.as_bytes())
        .await
        .map_err(|e| LookupError::Network(e.to_string()))?;

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| LookupError::Network(e.to_string()))?
    {
        let line = line.trim();
        if line.is_empty() || line.starts_with("Bulk mode;") {
            continue;
        }
        if let Some(message) = line.strip_prefix("Error:") {
            return Err(LookupError::MalformedResponse(message.trim().to_string()));
        }
        // Column-header rows start with a bare "AS" field
        if line.split('|').next().map(str::trim) == Some("AS") {
            continue;
        }
        return parse_origin_row(line);
    }

    Err(LookupError::MalformedResponse(
        "whois service closed the connection without a data row".to_string(),
    ))
}

/// Parse one verbose response row into an [`AsnRecord`].
pub(crate) fn parse_origin_row(row: &str) -> Result<AsnRecord, LookupError> {
    let fields: Vec<&str> = row.split('|').map(str::trim).collect();
    if fields.len() < 7 {
        return Err(LookupError::MalformedResponse(format!(
            "short whois row: {row}"
        )));
    }
    if fields[0].eq_ignore_ascii_case("NA") {
        return Err(LookupError::NoAsnData);
    }

    let asn_cidr = fields[2];
    if !asn_cidr.eq_ignore_ascii_case("NA") && asn_cidr.parse::<IpNet>().is_err() {
        return Err(LookupError::MalformedResponse(format!(
            "bad prefix in whois row: {asn_cidr}"
        )));
    }

    // Registry names come back in varying case; RDAP endpoint selection
    // expects them lowercased
    let asn_registry = if fields[4].is_empty() || fields[4].eq_ignore_ascii_case("NA") {
        NOT_AVAILABLE.to_string()
    } else {
        fields[4].to_lowercase()
    };

    Ok(AsnRecord {
        asn: fields[0].to_string(),
        asn_cidr: or_na(fields[2]),
        asn_country_code: or_na(fields[3]),
        asn_registry,
        asn_date: or_na(fields[5]),
        asn_description: or_na(fields[6]),
    })
}

fn or_na(field: &str) -> String {
    if field.is_empty() || field.eq_ignore_ascii_case("NA") {
        NOT_AVAILABLE.to_string()
    } else {
        field.to_string()
    }
}
