//! asnwho - resolve a hostname or IP address and report the owning ASN
//! and network block.
//!
//! This is the command-line interface for the asnwho library.

use anyhow::Result;
use asnwho::{
    resolve_target, LookupConfig, LookupError, LookupResult, RegistryClient, ResolveError,
};
use clap::Parser;
use std::net::IpAddr;
use std::time::Duration;

/// Get the version string for asnwho
fn get_version() -> &'static str {
    if cfg!(debug_assertions) {
        concat!(env!("CARGO_PKG_VERSION"), "-UNRELEASED")
    } else {
        env!("CARGO_PKG_VERSION")
    }
}

/// Command-line arguments for the ASN lookup tool.
#[derive(Parser, Debug)]
#[clap(author, version, about = "Report the ASN and network block owning an IP address or hostname", long_about = None)]
struct Args {
    /// Target hostname or IP address
    target: String,

    /// Timeout for each registry query in milliseconds
    #[clap(long, default_value_t = 5000)]
    timeout_ms: u64,

    /// WHOIS server for ASN origin data (host:port)
    #[clap(long, default_value = "whois.cymru.com:43")]
    whois_server: String,

    /// Skip RDAP network enrichment (ASN origin data only)
    #[clap(long)]
    no_rdap: bool,

    /// Output the result in JSON format
    #[clap(long)]
    json: bool,
}

fn main() {
    // Quick check for version before starting async runtime
    let argv: Vec<String> = std::env::args().collect();
    if argv.len() == 2 && (argv[1] == "--version" || argv[1] == "-V") {
        println!("asnwho {}", get_version());
        return;
    }

    // Single-threaded tokio runtime for lower overhead
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime");

    if let Err(e) = runtime.block_on(async_main()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn async_main() -> Result<()> {
    let args = Args::parse();

    if args.timeout_ms == 0 {
        eprintln!("Error: timeout-ms must be greater than 0");
        std::process::exit(1);
    }

    let target = match resolve_target(&args.target, None).await {
        Ok(target) => target,
        Err(ResolveError::NotResolvable { .. }) => {
            eprintln!("Invalid input: neither a valid IP address nor a resolvable domain.");
            std::process::exit(1);
        }
    };

    if target.from_hostname && !args.json {
        println!();
        println!("IP address for {} is {}", args.target, target.address);
        println!();
    }

    let client = RegistryClient::with_config(LookupConfig {
        whois_server: args.whois_server.clone(),
        rdap_base: None,
        whois_timeout: Duration::from_millis(args.timeout_ms),
        rdap_timeout: Duration::from_millis(args.timeout_ms),
        skip_rdap: args.no_rdap,
    });

    let result = match client.lookup(target.address).await {
        Ok(result) => result,
        Err(LookupError::ReservedAddress { ip, reason }) => {
            eprintln!("Error: {} is a reserved address ({}).", ip, reason);
            eprintln!("Reserved and special-use blocks have no public ASN attribution.");
            std::process::exit(1);
        }
        Err(LookupError::Timeout { stage }) => {
            eprintln!("Error: {} query timed out.", stage);
            eprintln!("The registry may be slow or unreachable; try a larger --timeout-ms.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("ASN lookup failed: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        display_json_result(target.address, &result)?;
    } else {
        display_text_result(target.address, &result);
    }

    Ok(())
}

/// JSON output structure for the lookup result
#[derive(Debug, serde::Serialize)]
struct JsonOutput<'a> {
    version: String,
    target: String,
    #[serde(flatten)]
    result: &'a LookupResult,
}

/// Display the result in JSON format
fn display_json_result(ip: IpAddr, result: &LookupResult) -> Result<()> {
    let output = JsonOutput {
        version: get_version().to_string(),
        target: ip.to_string(),
        result,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Display the result as text
fn display_text_result(ip: IpAddr, result: &LookupResult) {
    println!("ASN Information for {}:", ip);
    println!();
    println!("ASN: {}", result.asn.asn);
    println!("ASN CIDR: {}", result.asn.asn_cidr);
    println!("ASN Country Code: {}", result.asn.asn_country_code);
    println!("ASN Registry: {}", result.asn.asn_registry);
    println!("ASN Description: {}", result.asn.asn_description);
    println!("ASN Allocation Date: {}", result.asn.asn_date);

    if let Some(network) = &result.network {
        println!();
        println!("Network Details:");
        println!("Network Name: {}", network.name);
        println!("Network Start IP: {}", network.start_address);
        println!("Network End IP: {}", network.end_address);
        println!("Network Country: {}", network.country);
        println!("Network Type: {}", network.kind);
        println!("Network Description: {}", network.description);
    }

    if !result.events.is_empty() {
        println!();
        println!("Event History:");
        for event in &result.events {
            println!("Event: {}, Date: {}", event.action, event.date);
        }
    }
}
