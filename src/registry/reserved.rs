//! Special-use address classification
//!
//! Reserved blocks carry no public registry attribution, so the lookup
//! client refuses them before opening any connection.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Returns the special-use block name for `ip`, or `None` for publicly
/// routable addresses.
pub fn special_use_name(ip: &IpAddr) -> Option<&'static str> {
    match ip {
        IpAddr::V4(v4) => special_use_v4(v4),
        IpAddr::V6(v6) => special_use_v6(v6),
    }
}

fn special_use_v4(ip: &Ipv4Addr) -> Option<&'static str> {
    if ip.is_loopback() {
        Some("loopback")
    } else if ip.is_private() {
        Some("private network")
    } else if is_cgnat(ip) {
        Some("carrier grade NAT")
    } else if ip.is_link_local() {
        Some("link-local")
    } else if ip.is_broadcast() {
        Some("broadcast")
    } else if ip.is_documentation() {
        Some("documentation")
    } else if ip.is_unspecified() {
        Some("unspecified")
    } else {
        None
    }
}

/// Checks if an IP is in the CGNAT range (100.64.0.0/10).
pub fn is_cgnat(ip: &Ipv4Addr) -> bool {
    let octets = ip.octets();
    octets[0] == 100 && (64..=127).contains(&octets[1])
}

fn special_use_v6(ip: &Ipv6Addr) -> Option<&'static str> {
    if ip.is_loopback() {
        Some("loopback")
    } else if ip.is_unspecified() {
        Some("unspecified")
    } else if is_unique_local_v6(ip) {
        Some("unique local")
    } else if is_link_local_v6(ip) {
        Some("link-local")
    } else if is_documentation_v6(ip) {
        Some("documentation")
    } else {
        None
    }
}

// fc00::/7
fn is_unique_local_v6(ip: &Ipv6Addr) -> bool {
    (ip.segments()[0] & 0xfe00) == 0xfc00
}

// fe80::/10
fn is_link_local_v6(ip: &Ipv6Addr) -> bool {
    (ip.segments()[0] & 0xffc0) == 0xfe80
}

// 2001:db8::/32
fn is_documentation_v6(ip: &Ipv6Addr) -> bool {
    ip.segments()[0] == 0x2001 && ip.segments()[1] == 0xdb8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v4(s: &str) -> IpAddr {
        IpAddr::V4(s.parse().unwrap())
    }

    fn v6(s: &str) -> IpAddr {
        IpAddr::V6(s.parse().unwrap())
    }

    #[test]
    fn test_loopback() {
        assert_eq!(special_use_name(&v4("127.0.0.1")), Some("loopback"));
        assert_eq!(special_use_name(&v4("127.255.255.255")), Some("loopback"));
        assert_eq!(special_use_name(&v6("::1")), Some("loopback"));
    }

    #[test]
    fn test_private_ranges() {
        assert_eq!(special_use_name(&v4("10.0.0.1")), Some("private network"));
        assert_eq!(special_use_name(&v4("172.16.0.1")), Some("private network"));
        assert_eq!(
            special_use_name(&v4("192.168.1.1")),
            Some("private network")
        );
        // Just outside 172.16.0.0/12
        assert_eq!(special_use_name(&v4("172.32.0.1")), None);
    }

    #[test]
    fn test_cgnat() {
        assert!(is_cgnat(&"100.64.0.0".parse().unwrap()));
        assert!(is_cgnat(&"100.127.255.255".parse().unwrap()));
        assert!(!is_cgnat(&"100.128.0.0".parse().unwrap()));
        assert_eq!(
            special_use_name(&v4("100.64.0.1")),
            Some("carrier grade NAT")
        );
    }

    #[test]
    fn test_other_special_v4() {
        assert_eq!(special_use_name(&v4("169.254.1.1")), Some("link-local"));
        assert_eq!(special_use_name(&v4("255.255.255.255")), Some("broadcast"));
        assert_eq!(special_use_name(&v4("192.0.2.1")), Some("documentation"));
        assert_eq!(special_use_name(&v4("0.0.0.0")), Some("unspecified"));
    }

    #[test]
    fn test_special_v6() {
        assert_eq!(special_use_name(&v6("::")), Some("unspecified"));
        assert_eq!(special_use_name(&v6("fc00::1")), Some("unique local"));
        assert_eq!(special_use_name(&v6("fd12:3456::1")), Some("unique local"));
        assert_eq!(special_use_name(&v6("fe80::1")), Some("link-local"));
        assert_eq!(special_use_name(&v6("2001:db8::1")), Some("documentation"));
    }

    #[test]
    fn test_public_addresses() {
        assert_eq!(special_use_name(&v4("8.8.8.8")), None);
        assert_eq!(special_use_name(&v4("1.1.1.1")), None);
        assert_eq!(special_use_name(&v6("2001:4860:4860::8888")), None);
    }
}
