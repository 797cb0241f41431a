//! Wire structures for the `org.freedesktop.resolve1.Manager` link methods.

use serde::Serialize;
use std::net::IpAddr;
use zbus::zvariant::Type;

/// One entry of `SetLinkDNS`, D-Bus signature `(iay)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Type)]
pub struct LinkNameserver {
    /// Address family, `AF_INET` or `AF_INET6`.
    pub family: i32,
    /// Raw address bytes: 4 for `AF_INET`, 16 for `AF_INET6`.
    pub address: Vec<u8>,
}

impl From<IpAddr> for LinkNameserver {
    fn from(ip: IpAddr) -> Self {
        match ip {
            // Last 4 bytes of the 16-byte v4-mapped form.
            IpAddr::V4(v4) => Self {
                family: libc::AF_INET,
                address: v4.to_ipv6_mapped().octets()[12..].to_vec(),
            },
            IpAddr::V6(v6) => Self {
                family: libc::AF_INET6,
                address: v6.octets().to_vec(),
            },
        }
    }
}

/// One entry of `SetLinkDomains`, D-Bus signature `(sb)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Type)]
pub struct LinkDomain {
    /// Domain name, e.g. `corp.example.`.
    pub domain: String,
    /// Use the domain only for routing queries, never as a search suffix.
    pub routing_only: bool,
}

impl LinkDomain {
    /// Creates a search domain (routing-only unset).
    #[must_use]
    pub fn search(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            routing_only: false,
        }
    }
}

/// Marshals nameservers, preserving order.
#[must_use]
pub fn link_nameservers(servers: &[IpAddr]) -> Vec<LinkNameserver> {
    servers.iter().copied().map(LinkNameserver::from).collect()
}

/// Marshals search domains, preserving order.
#[must_use]
pub fn link_domains<S: AsRef<str>>(domains: &[S]) -> Vec<LinkDomain> {
    domains
        .iter()
        .map(|d| LinkDomain::search(d.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn ipv4_uses_last_four_bytes() {
        let ip = Ipv4Addr::new(100, 100, 100, 100);
        let ns = LinkNameserver::from(IpAddr::V4(ip));
        assert_eq!(ns.family, libc::AF_INET);
        assert_eq!(ns.address, ip.to_ipv6_mapped().octets()[12..].to_vec());
        assert_eq!(ns.address, vec![100, 100, 100, 100]);
    }

    #[test]
    fn ipv6_uses_all_sixteen_bytes() {
        let ip: Ipv6Addr = "2606:4700:4700::1111".parse().unwrap();
        let ns = LinkNameserver::from(IpAddr::V6(ip));
        assert_eq!(ns.family, libc::AF_INET6);
        assert_eq!(ns.address, ip.octets().to_vec());
    }

    #[test]
    fn family_agrees_with_length() {
        let servers: Vec<IpAddr> = vec![
            "1.1.1.1".parse().unwrap(),
            "::1".parse().unwrap(),
            "0.0.0.0".parse().unwrap(),
            "fd7a:115c:a1e0::53".parse().unwrap(),
        ];
        for ns in link_nameservers(&servers) {
            let expected = if ns.family == libc::AF_INET { 4 } else { 16 };
            assert_eq!(ns.address.len(), expected);
        }
    }

    #[test]
    fn nameserver_order_is_preserved() {
        let servers: Vec<IpAddr> = vec![
            "8.8.8.8".parse().unwrap(),
            "1.1.1.1".parse().unwrap(),
            "9.9.9.9".parse().unwrap(),
        ];
        let wire = link_nameservers(&servers);
        assert_eq!(wire[0].address, vec![8, 8, 8, 8]);
        assert_eq!(wire[1].address, vec![1, 1, 1, 1]);
        assert_eq!(wire[2].address, vec![9, 9, 9, 9]);
    }

    #[test]
    fn domains_keep_order_and_are_not_routing_only() {
        let wire = link_domains(&["b.example.", "a.example.", "c.example."]);
        let names: Vec<_> = wire.iter().map(|d| d.domain.as_str()).collect();
        assert_eq!(names, vec!["b.example.", "a.example.", "c.example."]);
        assert!(wire.iter().all(|d| !d.routing_only));
    }

    #[test]
    fn empty_inputs_marshal_to_empty() {
        assert!(link_nameservers(&[]).is_empty());
        assert!(link_domains::<&str>(&[]).is_empty());
    }

    #[test]
    fn dbus_signatures() {
        assert_eq!(LinkNameserver::SIGNATURE.to_string(), "(iay)");
        assert_eq!(LinkDomain::SIGNATURE.to_string(), "(sb)");
    }
}
