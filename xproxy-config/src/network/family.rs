//! Address family predicates

use ipnet::{Ipv4Net, Ipv6Net};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Syntactic classification for one address family.
///
/// `matches(s, false)` accepts a bare address, `matches(s, true)` accepts
/// CIDR notation (`addr/prefix`, host bits may be set).
pub trait AddressFamily {
    /// Name used in diagnostics
    const NAME: &'static str;

    fn is_address(s: &str) -> bool;

    fn is_cidr(s: &str) -> bool;

    fn matches(s: &str, cidr: bool) -> bool {
        if cidr {
            Self::is_cidr(s)
        } else {
            Self::is_address(s)
        }
    }

    /// Bare address or CIDR
    fn accepts(s: &str) -> bool {
        Self::matches(s, true) || Self::matches(s, false)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Ipv4;

#[derive(Debug, Clone, Copy)]
pub struct Ipv6;

/// Also accepts IPv4-mapped IPv6 forms (`::ffff:a.b.c.d`), which therefore
/// satisfy both families; callers test IPv4 first.
impl AddressFamily for Ipv4 {
    const NAME: &'static str = "IPv4";

    fn is_address(s: &str) -> bool {
        s.parse::<Ipv4Addr>().is_ok()
            || s
                .parse::<Ipv6Addr>()
                .is_ok_and(|addr| addr.to_ipv4_mapped().is_some())
    }

    fn is_cidr(s: &str) -> bool {
        s.parse::<Ipv4Net>().is_ok()
            || s
                .parse::<Ipv6Net>()
                .is_ok_and(|net| net.addr().to_ipv4_mapped().is_some())
    }
}

impl AddressFamily for Ipv6 {
    const NAME: &'static str = "IPv6";

    fn is_address(s: &str) -> bool {
        s.parse::<Ipv6Addr>().is_ok()
    }

    fn is_cidr(s: &str) -> bool {
        s.parse::<Ipv6Net>().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_bare_and_cidr() {
        assert!(Ipv4::matches("192.168.1.1", false));
        assert!(!Ipv4::matches("192.168.1.1", true));
        assert!(Ipv4::matches("192.168.1.0/24", true));
        assert!(Ipv4::matches("192.168.1.5/24", true));
        assert!(!Ipv4::matches("192.168.1.0/24", false));
        assert!(!Ipv4::matches("192.168.1.0/33", true));
        assert!(!Ipv4::matches("192.168.1", false));
        assert!(!Ipv4::matches("::1", false));
        assert!(!Ipv4::matches("", false));
    }

    #[test]
    fn test_ipv6_bare_and_cidr() {
        assert!(Ipv6::matches("::1", false));
        assert!(Ipv6::matches("2001:4860:4860::8888", false));
        assert!(Ipv6::matches("fc00::/64", true));
        assert!(Ipv6::matches("fc00::2/64", true));
        assert!(!Ipv6::matches("fc00::/64", false));
        assert!(!Ipv6::matches("fc00::/129", true));
        assert!(!Ipv6::matches("10.0.0.1", false));
        assert!(!Ipv6::matches("10.0.0.0/8", true));
    }

    #[test]
    fn test_mapped_ipv4_matches_both_families() {
        assert!(Ipv4::matches("::ffff:10.0.0.1", false));
        assert!(Ipv6::matches("::ffff:10.0.0.1", false));
        assert!(Ipv4::matches("::ffff:10.0.0.0/104", true));
        assert!(!Ipv4::matches("::ffff:10.0.0.1", true));
        assert!(!Ipv4::matches("fc00::1", false));
        assert!(!Ipv4::matches("fc00::/64", true));
    }

    #[test]
    fn test_accepts_either_form() {
        assert!(Ipv4::accepts("10.0.0.0/8"));
        assert!(Ipv4::accepts("10.0.0.1"));
        assert!(!Ipv4::accepts("not-an-address"));
        assert!(Ipv6::accepts("::1"));
        assert!(Ipv6::accepts("fd00::/8"));
        assert!(!Ipv6::accepts("fd00::/8/8"));
    }
}
