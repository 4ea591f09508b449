//! Classification of address strings into per-family settings

pub mod family;

pub use family::{AddressFamily, Ipv4, Ipv6};

use crate::config::schema::NetConfig;
use crate::error::{AddressList, ConfigError, Result};

/// Entries of one address list, routed by family
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FamilySplit {
    pub ipv4: Vec<String>,
    pub ipv6: Vec<String>,
}

/// Interface address and gateway of one family; `None` when unset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interface {
    pub address: Option<String>,
    pub gateway: Option<String>,
}

/// DNS servers must be bare addresses of either family
pub fn dns_servers(entries: &[String]) -> Result<Vec<String>> {
    entries
        .iter()
        .map(|address| {
            if Ipv4::matches(address, false) || Ipv6::matches(address, false) {
                Ok(address.clone())
            } else {
                Err(ConfigError::InvalidDns {
                    address: address.clone(),
                })
            }
        })
        .collect()
}

/// Route each entry into the IPv4 or IPv6 bucket. IPv4 is always tried first.
pub fn split_by_family(entries: &[String], list: AddressList) -> Result<FamilySplit> {
    let mut split = FamilySplit::default();
    for entry in entries {
        if Ipv4::accepts(entry) {
            split.ipv4.push(entry.clone());
        } else if Ipv6::accepts(entry) {
            split.ipv6.push(entry.clone());
        } else {
            return Err(ConfigError::InvalidEntry {
                list,
                entry: entry.clone(),
            });
        }
    }
    Ok(split)
}

/// Check an interface address (CIDR) and gateway (bare) against family `F`.
///
/// Empty strings are unset and skip validation.
pub fn interface<F: AddressFamily>(raw: &NetConfig) -> Result<Interface> {
    let address = non_empty(&raw.address);
    let gateway = non_empty(&raw.gateway);

    if let Some(address) = &address {
        if !F::matches(address, true) {
            return Err(ConfigError::InvalidAddress {
                family: F::NAME,
                address: address.clone(),
            });
        }
    }
    if let Some(gateway) = &gateway {
        if !F::matches(gateway, false) {
            return Err(ConfigError::InvalidGateway {
                family: F::NAME,
                address: gateway.clone(),
            });
        }
    }

    Ok(Interface { address, gateway })
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
