//! Turn a decoded document into a validated `Config`

use super::schema::{Config, IpConfig, NetConfig, RawConfig, RawNetwork};
use crate::error::{AddressList, Result};
use crate::network::{self, AddressFamily, FamilySplit, Ipv4, Ipv6};
use crate::{proxy, radvd, update};

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate every section. The result is assembled only once all checks
    /// have passed, so an error never leaves a partial config behind.
    pub fn validate(raw: RawConfig) -> Result<Config> {
        let dns = Self::validate_dns(&raw.network)?;
        let bypass = Self::validate_list(&raw.network.bypass, AddressList::Bypass)?;
        let exclude = Self::validate_list(&raw.network.exclude, AddressList::Exclude)?;
        let ipv4 = Self::validate_family::<Ipv4>(&raw.network.ipv4, bypass.ipv4, exclude.ipv4)?;
        let ipv6 = Self::validate_family::<Ipv6>(&raw.network.ipv6, bypass.ipv6, exclude.ipv6)?;

        let (proxy, _advisories) = proxy::validate(raw.proxy);
        let radvd = radvd::validate(raw.radvd);
        let update = update::validate(raw.update);

        let script = raw.custom;
        tracing::debug!("Custom script -> {:?}", script);

        Ok(Config {
            dns,
            ipv4,
            ipv6,
            proxy,
            radvd,
            update,
            script,
        })
    }

    fn validate_dns(network: &RawNetwork) -> Result<Vec<String>> {
        let dns = network::dns_servers(&network.dns)?;
        tracing::debug!("DNS server -> {:?}", dns);
        Ok(dns)
    }

    fn validate_list(entries: &[String], list: AddressList) -> Result<FamilySplit> {
        let split = network::split_by_family(entries, list)?;
        tracing::debug!("IPv4 {} -> {:?}", list, split.ipv4);
        tracing::debug!("IPv6 {} -> {:?}", list, split.ipv6);
        Ok(split)
    }

    fn validate_family<F: AddressFamily>(
        raw: &NetConfig,
        bypass: Vec<String>,
        exclude: Vec<String>,
    ) -> Result<IpConfig> {
        let iface = network::interface::<F>(raw)?;
        tracing::debug!(
            "{} -> address = {} | gateway = {}",
            F::NAME,
            iface.address.as_deref().unwrap_or(""),
            iface.gateway.as_deref().unwrap_or("")
        );

        Ok(IpConfig {
            address: iface.address,
            gateway: iface.gateway,
            bypass,
            exclude,
        })
    }
}
