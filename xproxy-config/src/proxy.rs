//! Proxy core settings and their policy checks

use crate::config::de::nullable;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Engine used when the document leaves `proxy.core` empty
pub const DEFAULT_CORE: &str = "xray";

const KNOWN_CORES: &[&str] = &["xray", "v2ray", "sagray"];

/// Engines that can turn off redirect after sniffing (`routeOnly`)
const REDIRECT_CORES: &[&str] = &["xray", "sagray"];

/// Engines that understand a sniff exclusion list
const SNIFF_EXCLUDE_CORES: &[&str] = &["xray"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProxyConfig {
    /// Log level passed to the core
    #[serde(default, deserialize_with = "nullable")]
    pub log: String,
    #[serde(default, deserialize_with = "nullable")]
    pub core: String,
    /// Named HTTP inbounds -> listen port
    #[serde(default, deserialize_with = "nullable")]
    pub http: IndexMap<String, u16>,
    /// Named SOCKS5 inbounds -> listen port
    #[serde(default, deserialize_with = "nullable")]
    pub socks: IndexMap<String, u16>,
    #[serde(default, deserialize_with = "nullable")]
    pub addon: Vec<AddOn>,
    #[serde(default, deserialize_with = "nullable")]
    pub sniff: Sniff,
}

/// Extra inbound handed to the core without interpretation
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AddOn {
    #[serde(default, deserialize_with = "nullable")]
    pub tag: String,
    #[serde(default, deserialize_with = "nullable")]
    pub port: u16,
    #[serde(default, deserialize_with = "nullable")]
    pub protocol: String,
    #[serde(default)]
    pub settings: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Sniff {
    #[serde(default, deserialize_with = "nullable")]
    pub enable: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub redirect: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub exclude: Vec<String>,
}

/// Non-fatal inconsistency between the chosen core and its settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyAdvisory {
    UnknownCore(String),
    RedirectUnsupported(String),
    SniffExcludeUnsupported(String),
}

impl fmt::Display for ProxyAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyAdvisory::UnknownCore(core) => write!(f, "Unknown core type -> {}", core),
            ProxyAdvisory::RedirectUnsupported(core) => write!(
                f,
                "Core {} couldn't disable redirect in sniff (aka `routeOnly` option)",
                core
            ),
            ProxyAdvisory::SniffExcludeUnsupported(core) => write!(
                f,
                "Core {} ignores the sniff exclude list, it only applies to Xray-core",
                core
            ),
        }
    }
}

/// Fill in the default core and check the settings against it.
///
/// Advisories are logged and returned; the settings are kept as authored.
pub fn validate(mut proxy: ProxyConfig) -> (ProxyConfig, Vec<ProxyAdvisory>) {
    if proxy.core.is_empty() {
        proxy.core = DEFAULT_CORE.to_string();
    }

    let advisories = advisories(&proxy);
    for advisory in &advisories {
        tracing::warn!("{}", advisory);
    }

    tracing::debug!("Proxy log level -> {}", proxy.log);
    tracing::debug!("Core type -> {}", proxy.core);
    tracing::debug!("Http inbounds -> {:?}", proxy.http);
    tracing::debug!("Socks5 inbounds -> {:?}", proxy.socks);
    tracing::debug!("Add-on inbounds -> {:?}", proxy.addon);
    tracing::debug!("Connection sniff -> {}", proxy.sniff.enable);
    tracing::debug!("Connection redirect -> {}", proxy.sniff.redirect);
    tracing::debug!("Connection sniff exclude -> {:?}", proxy.sniff.exclude);

    (proxy, advisories)
}

/// Policy checks for an already defaulted proxy config
pub fn advisories(proxy: &ProxyConfig) -> Vec<ProxyAdvisory> {
    let core = proxy.core.as_str();
    let mut found = Vec::new();

    if !KNOWN_CORES.contains(&core) {
        found.push(ProxyAdvisory::UnknownCore(core.to_string()));
    }
    if !REDIRECT_CORES.contains(&core) && !proxy.sniff.redirect {
        found.push(ProxyAdvisory::RedirectUnsupported(core.to_string()));
    }
    if !SNIFF_EXCLUDE_CORES.contains(&core) && !proxy.sniff.exclude.is_empty() {
        found.push(ProxyAdvisory::SniffExcludeUnsupported(core.to_string()));
    }

    found
}
