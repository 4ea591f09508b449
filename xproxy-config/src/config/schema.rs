//! Configuration schema types
//!
//! `RawConfig` is the document as authored and carries no guarantees.
//! `Config` is what the validator hands to the rest of the system.

use super::de::nullable;
use crate::proxy::ProxyConfig;
use crate::radvd::RadvdConfig;
use crate::update::UpdateConfig;
use serde::{Deserialize, Serialize};

/// Ingestion schema shared by the JSON and YAML decoders
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawConfig {
    /// Custom script paths
    #[serde(default, deserialize_with = "nullable")]
    pub custom: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub update: UpdateConfig,
    #[serde(default, deserialize_with = "nullable")]
    pub radvd: RadvdConfig,
    #[serde(default, deserialize_with = "nullable")]
    pub proxy: ProxyConfig,
    #[serde(default, deserialize_with = "nullable")]
    pub network: RawNetwork,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawNetwork {
    #[serde(default, deserialize_with = "nullable")]
    pub dns: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub bypass: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub exclude: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub ipv4: NetConfig,
    #[serde(default, deserialize_with = "nullable")]
    pub ipv6: NetConfig,
}

/// Interface settings of one family, as authored
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NetConfig {
    #[serde(default, deserialize_with = "nullable")]
    pub gateway: String,
    /// Interface address, may carry a prefix length
    #[serde(default, deserialize_with = "nullable")]
    pub address: String,
}

/// Validated configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Config {
    /// DNS servers of either family, in authored order
    pub dns: Vec<String>,
    pub ipv4: IpConfig,
    pub ipv6: IpConfig,
    pub proxy: ProxyConfig,
    pub radvd: RadvdConfig,
    pub update: UpdateConfig,
    /// Custom script paths
    pub script: Vec<String>,
}

/// Per-family network settings. Every entry is valid for the family.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IpConfig {
    /// Interface address in CIDR notation
    pub address: Option<String>,
    /// Bare gateway address
    pub gateway: Option<String>,
    pub bypass: Vec<String>,
    pub exclude: Vec<String>,
}
