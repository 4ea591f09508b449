//! Router advertisement daemon settings
//!
//! These are handed to the radvd controller as authored. Option maps keep
//! their key order so the rendered daemon config matches the document.

use crate::config::de::{nullable, scalar_map};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RadvdConfig {
    #[serde(default, deserialize_with = "nullable")]
    pub log: u8,
    /// Interface to advertise on
    #[serde(default, deserialize_with = "nullable")]
    pub dev: String,
    #[serde(default, deserialize_with = "nullable")]
    pub enable: bool,
    /// Unicast clients; empty means multicast to all
    #[serde(default, deserialize_with = "nullable")]
    pub client: Vec<String>,
    #[serde(default, deserialize_with = "scalar_map")]
    pub option: IndexMap<String, String>,
    #[serde(default, deserialize_with = "nullable")]
    pub prefix: RadvdNet,
    #[serde(default, deserialize_with = "nullable")]
    pub route: RadvdNet,
    #[serde(default, deserialize_with = "nullable")]
    pub rdnss: Rdnss,
    #[serde(default, deserialize_with = "nullable")]
    pub dnssl: Dnssl,
}

/// A prefix or route block
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RadvdNet {
    #[serde(default, deserialize_with = "nullable")]
    pub enable: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub cidr: String,
    #[serde(default, deserialize_with = "scalar_map")]
    pub option: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Rdnss {
    #[serde(default, deserialize_with = "nullable")]
    pub enable: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub ip: Vec<String>,
    #[serde(default, deserialize_with = "scalar_map")]
    pub option: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Dnssl {
    #[serde(default, deserialize_with = "nullable")]
    pub enable: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub suffix: Vec<String>,
    #[serde(default, deserialize_with = "scalar_map")]
    pub option: IndexMap<String, String>,
}

/// Pass the radvd settings through unchanged
pub fn validate(radvd: RadvdConfig) -> RadvdConfig {
    tracing::debug!("Radvd log level -> {}", radvd.log);
    tracing::debug!("Radvd enable -> {}", radvd.enable);
    tracing::debug!("Radvd interface -> {}", radvd.dev);
    tracing::debug!("Radvd options -> {:?}", radvd.option);
    tracing::debug!("Radvd prefix -> {:?}", radvd.prefix);
    tracing::debug!("Radvd route -> {:?}", radvd.route);
    tracing::debug!("Radvd clients -> {:?}", radvd.client);
    tracing::debug!("Radvd RDNSS -> {:?}", radvd.rdnss);
    tracing::debug!("Radvd DNSSL -> {:?}", radvd.dnssl);
    radvd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_radvd_block() {
        let yaml = r#"
log: 3
dev: eth0
enable: true
client:
  - fe80::215:5dff:fe00:1
option:
  AdvSendAdvert: on
  MaxRtrAdvInterval: 30
prefix:
  enable: true
  cidr: fc00::/64
  option:
    AdvOnLink: on
route:
  cidr:
rdnss:
  enable: true
  ip:
    - fc00::2
dnssl:
  suffix: [lan]
"#;
        let radvd: RadvdConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(radvd.log, 3);
        assert_eq!(radvd.dev, "eth0");
        assert!(radvd.enable);
        assert_eq!(radvd.client, vec!["fe80::215:5dff:fe00:1"]);
        assert_eq!(radvd.option["MaxRtrAdvInterval"], "30");
        assert_eq!(radvd.prefix.cidr, "fc00::/64");
        assert_eq!(radvd.prefix.option["AdvOnLink"], "on");
        assert!(!radvd.route.enable);
        assert_eq!(radvd.route.cidr, "");
        assert_eq!(radvd.rdnss.ip, vec!["fc00::2"]);
        assert!(!radvd.dnssl.enable);
        assert_eq!(radvd.dnssl.suffix, vec!["lan"]);
    }

    #[test]
    fn test_validate_is_verbatim() {
        let radvd = RadvdConfig {
            dev: "eth0".to_string(),
            enable: true,
            ..Default::default()
        };
        assert_eq!(validate(radvd.clone()), radvd);
    }
}
