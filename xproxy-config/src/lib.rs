//! Configuration decoding and validation for the xproxy transparent gateway

pub mod config;
pub mod error;
pub mod network;
pub mod proxy;
pub mod radvd;
pub mod update;

// Re-export commonly used types
pub use config::{decode, Config, ConfigFormat, ConfigLoader, ConfigValidator, IpConfig, RawConfig};
pub use error::{AddressList, ConfigError, Result};
pub use network::{AddressFamily, Ipv4, Ipv6};
pub use proxy::{ProxyAdvisory, ProxyConfig, DEFAULT_CORE};
pub use radvd::RadvdConfig;
pub use update::UpdateConfig;
