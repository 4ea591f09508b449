//! Error types for configuration loading

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Unrecoverable configuration errors.
///
/// Any of these aborts the load; there is no partially valid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config from {path}: {source}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No config file found in {dir}")]
    NotFound { dir: PathBuf },

    #[error("Config content is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Decode config file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Decode config file error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid DNS server: {address}")]
    InvalidDns { address: String },

    #[error("Invalid {list} IP or CIDR: {entry}")]
    InvalidEntry { list: AddressList, entry: String },

    #[error("Invalid {family} address (CIDR): {address}")]
    InvalidAddress {
        family: &'static str,
        address: String,
    },

    #[error("Invalid {family} gateway: {address}")]
    InvalidGateway {
        family: &'static str,
        address: String,
    },
}

/// The address lists that are routed into per-family buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressList {
    Bypass,
    Exclude,
}

impl fmt::Display for AddressList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressList::Bypass => write!(f, "bypass"),
            AddressList::Exclude => write!(f, "exclude"),
        }
    }
}
