//! Configuration file discovery and loading

use super::decode::{decode, ConfigFormat};
use super::schema::Config;
use super::validator::ConfigValidator;
use crate::error::{ConfigError, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding config discovery
pub const CONFIG_ENV: &str = "XPROXY_CONFIG";

/// File names probed in the work directory, in priority order
pub const CONFIG_NAMES: [&str; 3] = ["xproxy.yml", "xproxy.yaml", "xproxy.json"];

pub struct ConfigLoader;

impl ConfigLoader {
    /// Locate the config file
    pub fn find_config<P: AsRef<Path>>(work_dir: P) -> Result<PathBuf> {
        // Priority order:
        // 1. $XPROXY_CONFIG
        // 2. xproxy.yml / xproxy.yaml / xproxy.json in the work directory
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        Self::find_in_dir(work_dir)
    }

    /// First existing config file in `dir`
    pub fn find_in_dir<P: AsRef<Path>>(dir: P) -> Result<PathBuf> {
        let dir = dir.as_ref();
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
            .ok_or_else(|| ConfigError::NotFound {
                dir: dir.to_path_buf(),
            })
    }

    /// Read, decode and validate a config file. The format follows the
    /// file extension.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|source| ConfigError::ConfigLoad {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loading config from {:?}", path);
        Self::load_from_bytes(&raw, ConfigFormat::from_path(path))
    }

    /// Decode and validate an in-memory document
    pub fn load_from_bytes(raw: &[u8], format: ConfigFormat) -> Result<Config> {
        let raw_config = decode(raw, format)?;
        ConfigValidator::validate(raw_config)
    }

    /// Find and load the config for a work directory
    pub fn load<P: AsRef<Path>>(work_dir: P) -> Result<Config> {
        let path = Self::find_config(work_dir)?;
        Self::load_from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_prefers_yml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("xproxy.json"), "{}").unwrap();
        fs::write(dir.path().join("xproxy.yaml"), "").unwrap();
        fs::write(dir.path().join("xproxy.yml"), "").unwrap();

        let found = ConfigLoader::find_in_dir(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("xproxy.yml"));
    }

    #[test]
    fn test_find_falls_back_to_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("xproxy.json"), "{}").unwrap();

        let found = ConfigLoader::find_in_dir(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("xproxy.json"));
    }

    #[test]
    fn test_find_nothing() {
        let dir = TempDir::new().unwrap();
        let err = ConfigLoader::find_in_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_find_config_honours_env() {
        let dir = TempDir::new().unwrap();
        let custom = dir.path().join("elsewhere.json");
        env::set_var(CONFIG_ENV, &custom);
        let found = ConfigLoader::find_config(dir.path());
        env::remove_var(CONFIG_ENV);
        assert_eq!(found.unwrap(), custom);
    }

    #[test]
    fn test_load_from_file_uses_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("xproxy.json");
        fs::write(&path, r#"{"network": {"dns": ["223.5.5.5"]}}"#).unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.dns, vec!["223.5.5.5"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ConfigLoader::load_from_file(dir.path().join("absent.yml")).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigLoad { .. }));
    }
}
