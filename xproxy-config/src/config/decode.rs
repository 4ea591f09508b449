//! Raw document decoding

use super::schema::RawConfig;
use crate::error::Result;
use std::path::Path;

/// Serialization format of a config document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    #[default]
    Yaml,
}

impl ConfigFormat {
    /// `json` selects JSON, anything else falls back to YAML
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        Self::from_extension(path.extension().and_then(|ext| ext.to_str()))
    }
}

/// Parse raw bytes into the ingestion schema. No semantic checks happen here.
pub fn decode(raw: &[u8], format: ConfigFormat) -> Result<RawConfig> {
    let content = std::str::from_utf8(raw)?;
    tracing::debug!("Config raw content -> \n{}", content);

    let config: RawConfig = match format {
        ConfigFormat::Json => serde_json::from_str(content)?,
        // serde_yaml rejects a document with no nodes
        ConfigFormat::Yaml if content.trim().is_empty() => RawConfig::default(),
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
    };

    tracing::debug!("Decoded configure -> {:?}", config);
    Ok(config)
}
