//! Asset update settings, consumed by the update scheduler

use crate::config::de::{nullable, scalar_map};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UpdateConfig {
    /// Cron expression for the periodic refresh
    #[serde(default, deserialize_with = "nullable")]
    pub cron: String,
    /// Asset file name -> download URL
    #[serde(default, deserialize_with = "scalar_map")]
    pub url: IndexMap<String, String>,
}

/// Pass the update settings through unchanged
pub fn validate(update: UpdateConfig) -> UpdateConfig {
    tracing::debug!("Update cron -> {}", update.cron);
    tracing::debug!("Update urls -> {:?}", update.url);
    update
}
