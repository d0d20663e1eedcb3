use std::fs;
use std::path::Path;

use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

pub const SETTINGS_VERSION: u32 = 1;

/// Plugin configuration, read once at startup from `Settings.json`.
///
/// Field names serialize PascalCase to stay compatible with existing
/// settings files. Every field carries a default, so a partial file (or an
/// unversioned one written before `Version` existed) still loads.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ConversionSettings {
    pub version: u32,
    /// Days of continuous ownership before a settlement converts.
    pub time_to_convert_in_days: u32,
    /// Cascade conversions to bound villages and notables.
    pub convert_recruitable_troops: bool,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            time_to_convert_in_days: 30,
            convert_recruitable_troops: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConversionSettings {
    /// Load settings from `path`. A missing file yields the defaults; a
    /// malformed one is reported to the embedding host instead of panicking.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "settings file missing; using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
