//! Persisted plugin state: one JSON file per save game, rewritten wholesale
//! at each save boundary and read wholesale on load.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

use crate::timer::SettlementChangeTimer;

pub const STATE_VERSION: u32 = 1;

/// Where per-save state files live.
#[derive(Resource, Debug, Clone)]
pub struct StatePaths {
    saves_dir: PathBuf,
}

impl StatePaths {
    pub fn new(saves_dir: impl Into<PathBuf>) -> Self {
        Self {
            saves_dir: saves_dir.into(),
        }
    }

    pub fn saves_dir(&self) -> &Path {
        &self.saves_dir
    }

    pub fn state_file(&self, save_id: &str) -> PathBuf {
        self.saves_dir
            .join(format!("SettlementChangeTimers-{save_id}.json"))
    }

    /// Pointer file written after a successful save, mapping the host's save
    /// name to the state file backing it.
    pub fn pointer_file(&self, save_name: &str) -> PathBuf {
        self.saves_dir
            .join(format!("SettlementChangeTimers-{save_name}.txt"))
    }
}

#[derive(Debug, Deserialize)]
struct StateFile {
    #[serde(default = "default_state_version")]
    version: u32,
    #[serde(default)]
    timers: Vec<SettlementChangeTimer>,
}

fn default_state_version() -> u32 {
    STATE_VERSION
}

#[derive(Serialize)]
struct StateFileRef<'a> {
    version: u32,
    timers: &'a [SettlementChangeTimer],
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to access state file: {0}")]
    Io(#[from] std::io::Error),
    #[error("state file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Rewrite the state file wholesale.
pub fn write_state(path: &Path, timers: &[SettlementChangeTimer]) -> Result<(), StateError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(
        &mut writer,
        &StateFileRef {
            version: STATE_VERSION,
            timers,
        },
    )?;
    writer.flush()?;
    Ok(())
}

/// Read the full timer sequence back. Accepts both the versioned object form
/// and the legacy bare-array form written before versioning existed.
pub fn read_state(path: &Path) -> Result<Vec<SettlementChangeTimer>, StateError> {
    let raw = fs::read_to_string(path)?;
    match serde_json::from_str::<StateFile>(&raw) {
        Ok(file) => {
            if file.version > STATE_VERSION {
                tracing::warn!(
                    version = file.version,
                    "state file written by a newer plugin version"
                );
            }
            Ok(file.timers)
        }
        Err(_) => Ok(serde_json::from_str::<Vec<SettlementChangeTimer>>(&raw)?),
    }
}

pub fn write_save_pointer(pointer: &Path, state_file: &Path) -> Result<(), StateError> {
    if let Some(parent) = pointer.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(pointer, state_file.display().to_string())?;
    Ok(())
}
