use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use crate::driver::{DriverSelection, DEFAULT_MUSIC_VOLUME};

/// Persistent music settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicConfig {
    /// Driver to use, optionally with inline options (`extmidi:cmd=timidity`).
    /// Absent means autoprobe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    /// Extra `key=value` driver options
    pub params: Vec<String>,
    pub volume: u8,
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            driver: None,
            params: Vec::new(),
            volume: DEFAULT_MUSIC_VOLUME,
        }
    }
}

impl MusicConfig {
    /// Load settings from `path`, writing the defaults there first if missing
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            Self::default().save(path)?;
        }

        let json = fs::read_to_string(path)
            .context(format!("Failed to read music config from {:?}", path))?;
        let config = serde_json::from_str(&json)
            .context("Failed to parse music config JSON")?;

        Ok(config)
    }

    /// Write settings to `path` atomically
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize music config")?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, json)
            .context("Failed to write temporary config file")?;
        fs::rename(&temp_path, path)
            .context("Failed to atomically update config file")?;

        Ok(())
    }

    /// Driver selection described by these settings
    pub fn selection(&self) -> DriverSelection {
        let mut selection = self
            .driver
            .as_deref()
            .map(DriverSelection::parse)
            .unwrap_or_default();

        selection.params.extend(self.params.iter().cloned());
        selection
    }
}
