use anyhow::*;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Host-provided developer toggles.
pub trait DeveloperSettings: Send + Sync {
    fn is_animation_fps_debug_enabled(&self) -> bool;
}

impl DeveloperSettings for bool {
    fn is_animation_fps_debug_enabled(&self) -> bool {
        *self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsData {
    #[serde(default)]
    pub animation_fps_debug: bool,
}

/// Developer settings persisted as JSON.
pub struct Settings {
    path: PathBuf,
    pub data: SettingsData,
}

impl Settings {
    pub fn default_path() -> Result<PathBuf> {
        let mut config_dir = match dirs::config_dir() {
            Some(path) => path,
            None => PathBuf::from("."),
        };
        config_dir.push("fpsrec");
        config_dir.push("settings.json");
        Ok(config_dir)
    }

    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Missing files yield defaults, malformed ones are an error.
    pub fn load_from(path: PathBuf) -> Result<Self> {
        match std::fs::File::open(&path) {
            Result::Ok(f) => {
                let data: SettingsData = serde_json::from_reader(f)
                    .with_context(|| format!("parsing {}", path.display()))?;
                debug!("loaded settings from {}: {:?}", path.display(), data);
                Ok(Self { path, data })
            }
            Err(_) => Ok(Self {
                path,
                data: SettingsData::default(),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(dir)?;
            }
        }
        serde_json::to_writer_pretty(std::fs::File::create(&self.path)?, &self.data)?;
        Ok(())
    }
}

impl DeveloperSettings for Settings {
    fn is_animation_fps_debug_enabled(&self) -> bool {
        self.data.animation_fps_debug
    }
}
