//! Launcher configuration (`config.json`).
//!
//! The file lives in `~/.config/tui-hub/` (override with `TUI_HUB_DIR`) and is
//! created with default content on first run. A broken file is never
//! rewritten: the launcher falls back to the built-in defaults and logs why.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "TUI_HUB_DIR";
/// Overrides the directory the diagnostic log is written to.
pub const LOG_DIR_ENV: &str = "TUI_HUB_LOG_DIR";
/// Overrides the base directory relative entry paths are resolved against.
pub const BASE_DIR_ENV: &str = "TUI_HUB_BASE_DIR";

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub launcher: LauncherInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub games: Vec<LaunchableEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub tui_apps: Vec<LaunchableEntry>,
    pub stats: StatsConfig,
    pub settings: Settings,
}

/// Metadata shown in the banner and credits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherInfo {
    pub title: String,
    pub version: String,
    pub author: String,
    pub theme: String,
    /// Root for relative entry paths. Falls back to the config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
}

/// A game or TUI application the launcher can start.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchableEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub command: String,
    /// Working directory, relative to the base directory. Empty or `./` means
    /// "stay where we are".
    pub path: String,
    pub category: String,
    pub difficulty: String,
    pub version: String,
    pub author: String,
    pub executable: bool,
    /// Entry specific settings, passed through untouched.
    #[serde(deserialize_with = "null_as_default")]
    pub config: serde_json::Map<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<GameStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStats {
    pub times_played: u32,
    pub total_time: String,
    pub high_score: String,
    pub last_played: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub global: GlobalStats,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalStats {
    pub games_played: u64,
    pub total_time_seconds: u64,
    pub achievements_unlocked: u32,
    pub favorite_game: String,
    pub last_played: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub unlocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    pub sound_enabled: bool,
    pub auto_save: bool,
    pub statistics_tracking: bool,
    pub notifications: bool,
    pub backup_saves: bool,
    pub controller_support: bool,
    pub terminal_size: String,
}

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for LauncherInfo {
    fn default() -> Self {
        Self {
            title: "Terminal Gaming Suite".to_string(),
            version: "1.0.0".to_string(),
            author: "Your Name".to_string(),
            theme: "retro".to_string(),
            base_dir: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "retro".to_string(),
            sound_enabled: true,
            auto_save: true,
            statistics_tracking: true,
            notifications: true,
            backup_saves: true,
            controller_support: false,
            terminal_size: "auto".to_string(),
        }
    }
}

impl Config {
    /// Load the per-user configuration, falling back to defaults on any error.
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from_path(&path),
            Err(e) => {
                tracing::warn!(error = %e, "Could not resolve config path, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from `path`.
    ///
    /// A missing file is replaced by the defaults, which are also written to
    /// `path` (best effort). Unreadable or malformed files yield the defaults
    /// and are left as they are.
    pub fn load_from_path(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let config = Self::default();
                match config.save_to(path) {
                    Ok(()) => tracing::info!(path = %path.display(), "Wrote default config"),
                    Err(e) => tracing::warn!(
                        path = %path.display(),
                        error = %format!("{:#}", e),
                        "Failed to write default config"
                    ),
                }
                return config;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config");
                return Self::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse config");
                Self::default()
            }
        }
    }

    /// Write the configuration as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let mut contents =
            serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        contents.push('\n');
        fs::write(path, contents).with_context(|| format!("Failed to write {:?}", path))?;
        Ok(())
    }

    /// Get the configuration directory (~/.config/tui-hub/)
    /// Can be overridden with TUI_HUB_DIR environment variable
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".config").join("tui-hub"))
    }

    /// Returns: ~/.config/tui-hub/config.json
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Directory for the daily diagnostic log files.
    pub fn log_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var(LOG_DIR_ENV) {
            return Ok(PathBuf::from(custom_dir));
        }
        Ok(Self::config_dir()?.join("logs"))
    }

    /// Directory relative entry paths are joined onto.
    ///
    /// `TUI_HUB_BASE_DIR` wins, then `launcher.base_dir`, then the config
    /// directory itself.
    pub fn base_dir(&self) -> PathBuf {
        if let Ok(custom_dir) = std::env::var(BASE_DIR_ENV) {
            return PathBuf::from(custom_dir);
        }
        if let Some(dir) = &self.launcher.base_dir {
            return dir.clone();
        }
        Self::config_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}
