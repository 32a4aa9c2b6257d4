use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::mode::QuizMode;

const DEFAULT_FEEDBACK_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub difficulty: Difficulty,
    pub mode: Option<QuizMode>,
    /// Pause after a resolved question before the next one is shown.
    pub feedback_delay_ms: u64,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            mode: None,
            feedback_delay_ms: DEFAULT_FEEDBACK_DELAY_MS,
        }
    }
}

impl UserConfig {
    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("mathquiz").join("config.json"))
}

pub fn load_config() -> UserConfig {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("could not determine home directory, using default config");
            UserConfig::default()
        }
    }
}

pub fn load_config_from(path: &Path) -> UserConfig {
    if !path.exists() {
        return UserConfig::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!("ignoring unparsable config {}: {}", path.display(), e);
            UserConfig::default()
        }),
        Err(e) => {
            warn!("failed to read config {}: {}", path.display(), e);
            UserConfig::default()
        }
    }
}

pub fn save_config(config: &UserConfig) -> Result<(), io::Error> {
    let path = get_config_path()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "could not determine home directory"))?;
    save_config_to(&path, config)
}

pub fn save_config_to(path: &Path, config: &UserConfig) -> Result<(), io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)?;
    debug!("saved config to {}", path.display());
    Ok(())
}
