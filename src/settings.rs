use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, YnabError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory that relative input file names are looked up in.
    #[serde(default = "default_input_dir")]
    pub input_dir: String,
    #[serde(default = "default_output")]
    pub default_output: String,
}

fn default_input_dir() -> String {
    ".".to_string()
}

fn default_output() -> String {
    "ynab.csv".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            default_output: default_output(),
        }
    }
}

impl Settings {
    /// Where to look for an input file the user typed in.
    pub fn resolve_input(&self, name: &str) -> PathBuf {
        let expanded = PathBuf::from(expand_home(name.trim()));
        if expanded.is_absolute() {
            expanded
        } else {
            PathBuf::from(expand_home(&self.input_dir)).join(expanded)
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("ynab-ocr")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

pub fn load_settings_from(path: &Path) -> Settings {
    if path.exists() {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    save_settings_to(settings, &settings_path())
}

pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| YnabError::Settings(e.to_string()))?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}

fn expand_home(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}

/// Absolute form of a user-supplied directory, for storing in settings.
pub fn shellexpand_path(path: &str) -> String {
    let expanded = expand_home(path);
    std::fs::canonicalize(&expanded)
        .unwrap_or_else(|_| PathBuf::from(&expanded))
        .to_string_lossy()
        .to_string()
}
