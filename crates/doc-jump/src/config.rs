use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

/// Application configuration loaded from doc-jump.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_handbook_path")]
    pub handbook_path: String,
    /// Quiet interval before a keystroke burst triggers a search
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// How long the jump highlight stays on the revealed unit
    #[serde(default = "default_highlight_ms")]
    pub highlight_ms: u64,
}

fn default_handbook_path() -> String {
    "handbook.toml".to_string()
}

fn default_debounce_ms() -> u64 {
    120
}

fn default_highlight_ms() -> u64 {
    1600
}

impl Default for Config {
    fn default() -> Self {
        Self {
            handbook_path: default_handbook_path(),
            debounce_ms: default_debounce_ms(),
            highlight_ms: default_highlight_ms(),
        }
    }
}

impl Config {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        const CONFIG_FILE: &str = "doc-jump.toml";

        // Try current directory first
        if let Ok(content) = std::fs::read_to_string(CONFIG_FILE)
            && let Ok(config) = toml::from_str(&content)
        {
            log::debug!("Loaded config from {}", CONFIG_FILE);
            return config;
        }

        // Try home directory
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home).join(format!(".{}", CONFIG_FILE));
            if let Ok(content) = std::fs::read_to_string(&home_config)
                && let Ok(config) = toml::from_str(&content)
            {
                log::debug!("Loaded config from {}", home_config.display());
                return config;
            }
        }

        log::debug!("Using default config");
        Self::default()
    }
}
