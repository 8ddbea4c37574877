use crate::index::staleness::StalenessMode;
use crate::index::types::Corpus;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "memsearch";
const CONFIG_FILE: &str = "config.json";

/// Engine configuration, stored as JSON in the app config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Corpora with more documents than this are searched through the cached
    /// index by [`crate::engine::SearchEngine`]; smaller ones are scanned.
    #[serde(default = "default_cache_threshold")]
    pub cache_threshold: usize,

    /// Idle scratch contexts each runtime keeps for reuse.
    /// If 0, uses twice the number of CPU cores
    #[serde(default)]
    pub pool_max_idle: usize,

    /// How the cached index decides it no longer matches the corpus
    #[serde(default)]
    pub staleness: StalenessMode,
}

fn default_cache_threshold() -> usize {
    1000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cache_threshold: default_cache_threshold(),
            pool_max_idle: 0,
            staleness: StalenessMode::default(),
        }
    }
}

impl AppConfig {
    /// Load config from the app config directory, or return default if not found
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig =
            serde_json::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save config to the app config directory
    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        self.save_to(&config_path)
    }

    /// Save config to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Get the effective idle pool size (resolves 0 to twice the CPU count)
    pub fn effective_pool_max_idle(&self) -> usize {
        if self.pool_max_idle == 0 {
            num_cpus() * 2
        } else {
            self.pool_max_idle
        }
    }
}

/// Get the number of CPUs available
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Application Support"))
    } else {
        // Linux/Unix: XDG_CONFIG_HOME or ~/.config; Windows: roaming AppData
        dirs::config_dir()
    };

    let base = base.context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join(CONFIG_FILE))
}

/// Read a corpus from a JSON object of `{"id": "text"}` pairs
pub fn load_corpus(path: &Path) -> Result<Corpus> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file {}", path.display()))?;
    let corpus: Corpus = serde_json::from_str(&content)
        .with_context(|| format!("Corpus file {} is not a JSON object of strings", path.display()))?;
    Ok(corpus)
}
