use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "dashboard.toml";

fn default_model_path() -> PathBuf {
    PathBuf::from("model.json")
}

/// Dashboard configuration, read from `dashboard.toml` in the working
/// directory when present.
#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    /// Path to the pre-trained model artifact
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
        }
    }
}

impl DashboardConfig {
    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("cannot parse {}", path.display()))
    }
}
