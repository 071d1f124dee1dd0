use crate::error::{Result, StampError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".stamp.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StampConfig {
    /// ADR directory, relative to the directory holding `.stamp.yaml`.
    #[serde(default = "default_directory")]
    pub directory: String,
}

fn default_directory() -> String {
    "docs/adr".to_string()
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

impl StampConfig {
    /// Find and read the nearest `.stamp.yaml`, returning it with the project root.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        let content = std::fs::read_to_string(&config_path)?;
        let config: StampConfig = if content.trim().is_empty() {
            StampConfig::default()
        } else {
            serde_yaml::from_str(&content)?
        };
        let project_root = config_path
            .parent()
            .ok_or_else(|| StampError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        tracing::debug!(config = %config_path.display(), "Loaded configuration");
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(StampError::NotInitialized);
            }
        }
    }

    pub fn adr_directory(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.directory)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
