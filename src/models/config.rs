//! Project configuration.
//!
//! `.forkmonkey/config.json` is also the initialization marker: the launcher
//! treats its presence as proof that `init` has already run.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding config and monkey state, relative to the project root
pub const STATE_DIR: &str = ".forkmonkey";

/// ForkMonkey configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForkMonkeyConfig {
    /// Project name
    pub project_name: String,

    /// Default web server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Web interface directory, relative to the project root
    #[serde(default = "default_web_dir")]
    pub web_dir: PathBuf,

    /// Git hook scripts directory, relative to the project root
    #[serde(default = "default_hooks_dir")]
    pub hooks_dir: PathBuf,
}

fn default_port() -> u16 {
    8000
}

fn default_web_dir() -> PathBuf {
    PathBuf::from("web")
}

fn default_hooks_dir() -> PathBuf {
    PathBuf::from("hooks")
}

impl Default for ForkMonkeyConfig {
    fn default() -> Self {
        Self {
            project_name: "forkmonkey".to_string(),
            port: default_port(),
            web_dir: default_web_dir(),
            hooks_dir: default_hooks_dir(),
        }
    }
}

impl ForkMonkeyConfig {
    /// Path of the config file (the marker file) under a project root
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(STATE_DIR).join("config.json")
    }

    /// Path of the monkey DNA file under a project root
    pub fn monkey_path(project_root: &Path) -> PathBuf {
        project_root.join(STATE_DIR).join("monkey.json")
    }

    /// Whether the project has been initialized
    pub fn exists(project_root: &Path) -> bool {
        Self::path(project_root).exists()
    }

    /// Load config, falling back to defaults when the file is absent
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        let config_path = Self::path(project_root);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: ForkMonkeyConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config, creating parent directories
    pub fn save(&self, project_root: &Path) -> anyhow::Result<()> {
        let config_path = Self::path(project_root);
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_when_missing() {
        let temp = TempDir::new().unwrap();
        let config = ForkMonkeyConfig::load(temp.path()).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.web_dir, PathBuf::from("web"));
        assert!(!ForkMonkeyConfig::exists(temp.path()));
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let config = ForkMonkeyConfig {
            project_name: "banana-stand".to_string(),
            port: 9001,
            ..Default::default()
        };
        config.save(temp.path()).unwrap();

        assert!(ForkMonkeyConfig::exists(temp.path()));
        let loaded = ForkMonkeyConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.project_name, "banana-stand");
        assert_eq!(loaded.port, 9001);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = ForkMonkeyConfig::path(temp.path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"project_name": "minimal"}"#).unwrap();

        let loaded = ForkMonkeyConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.project_name, "minimal");
        assert_eq!(loaded.port, 8000);
        assert_eq!(loaded.hooks_dir, PathBuf::from("hooks"));
    }
}
