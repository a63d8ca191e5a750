//! Repository UI configuration.
//!
//! Stored as JSON under `~/.winery/winery.json`:
//!
//! ```json
//! { "ui": { "features": { "splitting": true }, "endpoints": { "quaz": "http://quaz:8080" } } }
//! ```
//!
//! This file is separate from the repository backend's own `winery.yml` in
//! the same directory. Nothing here reads or writes the YAML file, so feature
//! flags set there must be mirrored with `features --enable/--disable`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::features::Feature;

pub const CONFIG_DIR_NAME: &str = ".winery";
pub const CONFIG_FILE_NAME: &str = "winery.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfiguration {
    pub features: BTreeMap<String, bool>,
    pub endpoints: BTreeMap<String, String>,
}

impl Default for UiConfiguration {
    fn default() -> Self {
        Self {
            features: Feature::ALL
                .iter()
                .map(|feature| (feature.key().to_string(), false))
                .collect(),
            endpoints: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfiguration {
    pub ui: UiConfiguration,
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl RepositoryConfiguration {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse configuration {}", path.display()))
    }

    /// Loads `path`, writing the default configuration there first if the
    /// file does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.is_file() {
            return Self::load(path);
        }

        let config = Self::default();
        config.save(path)?;
        tracing::info!("Created default configuration at {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write configuration {}", path.display()))
    }

    pub fn set_feature(&mut self, key: &str, enabled: bool) {
        self.ui.features.insert(key.to_string(), enabled);
    }

    pub fn endpoint(&self, name: &str) -> Option<&str> {
        self.ui.endpoints.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_create_writes_default_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);

        let config = RepositoryConfiguration::load_or_create(&path).unwrap();

        assert!(path.is_file());
        assert_eq!(config, RepositoryConfiguration::default());
        assert_eq!(config.ui.features.get("splitting"), Some(&false));
    }

    #[test]
    fn test_load_reads_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"{"ui": {"features": {"foo": true, "bar": false}, "endpoints": {"quaz": "http://quaz:8080"}}}"#,
        )
        .unwrap();

        let config = RepositoryConfiguration::load(&path).unwrap();

        assert_eq!(config.ui.features.get("foo"), Some(&true));
        assert_eq!(config.ui.features.get("bar"), Some(&false));
        assert_eq!(config.endpoint("quaz"), Some("http://quaz:8080"));
        assert_eq!(config.endpoint("missing"), None);
    }

    #[test]
    fn test_save_persists_changes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        let mut config = RepositoryConfiguration::load_or_create(&path).unwrap();

        config.set_feature("foo", false);
        config.set_feature("bar", true);
        config
            .ui
            .endpoints
            .insert("quaz".to_string(), String::new());
        config.save(&path).unwrap();

        let reloaded = RepositoryConfiguration::load(&path).unwrap();
        assert_eq!(reloaded.ui.features.get("foo"), Some(&false));
        assert_eq!(reloaded.ui.features.get("bar"), Some(&true));
        assert_eq!(reloaded.endpoint("quaz"), Some(""));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{}").unwrap();

        let config = RepositoryConfiguration::load(&path).unwrap();

        assert_eq!(config, RepositoryConfiguration::default());
    }

    #[test]
    fn test_creating_config_leaves_backend_yaml_alone() {
        let temp_dir = TempDir::new().unwrap();
        let backend_yaml = temp_dir.path().join("winery.yml");
        fs::write(&backend_yaml, "ui:\n  features:\n    foo: true\n").unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);

        let config = RepositoryConfiguration::load_or_create(&path).unwrap();

        assert_ne!(path, backend_yaml);
        assert_eq!(config.ui.features.get("foo"), None);
        assert_eq!(
            fs::read_to_string(&backend_yaml).unwrap(),
            "ui:\n  features:\n    foo: true\n"
        );
        assert!(
            default_config_path()
                .map_or(true, |default| default.ends_with(".winery/winery.json"))
        );
    }

    #[test]
    fn test_invalid_json_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "not json").unwrap();

        let error = RepositoryConfiguration::load(&path).unwrap_err();

        assert!(error.to_string().contains("Failed to parse configuration"));
    }
}
