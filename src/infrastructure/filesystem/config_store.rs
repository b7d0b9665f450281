use crate::common::templates::get_config_template;
use crate::domain::value_objects::scm_type::ScmType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration store related errors
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    #[error("Configuration file read failed: {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Configuration file write failed: {path}: {message}")]
    WriteFailed { path: String, message: String },

    #[error("YAML parsing failed in {path}: {message}")]
    YamlParsingFailed { path: String, message: String },

    #[error("YAML serialization failed: {0}")]
    YamlSerializationFailed(String),

    #[error("Configuration file already exists: {0}. Use --force to overwrite.")]
    AlreadyExists(String),

    #[error("Configuration directory creation failed: {0}")]
    DirectoryCreationFailed(String),

    #[error("No configuration directory could be determined for this platform")]
    NoConfigDirectory,
}

/// User preferences read from `config.yaml`
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Directory receiving checkouts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_dir: Option<PathBuf>,

    /// Default provider name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Preferred SCM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm: Option<ScmType>,

    /// Username for developer access
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Read-only check-out unless disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymous: Option<bool>,

    /// Abort the SCM client after this many seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

impl ImportConfig {
    /// Projects directory with a leading `~` expanded
    pub fn resolved_projects_dir(&self) -> Option<PathBuf> {
        self.projects_dir.as_deref().map(expand_home)
    }
}

/// Replace a leading `~` with the user's home directory
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Loads and stores [`ImportConfig`] as YAML
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// `forge-import/config.yaml` under the platform configuration directory
    /// (`$XDG_CONFIG_HOME` or `~/.config` on Linux)
    pub fn default_path() -> Result<PathBuf, ConfigStoreError> {
        let base = dirs::config_dir().ok_or(ConfigStoreError::NoConfigDirectory)?;
        Ok(base.join("forge-import").join("config.yaml"))
    }

    /// Read the configuration; a missing file yields the defaults
    pub fn load<P: AsRef<Path>>(&self, config_path: P) -> Result<ImportConfig, ConfigStoreError> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            tracing::debug!("No configuration at {}, using defaults", config_path.display());
            return Ok(ImportConfig::default());
        }

        let contents =
            fs::read_to_string(config_path).map_err(|e| ConfigStoreError::ReadFailed {
                path: config_path.display().to_string(),
                message: e.to_string(),
            })?;

        // An empty file (or one with only comments) parses as null
        if contents.trim().is_empty() {
            return Ok(ImportConfig::default());
        }

        let config: Option<ImportConfig> =
            serde_yaml::from_str(&contents).map_err(|e| ConfigStoreError::YamlParsingFailed {
                path: config_path.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!("Loaded configuration from {}", config_path.display());
        Ok(config.unwrap_or_default())
    }

    /// Write the configuration, creating parent directories
    pub fn save<P: AsRef<Path>>(
        &self,
        config_path: P,
        config: &ImportConfig,
    ) -> Result<(), ConfigStoreError> {
        let yaml_content = serde_yaml::to_string(config)
            .map_err(|e| ConfigStoreError::YamlSerializationFailed(e.to_string()))?;
        self.write_file(config_path.as_ref(), &yaml_content)
    }

    /// Write the commented template; refuses to overwrite unless `force`
    pub fn init<P: AsRef<Path>>(&self, config_path: P, force: bool) -> Result<(), ConfigStoreError> {
        let config_path = config_path.as_ref();

        if config_path.exists() && !force {
            return Err(ConfigStoreError::AlreadyExists(
                config_path.display().to_string(),
            ));
        }

        self.write_file(config_path, get_config_template())
    }

    fn write_file(&self, config_path: &Path, contents: &str) -> Result<(), ConfigStoreError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigStoreError::DirectoryCreationFailed(e.to_string()))?;
        }

        fs::write(config_path, contents).map_err(|e| ConfigStoreError::WriteFailed {
            path: config_path.display().to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigStore::new()
            .load(temp_dir.path().join("config.yaml"))
            .unwrap();
        assert_eq!(config, ImportConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(
            &path,
            "projects_dir: /work\nprovider: BerliOS\nscm: hg\nusername: alice\nanonymous: false\ntimeout_seconds: 60\n",
        )
        .unwrap();

        let config = ConfigStore::new().load(&path).unwrap();
        assert_eq!(
            config,
            ImportConfig {
                projects_dir: Some(PathBuf::from("/work")),
                provider: Some("BerliOS".to_string()),
                scm: Some(ScmType::Hg),
                username: Some("alice".to_string()),
                anonymous: Some(false),
                timeout_seconds: Some(60),
            }
        );
    }

    #[test]
    fn test_comment_only_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "# nothing here\n").unwrap();

        assert_eq!(ConfigStore::new().load(&path).unwrap(), ImportConfig::default());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "scm: [unclosed\n").unwrap();

        let err = ConfigStore::new().load(&path).unwrap_err();
        assert!(matches!(err, ConfigStoreError::YamlParsingFailed { .. }));
    }

    #[test]
    fn test_unknown_scm_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "scm: cvs\n").unwrap();

        assert!(ConfigStore::new().load(&path).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.yaml");
        let config = ImportConfig {
            provider: Some("Gitorious".to_string()),
            scm: Some(ScmType::Git),
            ..ImportConfig::default()
        };

        let store = ConfigStore::new();
        store.save(&path, &config).unwrap();
        assert_eq!(store.load(&path).unwrap(), config);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        let store = ConfigStore::new();

        store.init(&path, false).unwrap();
        assert!(matches!(
            store.init(&path, false),
            Err(ConfigStoreError::AlreadyExists(_))
        ));
        store.init(&path, true).unwrap();

        let config = store.load(&path).unwrap();
        assert_eq!(config.provider.as_deref(), Some("Sourceforge"));
    }

    #[test]
    fn test_expand_home_uses_home_directory() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/projects")), home.join("projects"));
            assert_eq!(expand_home(Path::new("~")), home);
        }
    }

    #[test]
    fn test_default_path_is_under_config_dir() {
        if let Some(config_dir) = dirs::config_dir() {
            assert_eq!(
                ConfigStore::default_path().unwrap(),
                config_dir.join("forge-import").join("config.yaml")
            );
        }
    }

    #[test]
    fn test_expand_home_leaves_plain_paths() {
        assert_eq!(expand_home(Path::new("/abs/dir")), PathBuf::from("/abs/dir"));
        assert_eq!(expand_home(Path::new("rel")), PathBuf::from("rel"));
    }
}
