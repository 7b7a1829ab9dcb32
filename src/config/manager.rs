use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::Settings;
use super::validator::SettingsValidator;
use crate::error::{GroupwiseError, Result};
use crate::logging;

/// Environment variable that points at a settings file.
pub const CONFIG_ENV_VAR: &str = "GROUPWISE_CONFIG";

const CONFIG_FILE_NAME: &str = "settings.json";

/// Where the settings path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Flag(PathBuf),
    Env(PathBuf),
    Default(PathBuf),
    /// No config directory could be determined for this platform.
    BuiltIn,
}

/// Resolves, loads and initializes the settings file.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    source: ConfigSource,
}

impl ConfigManager {
    /// Resolve the settings location: explicit flag, then env var, then platform default.
    pub fn resolve(flag: Option<&Path>) -> Self {
        let source = if let Some(path) = flag {
            ConfigSource::Flag(path.to_path_buf())
        } else if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
            ConfigSource::Env(PathBuf::from(path))
        } else if let Some(path) = Self::default_config_path() {
            ConfigSource::Default(path)
        } else {
            ConfigSource::BuiltIn
        };
        Self { source }
    }

    pub fn with_source(source: ConfigSource) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            ConfigSource::Flag(path) | ConfigSource::Env(path) | ConfigSource::Default(path) => {
                Some(path)
            }
            ConfigSource::BuiltIn => None,
        }
    }

    /// True when the user named the file, so a missing file is an error.
    fn is_explicit(&self) -> bool {
        matches!(self.source, ConfigSource::Flag(_) | ConfigSource::Env(_))
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "groupwise", "groupwise")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load effective settings.
    ///
    /// A missing default file yields built-in defaults; a missing explicit file fails.
    pub fn load(&self) -> Result<Settings> {
        let Some(path) = self.path() else {
            logging::log_config_loaded(None, false);
            return Ok(Settings::default());
        };

        if !path.exists() {
            if self.is_explicit() {
                return Err(GroupwiseError::config_error(
                    path.display().to_string(),
                    "Settings file does not exist",
                ));
            }
            logging::log_config_loaded(Some(path), false);
            return Ok(Settings::default());
        }

        let settings = load_from_path(path)?;
        logging::log_config_loaded(Some(path), true);
        Ok(settings)
    }

    /// Write default settings to the resolved path.
    pub fn init(&self, force: bool) -> Result<PathBuf> {
        let path = self.path().ok_or_else(|| {
            GroupwiseError::config_error(
                "<none>",
                "Could not determine a config directory; pass --config",
            )
        })?;

        if path.exists() && !force {
            return Err(GroupwiseError::config_error(
                path.display().to_string(),
                "Settings file already exists; use --force to overwrite",
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                GroupwiseError::io_error(
                    "create config directory",
                    Some(parent.display().to_string()),
                    e,
                )
            })?;
        }

        let json = serde_json::to_string_pretty(&Settings::default())
            .map_err(|e| anyhow::anyhow!("Failed to serialize settings: {}", e))?;
        fs::write(path, json).map_err(|e| {
            GroupwiseError::io_error("write settings", Some(path.display().to_string()), e)
        })?;

        tracing::info!(path = %path.display(), "Wrote default settings");
        Ok(path.to_path_buf())
    }
}

/// Read, parse and validate a settings file.
pub fn load_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        GroupwiseError::io_error("read settings", Some(path.display().to_string()), e)
    })?;

    let settings: Settings = serde_json::from_str(&content).map_err(|e| {
        GroupwiseError::config_error(path.display().to_string(), format!("Invalid JSON: {e}"))
    })?;

    SettingsValidator::validate(&settings).map_err(|errors| {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        GroupwiseError::config_error(path.display().to_string(), message)
    })?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_default_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let manager =
            ConfigManager::with_source(ConfigSource::Default(dir.path().join("settings.json")));
        assert_eq!(manager.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_source(ConfigSource::Flag(dir.path().join("nope.json")));
        assert!(matches!(
            manager.load(),
            Err(GroupwiseError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_built_in_source() {
        let manager = ConfigManager::with_source(ConfigSource::BuiltIn);
        assert!(manager.path().is_none());
        assert_eq!(manager.load().unwrap(), Settings::default());
        assert!(manager.init(false).is_err());
    }

    #[test]
    fn test_load_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"participants": 10, "group_size": 3, "extended": true}"#).unwrap();

        let settings = load_from_path(&path).unwrap();
        assert_eq!(settings.participants, 10);
        assert_eq!(settings.group_size, 3);
        assert!(settings.extended);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        match load_from_path(&path) {
            Err(GroupwiseError::ConfigError { message, .. }) => {
                assert!(message.contains("Invalid JSON"))
            }
            other => panic!("Expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"group_size": 0}"#).unwrap();

        match load_from_path(&path) {
            Err(GroupwiseError::ConfigError { message, .. }) => {
                assert!(message.contains("group_size"))
            }
            other => panic!("Expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn test_init_writes_and_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let manager = ConfigManager::with_source(ConfigSource::Flag(path.clone()));

        assert_eq!(manager.init(false).unwrap(), path);
        assert_eq!(load_from_path(&path).unwrap(), Settings::default());
        assert!(manager.init(false).is_err());
        assert!(manager.init(true).is_ok());
    }
}
