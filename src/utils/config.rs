use super::changelog::{ChangelogConfig, ReleaseConfig};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "relnotes.toml";

/// main configuration for relnotes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelnotesConfig {
    /// changelog parsing and validation rules
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// release tag settings
    #[serde(default)]
    pub release: ReleaseConfig,
}

impl RelnotesConfig {
    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: RelnotesConfig =
            toml::from_str(&contents).map_err(|e| Error::TomlParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// load an explicit config file, or `relnotes.toml` from `search_dir`,
    /// or fall back to defaults when neither exists
    pub fn resolve<P: AsRef<Path>>(explicit: Option<&Path>, search_dir: P) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match Self::find_config_file(search_dir) {
            Some(config_path) => Self::load_from_file(config_path),
            None => Ok(Self::default()),
        }
    }

    /// find configuration file in a directory
    pub fn find_config_file<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
        let config_path = dir.as_ref().join(CONFIG_FILE_NAME);

        if config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let temp_dir = TempDir::new().unwrap();

        let config = RelnotesConfig::resolve(None, temp_dir.path()).unwrap();
        assert_eq!(config.changelog.changelog_file_name, "CHANGELOG.md");
        assert_eq!(config.changelog.title, "# Changelog");
        assert_eq!(config.release.tag_prefix, "v");
        assert!(!config.changelog.strict_semver);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[changelog]\nstrict_semver = true\n\n[release]\ntag_prefix = \"release-\"\n",
        )
        .unwrap();

        let config = RelnotesConfig::resolve(None, temp_dir.path()).unwrap();
        assert!(config.changelog.strict_semver);
        assert_eq!(config.changelog.unreleased_label, "Unreleased");
        assert_eq!(config.release.tag_prefix, "release-");
    }

    #[test]
    fn test_explicit_path_wins() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[release]\ntag_prefix = \"ignored-\"\n",
        )
        .unwrap();
        let explicit = temp_dir.path().join("custom.toml");
        fs::write(&explicit, "[changelog]\nchangelog_file_name = \"NEWS.md\"\n").unwrap();

        let config = RelnotesConfig::resolve(Some(&explicit), temp_dir.path()).unwrap();
        assert_eq!(config.changelog.changelog_file_name, "NEWS.md");
        assert_eq!(config.release.tag_prefix, "v");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "[changelog\n").unwrap();

        let result = RelnotesConfig::resolve(None, temp_dir.path());
        assert!(matches!(result, Err(Error::TomlParseError { .. })));
    }
}
