// changelog configuration

use serde::{Deserialize, Serialize};

/// configuration for changelog parsing and validation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// name of the changelog file (default: "CHANGELOG.md")
    pub changelog_file_name: String,

    /// the only allowed top-level heading
    pub title: String,

    /// sentinel version for changes not yet released, compared case-insensitively
    pub unreleased_label: String,

    /// additionally require every released version to parse as semver
    pub strict_semver: bool,
}

impl ChangelogConfig {
    /// create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changelog_file_name(mut self, name: impl Into<String>) -> Self {
        self.changelog_file_name = name.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn unreleased_label(mut self, label: impl Into<String>) -> Self {
        self.unreleased_label = label.into();
        self
    }

    pub fn strict_semver(mut self, strict: bool) -> Self {
        self.strict_semver = strict;
        self
    }

    /// check if a version identifier is the unreleased sentinel
    pub fn is_unreleased(&self, version: &str) -> bool {
        version.eq_ignore_ascii_case(&self.unreleased_label)
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            changelog_file_name: "CHANGELOG.md".to_string(),
            title: "# Changelog".to_string(),
            unreleased_label: "Unreleased".to_string(),
            strict_semver: false,
        }
    }
}

/// configuration for the should-release check
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// prefix joined to the version to form the tag name (default: "v")
    pub tag_prefix: String,
}

impl ReleaseConfig {
    pub fn tag_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tag_prefix = prefix.into();
        self
    }

    pub fn tag_name(&self, version: &str) -> String {
        format!("{}{}", self.tag_prefix, version)
    }
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            tag_prefix: "v".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreleased_is_case_insensitive() {
        let config = ChangelogConfig::default();
        assert!(config.is_unreleased("Unreleased"));
        assert!(config.is_unreleased("UNRELEASED"));
        assert!(config.is_unreleased("unreleased"));
        assert!(!config.is_unreleased("1.0.0"));
    }

    #[test]
    fn test_tag_name_uses_prefix() {
        assert_eq!(ReleaseConfig::default().tag_name("1.2.3"), "v1.2.3");
        assert_eq!(
            ReleaseConfig::default().tag_prefix("release-").tag_name("1.2.3"),
            "release-1.2.3"
        );
    }
}
