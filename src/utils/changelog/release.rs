// release decision

use super::config::{ChangelogConfig, ReleaseConfig};
use super::types::{Changelog, ReleaseDecision};
use super::validator::has_valid_dot_count;
use crate::error::Result;
use tracing::debug;

/// answers whether a tag already exists
pub trait TagLookup {
    fn tag_exists(&self, name: &str) -> Result<bool>;
}

impl<F> TagLookup for F
where
    F: Fn(&str) -> Result<bool>,
{
    fn tag_exists(&self, name: &str) -> Result<bool> {
        self(name)
    }
}

/// decide whether the latest changelog version should be tagged
pub fn should_release(
    changelog: &Changelog,
    tags: &dyn TagLookup,
    changelog_config: &ChangelogConfig,
    release_config: &ReleaseConfig,
) -> Result<ReleaseDecision> {
    let version = changelog.latest_version()?;

    if changelog_config.is_unreleased(&version) {
        debug!(%version, "latest section is unreleased");
        return Ok(ReleaseDecision::Unreleased);
    }

    if !has_valid_dot_count(&version) {
        debug!(%version, "latest version is malformed");
        return Ok(ReleaseDecision::MalformedVersion);
    }

    let tag = release_config.tag_name(&version);
    let exists = tags.tag_exists(&tag)?;
    debug!(%tag, exists, "checked release tag");

    if exists {
        Ok(ReleaseDecision::AlreadyTagged)
    } else {
        Ok(ReleaseDecision::Release)
    }
}
