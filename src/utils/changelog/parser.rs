// changelog parser

use super::types::{Changelog, LineKind, VersionEntry};
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const VERSION_PREFIX: &str = "## [";

/// strip the line terminator kept by the loader
pub(crate) fn line_content(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// classify a single line of a changelog
pub fn classify_line(line: &str) -> LineKind {
    let line = line_content(line);

    if let Some(rest) = line.strip_prefix(VERSION_PREFIX) {
        // without a closing bracket the identifier runs to the end of the line
        let version = rest.split(']').next().unwrap_or(rest);
        return LineKind::VersionHeading(version.to_string());
    }

    if line.starts_with("###") {
        return LineKind::SubHeading;
    }

    if line.starts_with("##") {
        return LineKind::MalformedHeading;
    }

    if line.starts_with('#') {
        return LineKind::Title;
    }

    LineKind::Body
}

/// parse a changelog file
pub fn parse_changelog<P: AsRef<Path>>(path: P) -> Result<Changelog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let changelog = parse_changelog_str(path, &content);
    debug!(
        path = %path.display(),
        lines = changelog.lines.len(),
        "loaded changelog"
    );
    Ok(changelog)
}

/// build a changelog from already loaded text
pub fn parse_changelog_str<P: Into<PathBuf>>(path: P, content: &str) -> Changelog {
    let lines = content.split_inclusive('\n').map(String::from).collect();
    Changelog::new(path.into(), lines)
}

impl Changelog {
    /// indices of every version heading, in document order
    fn version_heading_indices(&self) -> impl Iterator<Item = (usize, String)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| match classify_line(line) {
                LineKind::VersionHeading(version) => Some((idx, version)),
                _ => None,
            })
    }

    /// identifier of the first version heading
    pub fn latest_version(&self) -> Result<String> {
        self.version_heading_indices()
            .next()
            .map(|(_, version)| version)
            .ok_or_else(|| Error::NoVersionHeading {
                path: self.path.clone(),
            })
    }

    /// everything from the start of the document through the latest version
    /// section, stopping before the second version heading
    pub fn changelog_since_last_release(&self) -> String {
        let end = self
            .version_heading_indices()
            .nth(1)
            .map(|(idx, _)| idx)
            .unwrap_or(self.lines.len());
        self.text(0, end)
    }

    /// the notes preceding the previous version heading
    ///
    /// this is the same span as [`Changelog::changelog_since_last_release`]:
    /// the title, the newest section heading and its body.
    pub fn changelog_until_previous_version(&self) -> String {
        self.changelog_since_last_release()
    }

    /// every version section, newest first
    pub fn versions(&self) -> Vec<VersionEntry> {
        let headings: Vec<(usize, String)> = self.version_heading_indices().collect();

        headings
            .iter()
            .enumerate()
            .map(|(i, (idx, version))| {
                let end = headings
                    .get(i + 1)
                    .map(|(next, _)| *next)
                    .unwrap_or(self.lines.len());
                VersionEntry::new(version.clone(), idx + 1, end)
            })
            .collect()
    }

    /// verbatim text of the section for `version`, heading included
    pub fn version_section(&self, version: &str) -> Result<String> {
        let entry = self
            .versions()
            .into_iter()
            .find(|entry| entry.version == version)
            .ok_or_else(|| Error::VersionNotFound {
                version: version.to_string(),
            })?;

        Ok(self.text(entry.start(), entry.end))
    }
}
