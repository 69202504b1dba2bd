// changelog validator

use super::config::ChangelogConfig;
use super::parser::{classify_line, line_content};
use super::types::{Changelog, IssueKind, LineKind, ValidationIssue};
use crate::error::{Error, Result};
use semver::Version;
use std::collections::HashSet;
use tracing::debug;

/// check a version identifier against the dot-count rule
pub fn has_valid_dot_count(version: &str) -> bool {
    version.matches('.').count() == 2
}

/// walks lines and records grammar violations in document order
struct LineChecker<'a> {
    config: &'a ChangelogConfig,
    seen_versions: HashSet<String>,
    seen_title: bool,
}

impl<'a> LineChecker<'a> {
    fn new(config: &'a ChangelogConfig) -> Self {
        Self {
            config,
            seen_versions: HashSet::new(),
            seen_title: false,
        }
    }

    fn check(&mut self, line_number: usize, raw: &str) -> Option<ValidationIssue> {
        let content = line_content(raw);
        let kind = match classify_line(raw) {
            LineKind::Body | LineKind::SubHeading => return None,
            LineKind::MalformedHeading => IssueKind::MalformedHeading,
            LineKind::Title => {
                if content.trim() != self.config.title {
                    IssueKind::InvalidTitle
                } else if self.seen_title {
                    IssueKind::DuplicateTitle
                } else {
                    self.seen_title = true;
                    return None;
                }
            }
            LineKind::VersionHeading(_) if !content.contains(']') => {
                IssueKind::UnterminatedVersionHeading
            }
            LineKind::VersionHeading(version) => match self.check_version(&version) {
                Some(kind) => kind,
                None => return None,
            },
        };

        Some(ValidationIssue::new(kind, line_number, content))
    }

    fn check_version(&mut self, version: &str) -> Option<IssueKind> {
        if !self.seen_versions.insert(version.to_string()) {
            return Some(IssueKind::DuplicateVersion);
        }

        if self.config.is_unreleased(version) {
            return None;
        }

        if !has_valid_dot_count(version) {
            return Some(IssueKind::MalformedVersion);
        }

        if self.config.strict_semver && Version::parse(version).is_err() {
            return Some(IssueKind::NonSemverVersion);
        }

        None
    }
}

/// validate the heading grammar, failing on the first violation
pub fn validate_changelog(changelog: &Changelog, config: &ChangelogConfig) -> Result<()> {
    let mut checker = LineChecker::new(config);

    for (idx, line) in changelog.lines.iter().enumerate() {
        if let Some(issue) = checker.check(idx + 1, line) {
            debug!(line = issue.line_number, kind = ?issue.kind, "validation failed");
            return Err(Error::Validation {
                path: changelog.path.clone(),
                issue,
            });
        }
    }

    Ok(())
}

/// every grammar violation in the document, for reporting
pub fn collect_issues(changelog: &Changelog, config: &ChangelogConfig) -> Vec<ValidationIssue> {
    let mut checker = LineChecker::new(config);

    changelog
        .lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| checker.check(idx + 1, line))
        .collect()
}
