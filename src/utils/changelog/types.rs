// changelog data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// classification of a single changelog line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `# ...` top-level heading
    Title,
    /// `## [<identifier>]`
    VersionHeading(String),
    /// `### ...`, ignored by extraction
    SubHeading,
    /// `##` heading that is neither a version nor a sub-heading
    MalformedHeading,
    Body,
}

/// a version heading and the span of lines belonging to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub version: String,
    /// 1-based line of the heading
    pub line_number: usize,
    /// index one past the last line of this entry
    #[serde(skip)]
    pub end: usize,
}

impl VersionEntry {
    pub fn new(version: String, line_number: usize, end: usize) -> Self {
        Self {
            version,
            line_number,
            end,
        }
    }

    pub fn start(&self) -> usize {
        self.line_number - 1
    }
}

/// a changelog file held in memory
///
/// lines keep their original terminators, so joining any range of them
/// reproduces the source text exactly.
#[derive(Debug, Clone)]
pub struct Changelog {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl Changelog {
    pub fn new(path: PathBuf, lines: Vec<String>) -> Self {
        Self { path, lines }
    }

    /// concatenate lines in `start..end` verbatim
    pub fn text(&self, start: usize, end: usize) -> String {
        self.lines[start..end].concat()
    }
}

/// outcome of the should-release check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseDecision {
    /// a tag for the latest version is missing, so it should be released
    Release,
    /// the latest version is already tagged
    AlreadyTagged,
    /// the latest section is the unreleased sentinel
    Unreleased,
    /// the latest version does not have exactly two dots
    MalformedVersion,
}

impl ReleaseDecision {
    pub fn should_release(&self) -> bool {
        matches!(self, ReleaseDecision::Release)
    }

    /// `MalformedVersion` is an error even though nothing gets released
    pub fn is_error(&self) -> bool {
        matches!(self, ReleaseDecision::MalformedVersion)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    MalformedHeading,
    UnterminatedVersionHeading,
    InvalidTitle,
    DuplicateTitle,
    MalformedVersion,
    DuplicateVersion,
    NonSemverVersion,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::MalformedHeading => {
                write!(f, "heading must be '## [<version>]' or '### <section>'")
            }
            IssueKind::UnterminatedVersionHeading => {
                write!(f, "version heading is missing its closing ']'")
            }
            IssueKind::InvalidTitle => write!(f, "unexpected top-level heading"),
            IssueKind::DuplicateTitle => write!(f, "title appears more than once"),
            IssueKind::MalformedVersion => {
                write!(f, "version must contain exactly two '.' separators")
            }
            IssueKind::DuplicateVersion => write!(f, "version appears more than once"),
            IssueKind::NonSemverVersion => write!(f, "version is not valid semver"),
        }
    }
}

/// a grammar violation found on one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub line_number: usize,
    /// offending line without its terminator
    pub line: String,
}

impl ValidationIssue {
    pub fn new(kind: IssueKind, line_number: usize, line: impl Into<String>) -> Self {
        Self {
            kind,
            line_number,
            line: line.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.kind)
    }
}
