// changelog parsing, validation and release checks

pub mod config;
pub mod parser;
pub mod release;
pub mod types;
pub mod validator;

pub use config::{ChangelogConfig, ReleaseConfig};
pub use parser::{classify_line, parse_changelog, parse_changelog_str};
pub use release::{TagLookup, should_release};
pub use types::{
    Changelog, IssueKind, LineKind, ReleaseDecision, ValidationIssue, VersionEntry,
};
pub use validator::{collect_issues, has_valid_dot_count, validate_changelog};
