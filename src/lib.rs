pub mod error;
pub mod utils;

pub use error::*;
pub use utils::changelog::{
    Changelog, ChangelogConfig, IssueKind, LineKind, ReleaseConfig, ReleaseDecision, TagLookup,
    ValidationIssue, VersionEntry, classify_line, collect_issues, parse_changelog,
    parse_changelog_str, should_release, validate_changelog,
};
pub use utils::config::RelnotesConfig;
pub use utils::git_ops::GitOps;
