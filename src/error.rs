use crate::utils::changelog::ValidationIssue;
use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    RepositoryNotFound {
        path: PathBuf,
    },
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    TomlParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    GitError(Box<dyn std::error::Error + Send + Sync>),
    GitDiscoverError(Box<gix::discover::Error>),
    IoError(std::io::Error),
    NoVersionHeading {
        path: PathBuf,
    },
    VersionNotFound {
        version: String,
    },
    TagLookup {
        tag: String,
        reason: String,
    },
    Validation {
        path: PathBuf,
        issue: ValidationIssue,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RepositoryNotFound { path } => {
                write!(f, "git repository not found in path: {}", path.display())
            }
            Error::FileReadError { path, source } => {
                write!(f, "failed to read file: {} ({})", path.display(), source)
            }
            Error::TomlParseError { path, source } => {
                write!(
                    f,
                    "failed to parse toml file: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::GitError(err) => {
                write!(f, "git error: {}", err)
            }
            Error::GitDiscoverError(err) => {
                write!(f, "git discover error: {}", err)
            }
            Error::IoError(err) => {
                write!(f, "io error: {}", err)
            }
            Error::NoVersionHeading { path } => {
                write!(f, "no version heading found in {}", path.display())
            }
            Error::VersionNotFound { version } => {
                write!(f, "version not found in changelog: {}", version)
            }
            Error::TagLookup { tag, reason } => {
                write!(f, "failed to look up tag {}: {}", tag, reason)
            }
            Error::Validation { path, issue } => {
                write!(
                    f,
                    "changelog validation failed at {}:{}: {}",
                    path.display(),
                    issue.line_number,
                    issue.kind
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileReadError { source, .. } => Some(source),
            Error::TomlParseError { source, .. } => Some(source),
            Error::GitError(err) => Some(err.as_ref()),
            Error::GitDiscoverError(err) => Some(err.as_ref()),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<gix::discover::Error> for Error {
    fn from(err: gix::discover::Error) -> Self {
        Error::GitDiscoverError(Box::new(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}
