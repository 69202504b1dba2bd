use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser};
use relnotes::{
    Changelog, Error, GitOps, ReleaseDecision, RelnotesConfig, collect_issues, parse_changelog,
    should_release, validate_changelog,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "relnotes")]
#[command(version, about = "changelog queries and checks for release pipelines", long_about = None)]
struct Cli {
    /// path to the changelog (defaults to the configured file name, CHANGELOG.md)
    file: Option<PathBuf>,

    /// repository used to look up release tags
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// configuration file (defaults to relnotes.toml in the current directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// output format for --list-versions and --validate-changelog (json or human)
    #[arg(short, long, default_value = "human")]
    format: OutputFormat,

    /// enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    mode: ModeArgs,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Json,
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" => Ok(OutputFormat::Human),
            _ => Err(format!(
                "invalid output format: {}, use 'json' or 'human'",
                s
            )),
        }
    }
}

#[derive(Args)]
#[group(multiple = false)]
struct ModeArgs {
    /// print the latest version identifier
    #[arg(long)]
    print_latest_version: bool,

    /// print 1 if the latest version is untagged and should be released, else 0
    #[arg(long)]
    should_release: bool,

    /// print the changelog from the top through the latest version section
    #[arg(long)]
    print_changelog_from_last_release: bool,

    /// print the changelog up to the previous version heading
    #[arg(long)]
    print_changelog_until_previous_version: bool,

    /// check the heading grammar of the changelog
    #[arg(long)]
    validate_changelog: bool,

    /// list every version heading with its line number
    #[arg(long)]
    list_versions: bool,

    /// print the section of a single version
    #[arg(long, value_name = "VERSION")]
    print_version: Option<String>,
}

enum Mode {
    LatestVersion,
    ShouldRelease,
    SinceLastRelease,
    UntilPreviousVersion,
    Validate,
    ListVersions,
    Version(String),
}

impl ModeArgs {
    fn selected(self) -> Option<Mode> {
        if self.print_latest_version {
            Some(Mode::LatestVersion)
        } else if self.should_release {
            Some(Mode::ShouldRelease)
        } else if self.print_changelog_from_last_release {
            Some(Mode::SinceLastRelease)
        } else if self.print_changelog_until_previous_version {
            Some(Mode::UntilPreviousVersion)
        } else if self.validate_changelog {
            Some(Mode::Validate)
        } else if self.list_versions {
            Some(Mode::ListVersions)
        } else {
            self.print_version.map(Mode::Version)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let Some(mode) = cli.mode.selected() else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = RelnotesConfig::resolve(cli.config.as_deref(), ".")
        .context("failed to load configuration")?;

    let path = cli
        .file
        .unwrap_or_else(|| PathBuf::from(&config.changelog.changelog_file_name));
    let changelog = parse_changelog(&path)?;

    match mode {
        Mode::LatestVersion => {
            emit(&changelog.latest_version()?)?;
        }
        Mode::ShouldRelease => {
            return handle_should_release(&changelog, &cli.repo, &config);
        }
        Mode::SinceLastRelease => {
            emit(&changelog.changelog_since_last_release())?;
        }
        Mode::UntilPreviousVersion => {
            emit(&changelog.changelog_until_previous_version())?;
        }
        Mode::Validate => {
            return handle_validate(&changelog, &config, &cli.format);
        }
        Mode::ListVersions => {
            handle_list_versions(&changelog, &cli.format)?;
        }
        Mode::Version(version) => {
            emit(&changelog.version_section(&version)?)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// write to stdout without a trailing newline
fn emit(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn handle_should_release(
    changelog: &Changelog,
    repo: &Path,
    config: &RelnotesConfig,
) -> Result<ExitCode> {
    // the repository is only opened once a tag actually needs checking
    let tags = |name: &str| GitOps::tag_exists(repo, name);

    let decision = should_release(changelog, &tags, &config.changelog, &config.release)
        .with_context(|| format!("failed to check release tags in {}", repo.display()))?;
    debug!(?decision, "release decision");

    emit(if decision.should_release() { "1" } else { "0" })?;

    if decision == ReleaseDecision::MalformedVersion {
        eprintln!(
            "latest version '{}' must contain exactly two '.' separators",
            changelog.latest_version()?
        );
    }

    if decision.is_error() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn handle_validate(
    changelog: &Changelog,
    config: &RelnotesConfig,
    format: &OutputFormat,
) -> Result<ExitCode> {
    match format {
        OutputFormat::Json => {
            let issues = collect_issues(changelog, &config.changelog);
            println!("{}", serde_json::to_string_pretty(&issues)?);
            if issues.is_empty() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        OutputFormat::Human => match validate_changelog(changelog, &config.changelog) {
            Ok(()) => Ok(ExitCode::SUCCESS),
            Err(Error::Validation { path, issue }) => {
                println!(
                    "invalid changelog {}:{}: {}",
                    path.display(),
                    issue.line_number,
                    issue.kind
                );
                println!("{}", issue.line);
                Ok(ExitCode::FAILURE)
            }
            Err(e) => Err(e.into()),
        },
    }
}

fn handle_list_versions(changelog: &Changelog, format: &OutputFormat) -> Result<()> {
    let versions = changelog.versions();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&versions)?);
        }
        OutputFormat::Human => {
            for entry in &versions {
                println!("{}\t{}", entry.version, entry.line_number);
            }
        }
    }

    Ok(())
}
