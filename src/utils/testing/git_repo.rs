use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// scratch git repository driven through the `git` command line
pub struct TestGitRepo {
    repo_path: PathBuf,
}

impl TestGitRepo {
    /// initialize a new repository at the given path
    pub fn init<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Self {
            repo_path: path.as_ref().to_path_buf(),
        };

        repo.git(&["init"])?;
        repo.git(&["config", "user.name", "Test User"])?;
        repo.git(&["config", "user.email", "test@example.com"])?;
        // disable signing, a global config may require it
        repo.git(&["config", "commit.gpgsign", "false"])?;
        repo.git(&["config", "tag.gpgsign", "false"])?;

        Ok(repo)
    }

    /// write a file relative to the repository root
    pub fn write_file(&self, file_path: &str, content: &str) -> Result<PathBuf> {
        let full_path = self.repo_path.join(file_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&full_path, content)?;
        Ok(full_path)
    }

    /// stage everything and commit
    pub fn commit_all(&self, message: &str) -> Result<()> {
        self.git(&["add", "."])?;
        self.git(&["commit", "-m", message])
    }

    /// create a lightweight tag on HEAD
    pub fn tag(&self, name: &str) -> Result<()> {
        self.git(&["tag", name])
    }

    /// create an annotated tag on HEAD
    pub fn annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        self.git(&["tag", "-a", name, "-m", message])
    }

    pub fn path(&self) -> &Path {
        &self.repo_path
    }

    fn git(&self, args: &[&str]) -> Result<()> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()?;

        if !output.status.success() {
            return Err(Error::GitError(Box::new(std::io::Error::other(format!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr)
            )))));
        }

        Ok(())
    }
}
