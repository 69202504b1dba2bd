use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;

pub struct GitOps;

impl GitOps {
    /// check whether `refs/tags/<name>` exists in the repository at `repo_path`
    pub fn tag_exists<P: AsRef<Path>>(repo_path: P, name: &str) -> Result<bool> {
        let repo = gix::discover(Self::discovery_path(repo_path.as_ref())?)?;
        let full_name = format!("refs/tags/{}", name);

        // a name git would reject can never exist as a tag
        if gix::refs::FullName::try_from(full_name.as_str()).is_err() {
            debug!(tag = name, "not a valid ref name, treating as absent");
            return Ok(false);
        }

        let reference = repo
            .try_find_reference(&full_name)
            .map_err(|e| Error::TagLookup {
                tag: name.to_string(),
                reason: e.to_string(),
            })?;

        debug!(
            git_dir = %repo.git_dir().display(),
            tag = name,
            found = reference.is_some(),
            "looked up tag"
        );
        Ok(reference.is_some())
    }

    // if it's a file, use its parent directory for discovery
    fn discovery_path(path: &Path) -> Result<&Path> {
        if path.is_file() {
            path.parent().ok_or_else(|| Error::RepositoryNotFound {
                path: path.to_path_buf(),
            })
        } else {
            Ok(path)
        }
    }
}
