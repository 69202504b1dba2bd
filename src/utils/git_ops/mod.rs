pub mod repository;

pub use repository::GitOps;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_tag_missing_in_empty_repo() {
        let temp_dir = TempDir::new().unwrap();
        gix::init(temp_dir.path()).unwrap();

        assert!(!GitOps::tag_exists(temp_dir.path(), "v1.0.0").unwrap());
    }

    #[test]
    fn test_invalid_ref_name_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        gix::init(temp_dir.path()).unwrap();

        assert!(!GitOps::tag_exists(temp_dir.path(), "v1.0.0 rc").unwrap());
        assert!(!GitOps::tag_exists(temp_dir.path(), "v1.0.0..1").unwrap());
    }

    #[test]
    fn test_tag_lookup_from_file_path() {
        let temp_dir = TempDir::new().unwrap();
        gix::init(temp_dir.path()).unwrap();
        let changelog = temp_dir.path().join("CHANGELOG.md");
        fs::write(&changelog, "# Changelog\n").unwrap();

        assert!(!GitOps::tag_exists(&changelog, "v1.0.0").unwrap());
    }

    #[test]
    fn test_tag_lookup_outside_repository_fails() {
        let temp_dir = TempDir::new().unwrap();

        let result = GitOps::tag_exists(temp_dir.path(), "v1.0.0");
        assert!(matches!(result, Err(Error::GitDiscoverError(_))));
    }
}
