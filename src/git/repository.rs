use crate::error::{ReleaseError, Result};
use crate::git::RootLocator;
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Locates the root through libgit2 repository discovery
#[derive(Debug, Clone)]
pub struct Git2Locator {
    start: PathBuf,
}

impl Git2Locator {
    /// Discover upward from `start`
    pub fn new(start: impl AsRef<Path>) -> Self {
        Git2Locator {
            start: start.as_ref().to_path_buf(),
        }
    }
}

impl RootLocator for Git2Locator {
    fn locate(&self) -> Result<PathBuf> {
        let repo = Git2Repo::discover(&self.start)?;

        let workdir = repo.workdir().ok_or_else(|| {
            ReleaseError::git_root(format!(
                "repository at {} has no working directory",
                repo.path().display()
            ))
        })?;

        // workdir() carries a trailing separator
        Ok(workdir.components().collect())
    }
}
