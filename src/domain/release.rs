use crate::domain::Environment;
use crate::error::{ReleaseError, Result};
use crate::paths::ReleasePaths;
use std::fs;

/// One versioned release of a branch (e.g. branch "1-20", number "1")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    branch: String,
    number: String,
}

impl Release {
    /// Create a release, rejecting empty branch or number
    pub fn new(branch: impl Into<String>, number: impl Into<String>) -> Result<Self> {
        let branch = branch.into();
        let number = number.into();

        if branch.trim().is_empty() {
            return Err(ReleaseError::release("branch must not be empty"));
        }
        if number.trim().is_empty() {
            return Err(ReleaseError::release(format!(
                "number must not be empty for branch '{}'",
                branch
            )));
        }

        Ok(Release { branch, number })
    }

    /// Read the release number for `branch` from its RELEASE file in `environment`
    pub fn load(paths: &ReleasePaths, branch: &str, environment: Environment) -> Result<Self> {
        let path = paths.environment_release_path(branch, environment);
        tracing::debug!(path = %path.display(), "reading release number");

        let contents = fs::read_to_string(&path).map_err(|e| ReleaseError::marker_file(&path, e))?;
        Release::new(branch, contents.trim())
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}
