use crate::error::{ReleaseError, Result};
use crate::git::RootLocator;
use std::path::{Path, PathBuf};
use std::process::Command;

const SHOW_TOPLEVEL_ARGS: &[&str] = &["rev-parse", "--show-toplevel"];

/// Locates the root by shelling out to the `git` binary
#[derive(Debug, Clone)]
pub struct GitCommandLocator {
    cwd: PathBuf,
}

impl GitCommandLocator {
    /// Run git from the process working directory
    pub fn new() -> Self {
        GitCommandLocator {
            cwd: PathBuf::from("."),
        }
    }

    /// Run git from `cwd` instead of the process working directory
    pub fn in_dir(cwd: impl AsRef<Path>) -> Self {
        GitCommandLocator {
            cwd: cwd.as_ref().to_path_buf(),
        }
    }
}

impl Default for GitCommandLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl RootLocator for GitCommandLocator {
    fn locate(&self) -> Result<PathBuf> {
        tracing::debug!(cwd = %self.cwd.display(), "running git {}", SHOW_TOPLEVEL_ARGS.join(" "));

        let output = Command::new("git")
            .args(SHOW_TOPLEVEL_ARGS)
            .current_dir(&self.cwd)
            .output()
            .map_err(|e| ReleaseError::git_root(format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ReleaseError::git_root(format!(
                "git {} exited with code {}: {}",
                SHOW_TOPLEVEL_ARGS.join(" "),
                output.status.code().unwrap_or(-1),
                stderr
            )));
        }

        path_from_stdout(&output.stdout)
    }
}

/// Turn `git rev-parse` output into a path, trimming only surrounding whitespace.
///
/// Interior whitespace is part of the path. On unix the bytes are kept as-is so
/// roots that are not valid UTF-8 survive unchanged.
fn path_from_stdout(stdout: &[u8]) -> Result<PathBuf> {
    let start = stdout
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(stdout.len());
    let end = stdout
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    let trimmed = &stdout[start..end];

    if trimmed.is_empty() {
        return Err(ReleaseError::git_root("git printed an empty top-level path"));
    }

    #[cfg(unix)]
    {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        Ok(PathBuf::from(OsStr::from_bytes(trimmed)))
    }

    #[cfg(not(unix))]
    {
        std::str::from_utf8(trimmed)
            .map(PathBuf::from)
            .map_err(|e| ReleaseError::git_root(format!("top-level path is not UTF-8: {}", e)))
    }
}
