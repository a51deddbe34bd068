//! Command execution for the release-paths binary.
//!
//! `main.rs` translates clap arguments into a [PathCommand]; this module
//! resolves it against an already constructed [ReleasePaths]. Keeping clap out
//! of here lets the commands be driven programmatically and in tests.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::{Environment, Release};
use crate::paths::ReleasePaths;

/// A single lookup requested on the command line
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    /// Repository root
    Root,

    /// Trimmed contents of the branch's GIT_TAG file
    GitTag { branch: String },

    /// RELEASE file path for an environment
    ReleasePath {
        branch: String,
        environment: Environment,
    },

    /// Release number read from the RELEASE file
    ReleaseNumber {
        branch: String,
        environment: Environment,
    },

    /// KUBE_GIT_VERSION_FILE path for a release
    VersionFile { branch: String, number: String },

    /// Docs directory for a release
    DocsDir {
        branch: String,
        number: String,
        relative: bool,
    },

    Readme,

    DocsIndex,

    /// Every fixed top-level path
    Layout,
}

/// What a command produced, ready for the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Path(PathBuf),
    Text(String),
    Layout(Vec<(&'static str, PathBuf)>),
}

/// Resolve `command` against `paths`
///
/// Formatting commands never fail; only the commands that read a marker file
/// can return an error.
pub fn run_command(command: &PathCommand, paths: &ReleasePaths) -> Result<CommandOutput> {
    let output = match command {
        PathCommand::Root => CommandOutput::Path(paths.root().to_path_buf()),
        PathCommand::GitTag { branch } => {
            let tag = paths
                .kubernetes_release_git_tag(branch)
                .with_context(|| format!("Failed to read Kubernetes git tag for branch '{}'", branch))?;
            CommandOutput::Text(tag)
        }
        PathCommand::ReleasePath {
            branch,
            environment,
        } => CommandOutput::Path(paths.environment_release_path(branch, *environment)),
        PathCommand::ReleaseNumber {
            branch,
            environment,
        } => {
            let release = Release::load(paths, branch, *environment).with_context(|| {
                format!(
                    "Failed to read {} release number for branch '{}'",
                    environment, branch
                )
            })?;
            CommandOutput::Text(release.number().to_string())
        }
        PathCommand::VersionFile { branch, number } => {
            let release = Release::new(branch.as_str(), number.as_str())?;
            CommandOutput::Path(paths.kube_git_version_file_path(&release))
        }
        PathCommand::DocsDir {
            branch,
            number,
            relative,
        } => {
            let release = Release::new(branch.as_str(), number.as_str())?;
            if *relative {
                CommandOutput::Path(
                    paths.relative_release_docs_directory(release.branch(), release.number()),
                )
            } else {
                CommandOutput::Path(paths.release_docs_directory(&release))
            }
        }
        PathCommand::Readme => CommandOutput::Path(paths.readme_path()),
        PathCommand::DocsIndex => CommandOutput::Path(paths.docs_index_path()),
        PathCommand::Layout => CommandOutput::Layout(vec![
            ("root", paths.root().to_path_buf()),
            ("docs contents", paths.docs_contents_directory().to_path_buf()),
            ("readme", paths.readme_path()),
            ("docs index", paths.docs_index_path()),
        ]),
    };

    Ok(output)
}
