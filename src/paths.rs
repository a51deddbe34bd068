//! Path resolution for the release layout of a repository.
//!
//! A [ReleasePaths] value is built once from the repository root and handed to
//! whatever needs a path. Formatting methods never touch the filesystem, so
//! returned paths are not guaranteed to exist.
use crate::config::LayoutConfig;
use crate::domain::{Environment, Release};
use crate::error::{ReleaseError, Result};
use crate::git::RootLocator;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Append `segments` to `base`, keeping only their normal components.
///
/// Root, prefix, `.` and `..` components are dropped, so a segment such as
/// `/1-20` or `../1-20` always lands under `base`.
fn join_under(base: &Path, segments: &[&str]) -> PathBuf {
    let mut path = base.to_path_buf();
    for segment in segments {
        for component in Path::new(segment).components() {
            if let Component::Normal(part) = component {
                path.push(part);
            }
        }
    }
    path
}

/// Relative docs directory for a release, e.g. `releases/1-20/1`.
///
/// Uses the default `releases` segment; see
/// [ReleasePaths::relative_release_docs_directory] for a layout-aware form.
pub fn relative_release_docs_directory(branch: &str, number: &str) -> PathBuf {
    join_under(Path::new(""), &["releases", branch, number])
}

/// Resolved repository root plus the layout used to derive every other path.
#[derive(Debug, Clone)]
pub struct ReleasePaths {
    root: PathBuf,
    docs_contents: PathBuf,
    layout: LayoutConfig,
}

impl ReleasePaths {
    /// Build from a known repository root.
    pub fn new(root: impl Into<PathBuf>, layout: LayoutConfig) -> Self {
        let root = root.into();
        let docs_contents = join_under(&root, &[&layout.docs_contents]);
        ReleasePaths {
            root,
            docs_contents,
            layout,
        }
    }

    /// Build by asking `locator` for the repository root.
    pub fn discover<L: RootLocator + ?Sized>(locator: &L, layout: LayoutConfig) -> Result<Self> {
        let root = locator.locate()?;
        tracing::debug!(root = %root.display(), "resolved repository root");
        Ok(Self::new(root, layout))
    }

    /// Return the repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Return the `docs/contents` directory.
    pub fn docs_contents_directory(&self) -> &Path {
        &self.docs_contents
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Return `projects/kubernetes/release/<branch>/GIT_TAG`.
    pub fn kubernetes_git_tag_path(&self, branch: &str) -> PathBuf {
        join_under(
            &self.root,
            &[
                &self.layout.kubernetes_release_dir,
                branch,
                &self.layout.git_tag_file,
            ],
        )
    }

    /// Read the Kubernetes release tag for `branch`, trimmed of surrounding whitespace.
    ///
    /// A missing file surfaces as an error for which
    /// [ReleaseError::is_not_found] is true.
    pub fn kubernetes_release_git_tag(&self, branch: &str) -> Result<String> {
        let path = self.kubernetes_git_tag_path(branch);
        tracing::debug!(path = %path.display(), "reading kubernetes git tag");

        let contents = fs::read_to_string(&path).map_err(|e| ReleaseError::marker_file(&path, e))?;
        Ok(contents.trim().to_string())
    }

    /// Return the development RELEASE path for `branch`.
    pub fn development_release_path(&self, branch: &str) -> PathBuf {
        self.environment_release_path(branch, Environment::Development)
    }

    /// Return the production RELEASE path for `branch`.
    pub fn production_release_path(&self, branch: &str) -> PathBuf {
        self.environment_release_path(branch, Environment::Production)
    }

    /// Return `release/<branch>/<environment>/RELEASE`.
    pub fn environment_release_path(&self, branch: &str, environment: Environment) -> PathBuf {
        join_under(
            &self.root,
            &[
                &self.layout.release_dir,
                branch,
                environment.as_str(),
                &self.layout.release_file,
            ],
        )
    }

    /// Return `projects/kubernetes/kubernetes/<branch>/KUBE_GIT_VERSION_FILE`.
    pub fn kube_git_version_file_path(&self, release: &Release) -> PathBuf {
        join_under(
            &self.root,
            &[
                &self.layout.kubernetes_source_dir,
                release.branch(),
                &self.layout.kube_git_version_file,
            ],
        )
    }

    /// Return the absolute docs directory for `release`.
    pub fn release_docs_directory(&self, release: &Release) -> PathBuf {
        join_under(
            &self.docs_contents,
            &[&self.layout.docs_releases_dir, release.branch(), release.number()],
        )
    }

    /// Return the docs directory for a release relative to `docs/contents`.
    pub fn relative_release_docs_directory(&self, branch: &str, number: &str) -> PathBuf {
        join_under(
            Path::new(""),
            &[&self.layout.docs_releases_dir, branch, number],
        )
    }

    pub fn readme_path(&self) -> PathBuf {
        join_under(&self.root, &[&self.layout.readme_file])
    }

    pub fn docs_index_path(&self) -> PathBuf {
        join_under(&self.docs_contents, &[&self.layout.docs_index_file])
    }
}
