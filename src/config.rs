use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_FILE: &str = "./releasepaths.toml";
const USER_CONFIG_FILE: &str = ".releasepaths.toml";

/// Represents the complete configuration for release-paths.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
}

fn default_docs_contents() -> String {
    "docs/contents".to_string()
}

fn default_release_dir() -> String {
    "release".to_string()
}

fn default_release_file() -> String {
    "RELEASE".to_string()
}

fn default_kubernetes_release_dir() -> String {
    "projects/kubernetes/release".to_string()
}

fn default_git_tag_file() -> String {
    "GIT_TAG".to_string()
}

fn default_kubernetes_source_dir() -> String {
    "projects/kubernetes/kubernetes".to_string()
}

fn default_kube_git_version_file() -> String {
    "KUBE_GIT_VERSION_FILE".to_string()
}

fn default_docs_releases_dir() -> String {
    "releases".to_string()
}

fn default_readme_file() -> String {
    "README.md".to_string()
}

fn default_docs_index_file() -> String {
    "index.md".to_string()
}

/// Directory naming conventions of the repository, relative to its root.
///
/// `docs_releases_dir` and `docs_index_file` are relative to `docs_contents`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LayoutConfig {
    #[serde(default = "default_docs_contents")]
    pub docs_contents: String,

    #[serde(default = "default_release_dir")]
    pub release_dir: String,

    #[serde(default = "default_release_file")]
    pub release_file: String,

    #[serde(default = "default_kubernetes_release_dir")]
    pub kubernetes_release_dir: String,

    #[serde(default = "default_git_tag_file")]
    pub git_tag_file: String,

    #[serde(default = "default_kubernetes_source_dir")]
    pub kubernetes_source_dir: String,

    #[serde(default = "default_kube_git_version_file")]
    pub kube_git_version_file: String,

    #[serde(default = "default_docs_releases_dir")]
    pub docs_releases_dir: String,

    #[serde(default = "default_readme_file")]
    pub readme_file: String,

    #[serde(default = "default_docs_index_file")]
    pub docs_index_file: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            docs_contents: default_docs_contents(),
            release_dir: default_release_dir(),
            release_file: default_release_file(),
            kubernetes_release_dir: default_kubernetes_release_dir(),
            git_tag_file: default_git_tag_file(),
            kubernetes_source_dir: default_kubernetes_source_dir(),
            kube_git_version_file: default_kube_git_version_file(),
            docs_releases_dir: default_docs_releases_dir(),
            readme_file: default_readme_file(),
            docs_index_file: default_docs_index_file(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasepaths.toml` in current directory
/// 3. `.releasepaths.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => PathBuf::from(path),
        None => match find_config_file() {
            Some(path) => path,
            None => {
                tracing::debug!("no config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    tracing::debug!(path = %path.display(), "loading config");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        ReleaseError::config(format!("cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&config_str)
        .map_err(|e| ReleaseError::config(format!("cannot parse {}: {}", path.display(), e)))
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local.to_path_buf());
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}
