//! Repository root discovery
//!
//! Everything else in release-paths is derived from the repository's top-level
//! directory. The [RootLocator] trait abstracts how that directory is found so
//! callers can construct [crate::paths::ReleasePaths] against a real checkout
//! or a fixed directory in tests.
//!
//! - [command::GitCommandLocator]: runs `git rev-parse --show-toplevel`
//! - [repository::Git2Locator]: discovers the repository with the `git2` crate
//! - [mock::FixedRootLocator]: returns a preconfigured directory
//!
//! ```rust
//! # use release_paths::git::{FixedRootLocator, RootLocator};
//! let locator = FixedRootLocator::new("/src/distro");
//! assert_eq!(locator.locate().unwrap(), std::path::PathBuf::from("/src/distro"));
//! ```

pub mod command;
pub mod mock;
pub mod repository;

pub use command::GitCommandLocator;
pub use mock::FixedRootLocator;
pub use repository::Git2Locator;

use crate::error::Result;
use std::path::PathBuf;

/// Finds the top-level directory of the working tree.
///
/// ## Error Handling
///
/// Implementations report failure as [crate::error::ReleaseError::GitRoot] (or
/// [crate::error::ReleaseError::Git] for `git2` failures). The CLI treats any
/// error here as fatal since no path can be computed without a root.
pub trait RootLocator {
    /// Return the absolute path of the repository root
    fn locate(&self) -> Result<PathBuf>;
}
