pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod paths;
pub mod ui;

pub use domain::{Environment, Release};
pub use error::{ReleaseError, Result};
pub use paths::{relative_release_docs_directory, ReleasePaths};
