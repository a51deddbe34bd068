//! User interface module - terminal output for the CLI.
//!
//! Resolved paths are printed bare on stdout so they can be used in scripts;
//! everything else goes through the [formatter] helpers.

pub mod formatter;

pub use formatter::{display_error, display_layout, display_path, format_layout};
