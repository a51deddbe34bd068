//! Domain types - releases and environments, independent of the filesystem layout

pub mod environment;
pub mod release;

pub use environment::Environment;
pub use release::Release;
