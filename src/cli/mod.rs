//! Command dispatch kept separate from clap parsing

pub mod orchestration;

pub use orchestration::{run_command, CommandOutput, PathCommand};
