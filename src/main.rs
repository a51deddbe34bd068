use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use release_paths::cli::{run_command, CommandOutput, PathCommand};
use release_paths::config;
use release_paths::git::{FixedRootLocator, GitCommandLocator, RootLocator};
use release_paths::ui;
use release_paths::{Environment, ReleasePaths};

#[derive(Parser)]
#[command(
    name = "release-paths",
    version,
    about = "Resolve release and documentation paths of a release repository"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Use this directory as the repository root instead of asking git")]
    root: Option<String>,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the repository root
    Root,

    /// Print the Kubernetes GIT_TAG for a branch
    GitTag {
        #[arg(short, long)]
        branch: String,
    },

    /// Print the RELEASE file path for a branch and environment
    ReleasePath {
        #[arg(short, long)]
        branch: String,

        #[arg(short, long, help = "development or production")]
        env: Environment,
    },

    /// Print the release number stored in the RELEASE file
    ReleaseNumber {
        #[arg(short, long)]
        branch: String,

        #[arg(short, long, help = "development or production")]
        env: Environment,
    },

    /// Print the KUBE_GIT_VERSION_FILE path for a release
    VersionFile {
        #[arg(short, long)]
        branch: String,

        #[arg(short, long)]
        number: String,
    },

    /// Print the docs directory for a release
    DocsDir {
        #[arg(short, long)]
        branch: String,

        #[arg(short, long)]
        number: String,

        #[arg(long, help = "Print the path relative to the docs contents directory")]
        relative: bool,
    },

    /// Print the repository README path
    Readme,

    /// Print the docs index path
    DocsIndex,

    /// Show every fixed top-level path
    Layout,
}

impl From<Commands> for PathCommand {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Root => PathCommand::Root,
            Commands::GitTag { branch } => PathCommand::GitTag { branch },
            Commands::ReleasePath { branch, env } => PathCommand::ReleasePath {
                branch,
                environment: env,
            },
            Commands::ReleaseNumber { branch, env } => PathCommand::ReleaseNumber {
                branch,
                environment: env,
            },
            Commands::VersionFile { branch, number } => PathCommand::VersionFile { branch, number },
            Commands::DocsDir {
                branch,
                number,
                relative,
            } => PathCommand::DocsDir {
                branch,
                number,
                relative,
            },
            Commands::Readme => PathCommand::Readme,
            Commands::DocsIndex => PathCommand::DocsIndex,
            Commands::Layout => PathCommand::Layout,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let locator: Box<dyn RootLocator> = match args.root.as_deref() {
        Some(root) => Box::new(FixedRootLocator::new(root)),
        None => Box::new(GitCommandLocator::new()),
    };

    // Nothing can be resolved without a root
    let paths = match ReleasePaths::discover(locator.as_ref(), config.layout) {
        Ok(paths) => paths,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let output = match run_command(&args.command.into(), &paths) {
        Ok(output) => output,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    match output {
        CommandOutput::Path(path) => ui::display_path(&path),
        CommandOutput::Text(text) => println!("{}", text),
        CommandOutput::Layout(entries) => {
            let entries: Vec<(&str, &std::path::Path)> = entries
                .iter()
                .map(|(label, path)| (*label, path.as_path()))
                .collect();
            ui::display_layout(&entries);
        }
    }

    Ok(())
}
