use release_paths::cli::{run_command, CommandOutput, PathCommand};
use release_paths::config::LayoutConfig;
use release_paths::{Environment, ReleasePaths};
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn paths() -> ReleasePaths {
    ReleasePaths::new("/repo", LayoutConfig::default())
}

#[test]
fn test_root_command() {
    let output = run_command(&PathCommand::Root, &paths()).unwrap();
    assert_eq!(output, CommandOutput::Path(PathBuf::from("/repo")));
}

#[test]
fn test_release_path_command() {
    let command = PathCommand::ReleasePath {
        branch: "1-20".to_string(),
        environment: Environment::Production,
    };
    let output = run_command(&command, &paths()).unwrap();
    assert_eq!(
        output,
        CommandOutput::Path(PathBuf::from("/repo/release/1-20/production/RELEASE"))
    );
}

#[test]
fn test_docs_dir_command_relative_and_absolute() {
    let relative = PathCommand::DocsDir {
        branch: "1-20".to_string(),
        number: "1".to_string(),
        relative: true,
    };
    let absolute = PathCommand::DocsDir {
        branch: "1-20".to_string(),
        number: "1".to_string(),
        relative: false,
    };

    assert_eq!(
        run_command(&relative, &paths()).unwrap(),
        CommandOutput::Path(PathBuf::from("releases/1-20/1"))
    );
    assert_eq!(
        run_command(&absolute, &paths()).unwrap(),
        CommandOutput::Path(PathBuf::from("/repo/docs/contents/releases/1-20/1"))
    );
}

#[test]
fn test_version_file_command_rejects_empty_number() {
    let command = PathCommand::VersionFile {
        branch: "1-20".to_string(),
        number: String::new(),
    };
    assert!(run_command(&command, &paths()).is_err());
}

#[test]
fn test_git_tag_command_reports_branch() {
    let dir = TempDir::new().unwrap();
    let paths = ReleasePaths::new(dir.path(), LayoutConfig::default());
    let command = PathCommand::GitTag {
        branch: "1-24".to_string(),
    };

    let err = run_command(&command, &paths).unwrap_err();
    assert!(err.to_string().contains("1-24"));
}

#[test]
fn test_release_number_command() {
    let dir = TempDir::new().unwrap();
    let paths = ReleasePaths::new(dir.path(), LayoutConfig::default());
    let release_file = paths.development_release_path("1-25");
    fs::create_dir_all(release_file.parent().unwrap()).unwrap();
    fs::write(&release_file, "12\n").unwrap();

    let command = PathCommand::ReleaseNumber {
        branch: "1-25".to_string(),
        environment: Environment::Development,
    };
    assert_eq!(
        run_command(&command, &paths).unwrap(),
        CommandOutput::Text("12".to_string())
    );
}

#[test]
fn test_layout_command_lists_fixed_paths() {
    let output = run_command(&PathCommand::Layout, &paths()).unwrap();
    let CommandOutput::Layout(entries) = output else {
        panic!("expected layout output");
    };

    let labels: Vec<&str> = entries.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, vec!["root", "docs contents", "readme", "docs index"]);
    assert!(entries.contains(&("docs index", PathBuf::from("/repo/docs/contents/index.md"))));
}

#[test]
fn test_binary_prints_docs_index_for_fixed_root() {
    let output = Command::new(env!("CARGO_BIN_EXE_release-paths"))
        .args(["--root", "/mock/root", "docs-index"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "/mock/root/docs/contents/index.md");
}

#[test]
fn test_binary_fails_outside_repository() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_release-paths"))
        .arg("readme")
        .current_dir(dir.path())
        .env("GIT_CEILING_DIRECTORIES", dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unable to get git root directory"));
}
