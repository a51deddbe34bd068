// tests/config_test.rs
use release_paths::config::{load_config, Config, LayoutConfig};
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.layout.docs_contents, "docs/contents");
    assert_eq!(config.layout.release_dir, "release");
    assert_eq!(
        config.layout.kubernetes_release_dir,
        "projects/kubernetes/release"
    );
    assert_eq!(
        config.layout.kubernetes_source_dir,
        "projects/kubernetes/kubernetes"
    );
    assert_eq!(config.layout.readme_file, "README.md");
    assert_eq!(config.layout.docs_index_file, "index.md");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[layout]
git_tag_file = "TAG"
docs_releases_dir = "versions"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.layout.git_tag_file, "TAG");
    assert_eq!(config.layout.docs_releases_dir, "versions");
    assert_eq!(config.layout.release_file, "RELEASE");
}

#[test]
#[serial]
fn test_load_fixture() {
    let config = load_config(Some("tests/fixtures/custom_layout.toml"))
        .expect("Failed to load test config");
    assert_eq!(config.layout.docs_contents, "website/content");
    assert_eq!(config.layout.release_dir, "releases-meta");
    assert_eq!(config.layout.readme_file, LayoutConfig::default().readme_file);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let err = load_config(Some("/nonexistent/releasepaths.toml")).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[layout\ndocs_contents = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("cannot parse"));
}

#[test]
#[serial]
fn test_local_config_file_is_picked_up() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("releasepaths.toml"),
        "[layout]\nreadme_file = \"README.rst\"\n",
    )
    .unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(result.unwrap().layout.readme_file, "README.rst");
}
