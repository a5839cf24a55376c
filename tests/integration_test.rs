// tests/integration_test.rs
mod common;

use common::{init_repo, pyproject};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn version_gate(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_version-gate"))
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir)
        .env_remove("GITHUB_ENV")
        .env("RUST_LOG", "info")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_version_gate_help() {
    let dir = tempfile::tempdir().unwrap();
    let output = version_gate(dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("version-gate"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("tag"));
}

#[test]
fn test_version_gate_version() {
    let dir = tempfile::tempdir().unwrap();
    let output = version_gate(dir.path(), &["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_check_success_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    init_repo(dir.path(), &[("pyproject.toml", pyproject("1.0.0"))]);
    fs::write(dir.path().join("pyproject.toml"), pyproject("1.1.0")).unwrap();

    let output = version_gate(dir.path(), &["check"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Version is correctly updated."));
    assert!(stdout.contains("Main branch version"));
}

#[test]
fn test_check_skip_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    init_repo(dir.path(), &[("pyproject.toml", pyproject("1.0.0"))]);
    fs::write(dir.path().join("pyproject.toml"), pyproject("1.2.0")).unwrap();

    let output = version_gate(dir.path(), &["check", "--branch", "main"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Only one version increase at a time allowed"));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Bump exactly one of patch"));
}

#[test]
fn test_check_not_updated_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    init_repo(dir.path(), &[("pyproject.toml", pyproject("1.0.0"))]);

    let output = version_gate(dir.path(), &["check"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("has not been updated"));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("before merging into 'main'"));
}

#[test]
fn test_check_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    init_repo(
        dir.path(),
        &[("package.json", r#"{"version": "2.3.4"}"#.to_string())],
    );
    fs::write(dir.path().join("package.json"), r#"{"version": "2.3.5"}"#).unwrap();
    fs::write(
        dir.path().join("versiongate.toml"),
        "file = \"package.json\"\npath = \"version\"\n",
    )
    .unwrap();

    let output = version_gate(dir.path(), &["check"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_check_unsupported_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    init_repo(dir.path(), &[("setup.ini", "version = 1.0.0\n".to_string())]);

    let output = version_gate(dir.path(), &["check", "--file", "setup.ini"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unsupported file format"));
}

#[test]
fn test_check_export_to_env_file() {
    let dir = tempfile::tempdir().unwrap();
    init_repo(dir.path(), &[("pyproject.toml", pyproject("0.9.0"))]);
    fs::write(dir.path().join("pyproject.toml"), pyproject("1.0.0")).unwrap();
    let env_file = dir.path().join("github_env");

    let output = version_gate(
        dir.path(),
        &[
            "check",
            "--export",
            "VERSION",
            "--env-file",
            env_file.to_str().unwrap(),
        ],
    );
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(env_file).unwrap(), "VERSION=1.0.0\n");
}

#[test]
fn test_tag_writes_env_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("pyproject.toml"), pyproject("3.2.1")).unwrap();
    let env_file = dir.path().join("github_env");

    let output = version_gate(
        dir.path(),
        &["tag", "--env-file", env_file.to_str().unwrap()],
    );
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(env_file).unwrap(), "VERSION=3.2.1\n");
}

#[test]
fn test_tag_without_github_env_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("pyproject.toml"), pyproject("3.2.1")).unwrap();

    let output = version_gate(dir.path(), &["tag"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("GITHUB_ENV"));
}

#[test]
fn test_check_outside_repository_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("pyproject.toml"), pyproject("1.0.1")).unwrap();

    let output = version_gate(dir.path(), &["check"]);
    assert_ne!(output.status.code(), Some(0));
}

#[test]
fn test_bad_config_reports_context() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("versiongate.toml"), "colour = \"red\"\n").unwrap();

    let output = version_gate(dir.path(), &["tag"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to load configuration: "));
    assert!(stderr.contains("colour"));
}

#[test]
fn test_tag_failure_names_variable() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("pyproject.toml"), pyproject("3.2.1")).unwrap();

    let output = version_gate(dir.path(), &["tag", "--env-key", "RELEASE"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to export RELEASE: "));
    assert!(stderr.contains("GITHUB_ENV"));
}

#[test]
fn test_check_from_package_subdirectory() {
    let dir = tempfile::tempdir().unwrap();
    init_repo(
        dir.path(),
        &[(
            "packages/web/package.json",
            r#"{"name": "web", "version": "0.3.9"}"#.to_string(),
        )],
    );
    let package_dir = dir.path().join("packages").join("web");
    fs::write(
        package_dir.join("package.json"),
        r#"{"name": "web", "version": "0.3.10"}"#,
    )
    .unwrap();

    let output = version_gate(
        &package_dir,
        &["check", "--file", "package.json", "--path", "version"],
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("0.3.9"));
}

#[test]
fn test_check_parent_file_from_subdirectory() {
    let dir = tempfile::tempdir().unwrap();
    init_repo(dir.path(), &[("pyproject.toml", pyproject("1.4.2"))]);
    fs::write(dir.path().join("pyproject.toml"), pyproject("1.5.0")).unwrap();
    let docs = dir.path().join("docs");
    fs::create_dir_all(&docs).unwrap();

    let output = version_gate(&docs, &["check", "--file", "../pyproject.toml"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_check_subdirectory_not_updated() {
    let dir = tempfile::tempdir().unwrap();
    init_repo(
        dir.path(),
        &[("packages/web/package.json", r#"{"version": "0.3.9"}"#.to_string())],
    );
    let package_dir = dir.path().join("packages").join("web");

    let output = version_gate(
        &package_dir,
        &["check", "--file", "package.json", "--path", "version"],
    );
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("has not been updated"));
}
