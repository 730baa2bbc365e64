//! Tests for the command-line front end, run against the built binary.

mod common;

use common::mock_backend::MockBackend;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn build2rise_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_build2rise"));
    cmd.env_remove("BUILD2RISE_LOG");
    cmd
}

/// Config whose session file lives next to it in a fresh temp dir.
fn isolated_config(base_url: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let session_path = dir.path().join("session.toml");
    let config_path = dir.path().join("config.toml");
    let content = format!(
        "[api]\nbase_url = \"{}\"\n\n[session]\npath = \"{}\"\n",
        base_url,
        session_path.display()
    );
    std::fs::write(&config_path, content).unwrap();
    (dir, config_path)
}

fn run(config: &Path, args: &[&str]) -> Output {
    build2rise_cmd()
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help_lists_commands() {
    let output = build2rise_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["login", "feed", "matches", "project-status", "find-recipient"] {
        assert!(stdout.contains(command), "help is missing {}", command);
    }
    assert!(stdout.contains("--api-url"));
}

#[test]
fn test_status_when_signed_out() {
    let (_dir, config) = isolated_config("http://127.0.0.1:9/api/");
    let output = run(&config, &["status"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Not signed in");
}

#[test]
fn test_feed_without_session_exits_with_error() {
    let (_dir, config) = isolated_config("http://127.0.0.1:9/api/");
    let output = run(&config, &["feed"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Not authenticated"));
    assert!(stderr.contains("Run the command again to retry."));
}

#[test]
fn test_invalid_api_url_override() {
    let (_dir, config) = isolated_config("http://127.0.0.1:9/api/");
    let output = build2rise_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--api-url")
        .arg("ftp://nope")
        .arg("status")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("http or https"));
}

#[test]
fn test_unknown_role_rejected_by_parser() {
    let output = build2rise_cmd()
        .args(["register", "--email", "a@b.c", "--name", "A", "--role", "banker"])
        .args(["--password", "x"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("banker"));
}

#[tokio::test]
async fn test_login_then_status_and_feed() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_json(r#"{"token":"tok-1","userId":"u-7","userType":"FOUNDER"}"#)
        .await;
    backend
        .enqueue_json(&format!("[{}]", common::post_json("p1", "first post", false, 2)))
        .await;
    let (_dir, config) = isolated_config(&backend.base_url());

    let login = tokio::task::spawn_blocking({
        let config = config.clone();
        move || run(&config, &["login", "--email", "a@b.c", "--password", "pw"])
    })
    .await
    .unwrap();
    assert!(login.status.success(), "{}", String::from_utf8_lossy(&login.stderr));
    assert!(String::from_utf8_lossy(&login.stdout).contains("Signed in as u-7 (founder)"));

    let status = run(&config, &["status"]);
    assert_eq!(
        String::from_utf8_lossy(&status.stdout).trim(),
        "Signed in as u-7 (founder)"
    );

    let feed = tokio::task::spawn_blocking(move || run(&config, &["feed"]))
        .await
        .unwrap();
    let stdout = String::from_utf8_lossy(&feed.stdout);
    assert!(stdout.contains("[p1] Me"));
    assert!(stdout.contains("first post"));
    assert!(stdout.contains("2 likes"));

    let requests = backend.captured_requests().await;
    assert_eq!(requests[1].header("authorization"), Some("Bearer tok-1"));
}
