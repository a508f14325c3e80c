//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn medivox_bin() -> Command {
    Command::cargo_bin("medivox").expect("binary exists")
}

#[test]
fn help_output() {
    medivox_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--text"))
        .stdout(predicate::str::contains("--image"))
        .stdout(predicate::str::contains("--audio"))
        .stdout(predicate::str::contains("--voice"))
        .stdout(predicate::str::contains("--output-dir"));
}

#[test]
fn version_output() {
    medivox_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("medivox"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    medivox_bin()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("medivox"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_help() {
    medivox_bin()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn config_get_unknown_key() {
    medivox_bin()
        .args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key").or(predicate::str::contains("Valid")));
}

#[test]
fn missing_api_key_fails_fast() {
    // With no key in env or config, the app must fail before any request
    medivox_bin()
        .env_remove("GROQ_API_KEY")
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .args(["--text", "fever and cough"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key"));
}

#[test]
fn empty_submission_asks_for_input() {
    // An API key is present but no text/audio was given; no request is made
    medivox_bin()
        .env("GROQ_API_KEY", "test-key")
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .args(["--output-dir", std::env::temp_dir().to_str().unwrap()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains(
            "Please provide a description or audio.",
        ));
}
