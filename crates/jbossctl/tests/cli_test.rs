//! Integration tests for the `jbossctl` binary.
//!
//! Argument parsing, help output, completions and error exit codes, plus a
//! few commands run end to end against a mocked management endpoint.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `jbossctl` binary with env isolation.
///
/// Clears every `JBOSSCTL_*` variable and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn jbossctl_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("jbossctl");
    cmd.env("HOME", "/tmp/jbossctl-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/jbossctl-cli-test-nonexistent")
        .env_remove("JBOSSCTL_PROFILE")
        .env_remove("JBOSSCTL_CONTROLLER")
        .env_remove("JBOSSCTL_AUTH")
        .env_remove("JBOSSCTL_OUTPUT")
        .env_remove("JBOSSCTL_TIMEOUT")
        .env_remove("JBOSSCTL_USERNAME")
        .env_remove("JBOSSCTL_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

/// Like [`jbossctl_cmd`], with config directories rooted at `home`.
fn jbossctl_cmd_in(home: &Path) -> assert_cmd::Command {
    let mut cmd = jbossctl_cmd();
    cmd.env("HOME", home).env("XDG_CONFIG_HOME", home);
    cmd
}

/// Write `body` where the binary looks for its config under `home`.
fn write_config(home: &Path, body: &str) {
    let dir = home.join("jbossctl");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), body).unwrap();
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn success(result: &Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "outcome": "success", "result": result }))
}

/// A standalone server named `serie1cabrio` answering discovery.
async fn standalone_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/management"))
        .and(body_partial_json(json!({ "operation": "read-resource" })))
        .respond_with(success(&json!({
            "name": "serie1cabrio",
            "product-name": "JBoss EAP",
            "product-version": "7.4.0.GA",
            "release-version": "15.0.0.Final",
            "launch-type": "STANDALONE",
            "system-property": {
                "env": { "value": "prod", "boot-time": true }
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/management"))
        .and(body_partial_json(json!({
            "operation": "read-attribute",
            "name": "launch-type"
        })))
        .respond_with(success(&json!("STANDALONE")))
        .mount(&server)
        .await;

    server
}

/// Run the binary against `server` off the async runtime.
async fn run_against(server: &MockServer, args: &[&str]) -> std::process::Output {
    let endpoint = server.address().to_string();
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    tokio::task::spawn_blocking(move || {
        jbossctl_cmd()
            .args(["--controller", &endpoint, "--auth", "admin:secret"])
            .args(&args)
            .output()
            .unwrap()
    })
    .await
    .unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = jbossctl_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    jbossctl_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("WildFly")
            .and(predicate::str::contains("instances"))
            .and(predicate::str::contains("deployments"))
            .and(predicate::str::contains("datasources")),
    );
}

#[test]
fn test_version_flag() {
    jbossctl_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jbossctl"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    jbossctl_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    jbossctl_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = jbossctl_cmd().arg("foobar").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_info_without_config_fails() {
    jbossctl_cmd()
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config").or(predicate::str::contains("Configuration")));
}

#[test]
fn test_missing_auth_is_credentials_error() {
    jbossctl_cmd()
        .args(["--controller", "localhost:9990", "info"])
        .assert()
        .code(3);
}

#[test]
fn test_malformed_auth_is_usage_error() {
    jbossctl_cmd()
        .args(["--controller", "localhost:9990", "--auth", "no-colon", "info"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("auth"));
}

#[test]
fn test_controller_with_scheme_is_rejected() {
    jbossctl_cmd()
        .args([
            "--controller",
            "http://localhost:9990",
            "--auth",
            "admin:secret",
            "info",
        ])
        .assert()
        .code(2);
}

#[test]
fn test_unreachable_controller_exit_code() {
    jbossctl_cmd()
        .args(["--controller", "127.0.0.1:1", "--auth", "admin:secret", "info"])
        .assert()
        .code(7);
}

#[test]
fn test_config_show_no_config() {
    jbossctl_cmd().args(["config", "show"]).assert().success();
}

#[test]
fn test_invalid_output_format() {
    let output = jbossctl_cmd()
        .args(["--output", "invalid", "info"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("possible values"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_target_flags_require_each_other() {
    jbossctl_cmd()
        .args(["memory", "--host", "slave"])
        .assert()
        .code(2);
}

// ── Config file profiles ────────────────────────────────────────────

#[test]
fn test_config_show_redacts_profile_password() {
    let home = tempfile::tempdir().unwrap();
    write_config(
        home.path(),
        r#"
default_profile = "staging"

[profiles.staging]
controller = "staging.example.com:9990"
username = "admin"
password = "hunter2"
"#,
    );

    let output = jbossctl_cmd_in(home.path())
        .args(["config", "show"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[profiles.staging]"), "{stdout}");
    assert!(stdout.contains("staging.example.com:9990"), "{stdout}");
    assert!(stdout.contains("****"), "{stdout}");
    assert!(!stdout.contains("hunter2"), "{stdout}");
}

#[test]
fn test_unknown_profile_exit_code() {
    let home = tempfile::tempdir().unwrap();
    write_config(
        home.path(),
        "[profiles.staging]\ncontroller = \"staging.example.com:9990\"\n",
    );

    jbossctl_cmd_in(home.path())
        .args(["--profile", "production", "info"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("production"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_profile_supplies_controller_and_credentials() {
    let server = standalone_server().await;
    let home = tempfile::tempdir().unwrap();
    write_config(
        home.path(),
        &format!(
            "[profiles.staging]\ncontroller = \"{}\"\nusername = \"admin\"\n\
             password_env = \"JBOSSCTL_STAGING_PASSWORD\"\n",
            server.address()
        ),
    );

    let home_path = home.path().to_path_buf();
    let output = tokio::task::spawn_blocking(move || {
        jbossctl_cmd_in(&home_path)
            .env("JBOSSCTL_STAGING_PASSWORD", "secret")
            .args(["--profile", "staging", "info"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(String::from_utf8_lossy(&output.stdout).contains("serie1cabrio"));
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_instances_subcommands_exist() {
    jbossctl_cmd()
        .args(["instances", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("start"))
                .and(predicate::str::contains("stop"))
                .and(predicate::str::contains("restart"))
                .and(predicate::str::contains("state")),
        );
}

#[test]
fn test_datasources_subcommands_exist() {
    jbossctl_cmd()
        .args(["datasources", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("flush"))
                .and(predicate::str::contains("test")),
        );
}

#[test]
fn test_config_subcommands_exist() {
    jbossctl_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("set-password")),
        );
}

// ── Against a mocked endpoint ───────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_info_standalone() {
    let server = standalone_server().await;

    let output = run_against(&server, &["info"]).await;

    let text = combined_output(&output);
    assert!(output.status.success(), "info failed:\n{text}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("serie1cabrio"), "{stdout}");
    assert!(stdout.contains("STANDALONE"), "{stdout}");
    assert!(stdout.contains("7.4.0.GA"), "{stdout}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_properties_as_json() {
    let server = standalone_server().await;

    let output = run_against(&server, &["-o", "json", "properties", "list"]).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    let props: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        props,
        json!([{ "name": "env", "value": "prod", "boot_time": true }])
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_domain_only_command_on_standalone() {
    let server = standalone_server().await;

    let output = run_against(&server, &["groups", "start"]).await;

    assert_eq!(output.status.code(), Some(2), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("not supported"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_management_failure_exit_code() {
    let server = standalone_server().await;
    Mock::given(method("POST"))
        .and(path("/management"))
        .and(body_partial_json(json!({ "operation": "read-children-resources" })))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "outcome": "failed",
            "failure-description": "WFLYCTL0030: No resource definition is registered"
        })))
        .mount(&server)
        .await;

    let output = run_against(&server, &["datasources", "list"]).await;

    assert_eq!(output.status.code(), Some(8), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("WFLYCTL0030"));
}
