#![allow(clippy::unwrap_used, clippy::expect_used, clippy::non_ascii_literal)]

//! CLI smoke tests for calculator-server binary
//!
//! These tests verify that the CLI commands work correctly, including
//! configuration validation, help output, and a real HTTP round trip.

use std::process::{Command, Stdio};
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Helper to run the calculator-server binary with given arguments
fn run_calculator_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_calculator-server"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute calculator-server")
}

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, body).expect("Failed to write file");
    path
}

#[test]
fn test_cli_help_command() {
    let output = run_calculator_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("calculator-server"),
        "Should contain binary name"
    );
    assert!(
        stdout.contains("Usage:"),
        "Should contain usage information"
    );
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(
        stdout.contains("check"),
        "Should contain 'check' subcommand"
    );
    assert!(stdout.contains("--config"), "Should mention config option");
    assert!(stdout.contains("--port"), "Should mention port option");
}

#[test]
fn test_cli_version_command() {
    let output = run_calculator_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("calculator-server"));
    assert!(stdout.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn test_cli_invalid_command() {
    let output = run_calculator_server(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error"),
        "Should explain the failure: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_missing_file() {
    let output = run_calculator_server(&["--config", "/nonexistent/config.yaml", "check"]);

    assert!(
        !output.status.success(),
        "Should fail when config file doesn't exist"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("does not exist"),
        "Should indicate config file not found: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&temp_dir, "invalid: yaml: content: [unclosed");

    let output = run_calculator_server(&["--config", config_path.to_str().unwrap(), "check"]);

    assert!(!output.status.success(), "Should fail with invalid YAML");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("YAML") || stderr.contains("parse"),
        "Should mention YAML parsing issue: {stderr}"
    );
}

#[test]
fn test_cli_check_rejects_bad_module_section() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        "modules:\n  calculator:\n    max_factorial_operand: -3\n",
    );

    let output = run_calculator_server(&["--config", config_path.to_str().unwrap(), "check"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("calculator"),
        "Should name the module: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_valid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        r#"
server:
  bind_addr: "127.0.0.1:18087"
logging:
  level: warn
modules:
  calculator:
    max_factorial_operand: 500
"#,
    );

    let output = run_calculator_server(&["--config", config_path.to_str().unwrap(), "check"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        output.status.success(),
        "Check should succeed. STDERR: {stderr}"
    );
    assert!(stdout.contains("Configuration is valid"));
    assert!(stdout.contains("max_factorial_operand"));
}

#[test]
fn test_cli_print_config_applies_port_override() {
    let output = run_calculator_server(&["--port", "9123", "--print-config"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let yaml = stdout
        .strip_prefix("Effective configuration:\n")
        .expect("print-config header");
    let parsed: serde_json::Value = serde_saphyr::from_str(yaml).expect("valid YAML");
    assert_eq!(parsed["server"]["bind_addr"], "127.0.0.1:9123");
}

#[tokio::test]
async fn test_cli_run_serves_http() {
    let mut child = tokio::process::Command::new(env!("CARGO_BIN_EXE_calculator-server"))
        .arg("run")
        .env_remove("RUST_LOG")
        .env("APP__SERVER__BIND_ADDR", "127.0.0.1:0")
        .env("APP__LOGGING__FORMAT", "json")
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .expect("Failed to spawn calculator-server");

    // The bound address is only known from the startup log.
    let stderr = child.stderr.take().unwrap();
    let mut lines = BufReader::new(stderr).lines();
    let addr = timeout(Duration::from_secs(30), async {
        while let Some(line) = lines.next_line().await.unwrap() {
            let Ok(event) = serde_json::from_str::<serde_json::Value>(&line) else {
                continue;
            };
            if event["fields"]["message"] == "listening" {
                return event["fields"]["addr"].as_str().unwrap().to_owned();
            }
        }
        panic!("server exited before listening");
    })
    .await
    .expect("server did not start in time");

    let mut stream = TcpStream::connect(&addr).await.unwrap();
    let body = r#"{"operation":"factorial","operands":[5]}"#;
    let request = format!(
        "POST /calculator/v1/evaluate HTTP/1.1\r\n\
         Host: {addr}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    let expression = r#""expression":"5! = 120""#;
    assert!(response.contains(expression), "{response}");

    child.kill().await.unwrap();
}
