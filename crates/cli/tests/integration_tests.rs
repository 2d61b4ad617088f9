//! Integration tests for the litractl binary
//!
//! These run without any light attached, so they cover argument handling,
//! help output, completion and the error paths.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn litractl() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("litractl")?;
    cmd.env_remove("LITRA_SERIAL_NUMBER").env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn test_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    litractl()?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("brightness-up"))
        .stdout(predicate::str::contains("--serial-number"));
    Ok(())
}

#[test]
fn test_cli_version() -> Result<(), Box<dyn std::error::Error>> {
    litractl()?
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("litractl"));
    Ok(())
}

#[test]
fn test_completion_generation() -> Result<(), Box<dyn std::error::Error>> {
    for shell in ["bash", "zsh", "fish", "powershell"] {
        litractl()?
            .args(["completion", shell])
            .assert()
            .success()
            .stdout(predicate::str::contains("litractl"));
    }
    Ok(())
}

#[test]
fn test_brightness_requires_value_or_percentage() -> Result<(), Box<dyn std::error::Error>> {
    litractl()?
        .arg("brightness")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--value").or(predicate::str::contains("--percentage")));
    Ok(())
}

#[test]
fn test_percentage_out_of_range_rejected() -> Result<(), Box<dyn std::error::Error>> {
    litractl()?
        .args(["brightness-up", "--percentage", "101"])
        .assert()
        .failure()
        .code(2);
    Ok(())
}

#[test]
fn test_unknown_serial_reports_json_error() -> Result<(), Box<dyn std::error::Error>> {
    // Exit 2 when the bus is readable and the light is absent, 4 when the
    // host has no usable HID backend at all.
    let output = litractl()?
        .args(["--json", "--serial-number", "NO-SUCH-LIGHT", "on"])
        .assert()
        .failure()
        .code(predicate::in_iter([2, 4]))
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output)?;
    assert_eq!(value["success"], false);
    assert!(value["error"]["message"].is_string());
    Ok(())
}
