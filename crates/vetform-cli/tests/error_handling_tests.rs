//! Tests for error handling, exit codes and suggestions.

use std::fs;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn vetform(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("vetform");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_form_is_not_found() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("no-existe.json");

    vetform(&home)
        .args(["form", missing.to_str().unwrap()])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("no-existe.json"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_unsupported_form_extension() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("registro.yaml");
    fs::write(&path, "nombre: Ana\n").unwrap();

    vetform(&home)
        .args(["form", path.to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("json"))
        .stderr(predicate::str::contains("toml"));
}

#[test]
fn test_malformed_form() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("roto.json");
    fs::write(&path, "{\"fields\": ").unwrap();

    vetform(&home)
        .args(["form", path.to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("roto.json"));
}

#[test]
fn test_explicit_config_must_exist() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("absent.toml");

    vetform(&home)
        .args(["--config", missing.to_str().unwrap(), "fields"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_invalid_output_format_in_config() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("vetform.toml");
    fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();

    vetform(&home)
        .args(["-c", path.to_str().unwrap(), "fields"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("output.format"));
}

#[test]
fn test_bad_fixed_now_in_config() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("vetform.toml");
    fs::write(&path, "[clock]\nfixed_now = \"mañana\"\n").unwrap();

    vetform(&home)
        .args(["-c", path.to_str().unwrap(), "check", "fecha_cita", "2026-03-16T09:00"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("clock.fixed_now"));
}

#[test]
fn test_unknown_config_key() {
    let home = TempDir::new().unwrap();
    vetform(&home)
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_bad_context_entry_is_usage_error() {
    let home = TempDir::new().unwrap();
    vetform(&home)
        .args(["check", "confirmPassword", "x", "--context", "password"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("password"));
}

#[test]
fn test_verbose_shows_cause_chain() {
    let home = TempDir::new().unwrap();
    vetform(&home)
        .args(["-v", "check", "fecha_cita", "2026-03-16T09:00", "--now", "ayer"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--verbose").not());
}
