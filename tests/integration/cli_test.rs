//! Integration tests for the CLI surface

use predicates::prelude::*;

use super::helpers::{chatcast_cmd, chatcast_cmd_isolated};

#[test]
fn help_lists_all_subcommands() {
    chatcast_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("script"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_prints_crate_version() {
    chatcast_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn script_json_dump_is_valid_and_ordered() {
    let output = chatcast_cmd()
        .args(["script", "--format", "json"])
        .output()
        .expect("run chatcast script");
    assert!(output.status.success());

    let entries: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let entries = entries.as_array().expect("top level should be an array");
    assert!(!entries.is_empty());

    let delays: Vec<u64> = entries
        .iter()
        .map(|e| e["reveal_delay_ms"].as_u64().expect("delay field"))
        .collect();
    assert!(
        delays.windows(2).all(|pair| pair[0] <= pair[1]),
        "delays should be non-decreasing: {delays:?}"
    );
}

#[test]
fn script_text_dump_shows_both_speakers() {
    chatcast_cmd()
        .args(["script", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("assistant>"))
        .stdout(predicate::str::contains("visitor>"));
}

#[test]
fn play_refuses_without_a_tty() {
    let (mut cmd, _home) = chatcast_cmd_isolated();
    cmd.arg("play")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a terminal"));
}

#[test]
fn play_rejects_unknown_themes() {
    let (mut cmd, _home) = chatcast_cmd_isolated();
    cmd.args(["play", "--theme", "neon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme"))
        .stderr(predicate::str::contains("studio"));
}

#[test]
fn completions_generate_for_bash() {
    chatcast_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chatcast"));
}

#[test]
fn config_path_points_into_the_chatcast_dir() {
    let (mut cmd, _home) = chatcast_cmd_isolated();
    cmd.args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chatcast"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_show_prints_defaults_when_no_file_exists() {
    let (mut cmd, _home) = chatcast_cmd_isolated();
    cmd.args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("speed"))
        .stdout(predicate::str::contains("typing_pause_ms"));
}
