//! Shared helpers for integration tests

use assert_cmd::Command;
use tempfile::TempDir;

/// The chatcast binary.
pub fn chatcast_cmd() -> Command {
    Command::cargo_bin("chatcast").expect("chatcast binary should build")
}

/// The chatcast binary with config lookups redirected into a fresh temp
/// directory, so a developer's real config file cannot leak into a test.
pub fn chatcast_cmd_isolated() -> (Command, TempDir) {
    let home = TempDir::new().expect("temp dir");
    let mut cmd = chatcast_cmd();
    cmd.env("HOME", home.path());
    cmd.env("XDG_CONFIG_HOME", home.path().join(".config"));
    (cmd, home)
}
