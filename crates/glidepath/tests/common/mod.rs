//! Shared test utilities for glidepath integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic binary command factory that prevents dotenv loading.
//! - Write tour fixtures to temporary files.
//!
//! Invariants / Assumptions:
//! - `GLIDEPATH_*` variables from the host never leak into the command.

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

/// Returns a hermetic `glidepath` command for integration testing.
pub fn glidepath_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("glidepath");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("GLIDEPATH_CONFIG_PATH")
        .env_remove("GLIDEPATH_COLOR")
        .env_remove("GLIDEPATH_POINTER_STYLE")
        .env_remove("GLIDEPATH_KEYBOARD_NAVIGATION");

    cmd
}

/// Write `contents` to a temp file ending in `suffix` (e.g. ".json").
pub fn tour_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp tour");
    file.write_all(contents.as_bytes()).expect("write temp tour");
    file
}
