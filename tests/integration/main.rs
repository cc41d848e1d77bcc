//! Integration test harness
//!
//! Submodules share the `helpers` module; each file covers one area of the
//! public surface (CLI, script data, playback engine).

mod helpers;

mod cli_test;
mod playback_test;
mod script_test;
