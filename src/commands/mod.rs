//! Command handlers for the chatcast binary.

pub mod config;
pub mod play;
pub mod script;
