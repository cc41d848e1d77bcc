//! chatcast - scripted conversation player
//!
//! Simulates an AI chat conversation in the terminal: a fixed script of
//! visitor and assistant turns reveals over time, assistant messages are
//! preceded by a typing indicator, and playback restarts whenever the panel
//! scrolls back into view.
//!
//! The library is split the way the widget is wired:
//!
//! - [`script`]: the immutable conversation script (data only)
//! - [`player`]: visibility gate, playback sequencer, and the ratatui
//!   conversation widget
//! - [`tui`]: terminal lifecycle and themes for the demo binary
//! - [`config`], [`cli`], [`commands`]: the hosting CLI around the widget

pub mod cli;
pub mod commands;
pub mod config;
pub mod player;
pub mod script;
pub mod tui;
pub mod version;

pub use config::Config;
pub use player::{Phase, Sequencer, VisibilityEdge, VisibilityGate};
pub use script::{demo_script, format_transcript, Script, ScriptEntry, ScriptError, Speaker};
