//! Command-line interface definition
//!
//! Lives in the library so `xtask` can generate the man page and completions
//! from the same clap command tree the binary parses.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Scripted conversation player - a terminal chat-demo widget with timed
/// reveals.
#[derive(Debug, Parser)]
#[command(
    name = "chatcast",
    version = crate::version::version(),
    long_version = &*crate::version::long_version().leak(),
    about,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the demo page in the terminal
    Play(PlayArgs),
    /// Print the built-in conversation script
    Script(ScriptArgs),
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Playback speed multiplier (0.1-16, default from config)
    #[arg(long)]
    pub speed: Option<f64>,
    /// Theme name: studio, classic, or ocean (default from config)
    #[arg(long)]
    pub theme: Option<String>,
}

#[derive(Debug, Args)]
pub struct ScriptArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ScriptFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScriptFormat {
    /// Plain transcript wrapped to the terminal width
    Text,
    /// The script as JSON
    Json,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Open the configuration file in $EDITOR
    Edit,
    /// Add missing fields to an existing configuration file
    Migrate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn play_accepts_speed_and_theme() {
        let cli = Cli::parse_from(["chatcast", "play", "--speed", "2.5", "--theme", "ocean"]);
        match cli.command {
            Command::Play(args) => {
                assert_eq!(args.speed, Some(2.5));
                assert_eq!(args.theme.as_deref(), Some("ocean"));
            }
            other => panic!("expected play, got {other:?}"),
        }
    }

    #[test]
    fn script_defaults_to_text_format() {
        let cli = Cli::parse_from(["chatcast", "script"]);
        match cli.command {
            Command::Script(args) => assert_eq!(args.format, ScriptFormat::Text),
            other => panic!("expected script, got {other:?}"),
        }
    }
}
