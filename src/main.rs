//! chatcast binary entry point

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use chatcast::cli::{Cli, Command, ConfigAction};
use chatcast::commands;
use chatcast::config::Config;
use chatcast::script::demo_script;
use chatcast::tui::Theme;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => {
            let config = Config::load()?;
            let speed = args.speed.unwrap_or(config.speed);
            let theme_name = args.theme.unwrap_or_else(|| config.theme.clone());
            let theme = Theme::by_name(&theme_name).ok_or_else(|| {
                anyhow!(
                    "unknown theme '{}', expected one of: {}",
                    theme_name,
                    Theme::NAMES.join(", ")
                )
            })?;
            commands::play::run(demo_script(), speed, theme, config.typing_pause())
        }
        Command::Script(args) => commands::script::handle(args.format),
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
            ConfigAction::Edit => commands::config::handle_edit(),
            ConfigAction::Migrate => commands::config::handle_migrate(),
        },
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Route tracing events to stderr, gated by `RUST_LOG` (silent by default).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
