//! Script subcommand handler
//!
//! Dumps the compiled-in demo conversation, either as JSON (for tooling) or
//! as a plain transcript wrapped to the terminal width.

use anyhow::{Context, Result};

use crate::cli::ScriptFormat;
use crate::script::{demo_script, format_transcript};

/// Wrap width when the output is not a terminal (pipes, CI).
const FALLBACK_WIDTH: usize = 80;

pub fn handle(format: ScriptFormat) -> Result<()> {
    let script = demo_script();
    match format {
        ScriptFormat::Json => {
            let json =
                serde_json::to_string_pretty(&script).context("serializing script to JSON")?;
            println!("{json}");
        }
        ScriptFormat::Text => {
            print!("{}", format_transcript(&script, transcript_width()));
        }
    }
    Ok(())
}

/// Current terminal width, or a fixed fallback when piped.
fn transcript_width() -> usize {
    terminal_size::terminal_size()
        .map(|(width, _)| width.0 as usize)
        .unwrap_or(FALLBACK_WIDTH)
        .max(20)
}
