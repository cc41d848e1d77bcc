//! Repository tasks (`cargo xtask ...`)
//!
//! Currently only man-page generation; the page is rendered from the same
//! clap command tree the binary parses, so it can never drift from --help.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Repository tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Debug, Subcommand)]
enum Task {
    /// Generate the chatcast man page under target/assets/
    Man {
        /// Output directory
        #[arg(long, default_value = "target/assets")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man(out_dir),
    }
}

fn generate_man(out_dir: PathBuf) -> Result<()> {
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let cmd = chatcast::cli::Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut rendered = Vec::new();
    man.render(&mut rendered).context("rendering man page")?;

    let path = out_dir.join("chatcast.1");
    fs::write(&path, rendered).with_context(|| format!("writing {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}
