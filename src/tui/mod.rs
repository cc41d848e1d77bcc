//! TUI plumbing for the demo
//!
//! Terminal lifecycle (raw mode + alternate screen) behind an RAII guard,
//! plus the shared theme definitions. Widgets live with the player's render
//! module; this layer only owns the terminal itself.

pub mod theme;

pub use theme::{current_theme, Theme};

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// Terminal guard for interactive commands.
///
/// Entering raw mode and the alternate screen happens in `new`; both are
/// undone in `Drop`, so any exit path (including `?`) restores the user's
/// terminal.
pub struct App {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    tick_rate: Duration,
}

impl App {
    /// Take over the terminal. `tick_rate` is the idle poll cadence the
    /// hosting event loop should fall back to.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode().context("enabling raw mode")?;
        let mut stdout = io::stdout();
        crossterm::execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
        let terminal =
            Terminal::new(CrosstermBackend::new(stdout)).context("creating terminal")?;
        Ok(Self {
            terminal,
            tick_rate,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<io::Stdout>> {
        &mut self.terminal
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Best effort: the terminal should come back even on error paths.
        let _ = disable_raw_mode();
        let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
