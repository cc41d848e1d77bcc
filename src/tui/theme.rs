//! Theme configuration for the demo TUI and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for the TUI) and ANSI escape codes (for
//! plain CLI output).

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the demo page and conversation panel.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary page text color
    pub text_primary: Color,
    /// Secondary/dimmed text color (hints, footer)
    pub text_secondary: Color,
    /// Accent color for headings and the panel border
    pub accent: Color,
    /// Assistant bubble color
    pub assistant: Color,
    /// Visitor bubble color
    pub visitor: Color,
    /// Typing indicator color
    pub typing: Color,
    /// Error color (CLI output)
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::studio()
    }
}

impl Theme {
    /// Studio theme - gray page text with a green accent, cyan visitor
    /// bubbles. Standard ANSI colors for consistent terminal rendering.
    pub fn studio() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            assistant: Color::Gray,
            visitor: Color::Cyan,
            typing: Color::DarkGray,
            error: Color::Red,
        }
    }

    /// Classic terminal theme - white text, yellow accent.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            assistant: Color::White,
            visitor: Color::Yellow,
            typing: Color::DarkGray,
            error: Color::Red,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            assistant: Color::Cyan,
            visitor: Color::LightBlue,
            typing: Color::DarkGray,
            error: Color::Red,
        }
    }

    /// Look up a theme by its config/CLI name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "studio" => Some(Self::studio()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    /// Names accepted by `by_name`, for CLI error messages.
    pub const NAMES: [&'static str; 3] = ["studio", "classic", "ocean"];

    // Style helpers

    /// Style for primary page text.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for headings and the panel border.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (section titles).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for assistant bubbles.
    pub fn assistant_style(&self) -> Style {
        Style::default().fg(self.assistant)
    }

    /// Style for visitor bubbles.
    pub fn visitor_style(&self) -> Style {
        Style::default().fg(self.visitor)
    }

    /// Style for the typing indicator bubble.
    pub fn typing_style(&self) -> Style {
        Style::default().fg(self.typing)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.accent), text, ANSI_RESET)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            color_to_ansi(self.text_secondary),
            text,
            ANSI_RESET
        )
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.error), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}

/// Global theme instance for commands that take no theme flag.
pub fn current_theme() -> Theme {
    Theme::default()
}
