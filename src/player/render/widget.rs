//! Conversation panel widget
//!
//! Read-only consumer of the sequencer's state: renders one bubble per
//! revealed entry (assistant on the left, visitor on the right), a typing
//! indicator bubble while an assistant pause is elapsing, and keeps the
//! panel pinned to the newest content.

use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::player::render::bubbles::{bubble_rows, layout_bubble};
use crate::player::render::scroll::bottom_offset;
use crate::player::render::typing::typing_frame;
use crate::player::Sequencer;
use crate::script::Speaker;
use crate::tui::theme::Theme;

/// Minimum panel width at which bubbles can be drawn at all.
const MIN_PANEL_WIDTH: u16 = 8;

/// Ratatui widget over a sequencer's current state.
///
/// Stateless by design: each frame rebuilds the bubble rows from the
/// committed playback state, so the scroll position can never lag a reveal.
pub struct ConversationWidget<'a> {
    sequencer: &'a Sequencer,
    theme: &'a Theme,
    now: Instant,
}

impl<'a> ConversationWidget<'a> {
    pub fn new(sequencer: &'a Sequencer, theme: &'a Theme, now: Instant) -> Self {
        Self {
            sequencer,
            theme,
            now,
        }
    }
}

impl Widget for ConversationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < MIN_PANEL_WIDTH || area.height == 0 {
            return;
        }
        let panel_width = area.width as usize;
        // Frame and gutter eat four columns; keep a two-column air gap on
        // the far side so opposing bubbles never touch.
        let max_inner = panel_width.saturating_sub(6).max(1);

        let mut rows: Vec<Line<'static>> = Vec::new();
        for entry in self.sequencer.revealed() {
            let style = match entry.speaker {
                Speaker::Assistant => self.theme.assistant_style(),
                Speaker::Visitor => self.theme.visitor_style(),
            };
            push_bubble(
                &mut rows,
                &entry.text,
                entry.speaker == Speaker::Visitor,
                panel_width,
                max_inner,
                style,
            );
        }

        if self.sequencer.is_typing() {
            let elapsed = self.sequencer.elapsed(self.now).unwrap_or_default();
            push_bubble(
                &mut rows,
                typing_frame(elapsed),
                false,
                panel_width,
                max_inner,
                self.theme.typing_style(),
            );
        }

        // Always force bottom: newest bubble (or the indicator) stays visible.
        let offset = bottom_offset(rows.len(), area.height as usize);
        for (row, line) in rows[offset..].iter().enumerate() {
            buf.set_line(area.x, area.y + row as u16, line, area.width);
        }
    }
}

/// Append one framed bubble to `rows`, right-aligned for the visitor.
/// Consecutive bubbles are separated by a blank row.
fn push_bubble(
    rows: &mut Vec<Line<'static>>,
    text: &str,
    align_right: bool,
    panel_width: usize,
    max_inner: usize,
    style: Style,
) {
    if !rows.is_empty() {
        rows.push(Line::default());
    }
    let bubble = layout_bubble(text, max_inner);
    let pad = " ".repeat(panel_width.saturating_sub(bubble.outer_width()));
    for bubble_row in bubble_rows(&bubble) {
        let line = if align_right {
            Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled(bubble_row, style),
            ])
        } else {
            Line::from(Span::styled(bubble_row, style))
        };
        rows.push(line);
    }
}
