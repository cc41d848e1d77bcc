//! Play command - the scrollable demo page hosting the conversation panel
//!
//! The page mimics the marketing site the widget comes from: hero copy up
//! top, the live chat demo further down, a contact blurb at the end.
//! Scrolling moves the panel in and out of the viewport, and that is what
//! drives the visibility gate - playback restarts on every re-entry.

use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};
use ratatui::Frame;
use tracing::info;

use crate::player::render::ConversationWidget;
use crate::player::{Phase, Sequencer};
use crate::script::Script;
use crate::tui::{App, Theme};

/// Idle poll cadence when no reveal is pending.
const POLL_CADENCE: Duration = Duration::from_millis(250);

/// Poll cadence while the typing indicator is animating.
const TYPING_CADENCE: Duration = Duration::from_millis(100);

/// Height of the chat panel on the page, borders included.
const CHAT_PANEL_ROWS: usize = 15;

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputResult {
    Continue,
    Quit,
}

/// Run the demo until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run(script: Script, speed: f64, theme: Theme, typing_pause: Duration) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        bail!("refusing to start the demo: stdout is not a terminal");
    }

    info!(speed, entries = script.len(), "starting demo");
    let mut sequencer = Sequencer::new(script)
        .with_speed(speed)
        .with_typing_pause(typing_pause);
    let mut page = DemoPage::new(theme);
    let mut app = App::new(POLL_CADENCE)?;

    loop {
        let now = Instant::now();
        app.terminal_mut()
            .draw(|frame| page.render(frame, &mut sequencer, now))
            .context("drawing frame")?;

        let timeout = poll_timeout(&sequencer, Instant::now(), app.tick_rate());
        if event::poll(timeout).context("polling terminal events")? {
            match event::read().context("reading terminal event")? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if handle_key(key, &mut page, &mut sequencer) == InputResult::Quit {
                        break;
                    }
                }
                // Resize is picked up on the next draw; nothing to do here.
                _ => {}
            }
        }
    }
    Ok(())
}

/// How long the event loop may sleep before the sequencer has work again.
fn poll_timeout(sequencer: &Sequencer, now: Instant, tick_rate: Duration) -> Duration {
    let mut timeout = tick_rate;
    if let Some(deadline) = sequencer.next_deadline() {
        timeout = timeout.min(deadline.saturating_duration_since(now));
    }
    if sequencer.is_typing() {
        timeout = timeout.min(TYPING_CADENCE);
    }
    // Floor keeps a busy terminal from spinning; a late tick catches up.
    timeout.max(Duration::from_millis(10))
}

/// Handle a keyboard event.
fn handle_key(key: KeyEvent, page: &mut DemoPage, sequencer: &mut Sequencer) -> InputResult {
    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Page scrolling ===
        KeyCode::Up | KeyCode::Char('k') => {
            page.scroll_up(1);
            InputResult::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            page.scroll_down(1);
            InputResult::Continue
        }
        KeyCode::PageUp => {
            page.scroll_up(page.view_rows.max(1));
            InputResult::Continue
        }
        KeyCode::PageDown => {
            page.scroll_down(page.view_rows.max(1));
            InputResult::Continue
        }
        KeyCode::Home => {
            page.scroll = 0;
            InputResult::Continue
        }
        KeyCode::End => {
            page.scroll = page.total_rows();
            InputResult::Continue
        }

        // === Replay ===
        KeyCode::Char('r') => {
            page.replay(sequencer);
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

/// The scrollable demo page.
struct DemoPage {
    theme: Theme,
    intro: Vec<Line<'static>>,
    outro: Vec<Line<'static>>,
    /// First visible page row.
    scroll: usize,
    /// Page rows available on screen, updated on every draw.
    view_rows: usize,
}

impl DemoPage {
    fn new(theme: Theme) -> Self {
        let intro = intro_lines(&theme);
        let outro = outro_lines(&theme);
        Self {
            theme,
            intro,
            outro,
            scroll: 0,
            view_rows: 0,
        }
    }

    /// Page row where the chat panel starts.
    fn chat_top(&self) -> usize {
        self.intro.len()
    }

    /// Total page height in rows.
    fn total_rows(&self) -> usize {
        self.intro.len() + CHAT_PANEL_ROWS + self.outro.len()
    }

    fn scroll_up(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    fn scroll_down(&mut self, rows: usize) {
        // Clamped against the live viewport on the next draw.
        self.scroll = self.scroll.saturating_add(rows);
    }

    /// Replay the conversation by cycling the gate through hidden; the next
    /// draw samples the panel visible again and a fresh run starts.
    fn replay(&mut self, sequencer: &mut Sequencer) {
        sequencer.observe_visibility(false, Instant::now());
    }

    /// Draw one frame: sample visibility, advance playback, blit the visible
    /// window of the page, and render the status bar.
    fn render(&mut self, frame: &mut Frame, sequencer: &mut Sequencer, now: Instant) {
        let area = frame.area();
        if area.width < 12 || area.height < 3 {
            return;
        }
        let view_rows = (area.height - 1) as usize; // bottom row is the status bar
        self.view_rows = view_rows;
        self.scroll = clamp_scroll(self.scroll, self.total_rows(), view_rows);

        let visible = ranges_overlap(self.scroll, view_rows, self.chat_top(), CHAT_PANEL_ROWS);
        sequencer.observe_visibility(visible, now);
        sequencer.tick(now);

        let page = self.compose(sequencer, now, area.width);
        let buf = frame.buffer_mut();
        for y in 0..view_rows as u16 {
            let src_y = self.scroll as u16 + y;
            for x in 0..area.width {
                if let Some(src) = page.cell((x, src_y)) {
                    if let Some(dst) = buf.cell_mut((area.x + x, area.y + y)) {
                        *dst = src.clone();
                    }
                }
            }
        }

        self.render_status(frame, sequencer, area);
    }

    /// Render the whole page into an off-screen buffer; the caller blits the
    /// scroll window out of it.
    fn compose(&self, sequencer: &Sequencer, now: Instant, width: u16) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, self.total_rows() as u16));

        for (y, line) in self.intro.iter().enumerate() {
            buf.set_line(0, y as u16, line, width);
        }

        let chat_rect = Rect::new(0, self.chat_top() as u16, width, CHAT_PANEL_ROWS as u16);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" live demo ")
            .border_style(self.theme.accent_style());
        let inner = block.inner(chat_rect);
        block.render(chat_rect, &mut buf);
        ConversationWidget::new(sequencer, &self.theme, now).render(inner, &mut buf);

        let outro_top = self.chat_top() + CHAT_PANEL_ROWS;
        for (i, line) in self.outro.iter().enumerate() {
            buf.set_line(0, (outro_top + i) as u16, line, width);
        }
        buf
    }

    fn render_status(&self, frame: &mut Frame, sequencer: &Sequencer, area: Rect) {
        let status = match sequencer.phase() {
            Phase::Idle => "scroll down to the live demo",
            Phase::Scheduling => "demo playing",
            Phase::Typing => "assistant is typing",
            Phase::Complete => "demo finished - press r to replay",
        };
        let line = Line::from(vec![
            Span::styled(
                " up/down scroll | r replay | q quit ",
                self.theme.text_secondary_style(),
            ),
            Span::styled(status, self.theme.accent_style()),
        ]);
        frame
            .buffer_mut()
            .set_line(area.x, area.y + area.height - 1, &line, area.width);
    }
}

/// Do two half-open row ranges `[a, a+a_len)` and `[b, b+b_len)` overlap?
fn ranges_overlap(a: usize, a_len: usize, b: usize, b_len: usize) -> bool {
    a < b + b_len && b < a + a_len
}

/// Clamp a scroll offset so the window stays inside the page.
fn clamp_scroll(scroll: usize, total_rows: usize, view_rows: usize) -> usize {
    scroll.min(total_rows.saturating_sub(view_rows))
}

fn intro_lines(theme: &Theme) -> Vec<Line<'static>> {
    let accent = theme.accent_bold_style();
    let text = theme.text_style();
    let dim = theme.text_secondary_style();
    vec![
        Line::default(),
        Line::from(Span::styled("  ATELIER NORTH", accent)),
        Line::from(Span::styled("  websites that ship", dim)),
        Line::default(),
        Line::from(Span::styled(
            "  We design and build fast marketing sites, online",
            text,
        )),
        Line::from(Span::styled(
            "  shops, and the automations behind them.",
            text,
        )),
        Line::default(),
        Line::from(Span::styled("  services", theme.accent_style())),
        Line::from(Span::styled("  - design systems and brand refreshes", text)),
        Line::from(Span::styled("  - storefronts and checkout flows", text)),
        Line::from(Span::styled("  - chat assistants that answer for you", text)),
        Line::default(),
        Line::from(Span::styled(
            "  Our assistants greet visitors, qualify leads, and hand",
            text,
        )),
        Line::from(Span::styled(
            "  off to a human the moment it matters.",
            text,
        )),
        Line::default(),
        Line::from(Span::styled(
            "  Scroll down to watch one in action.",
            dim,
        )),
        Line::default(),
    ]
}

fn outro_lines(theme: &Theme) -> Vec<Line<'static>> {
    let text = theme.text_style();
    let dim = theme.text_secondary_style();
    vec![
        Line::default(),
        Line::from(Span::styled("  like what you see?", theme.accent_style())),
        Line::from(Span::styled("  hello@atelier.north", text)),
        Line::default(),
        Line::from(Span::styled("  - end -", dim)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{demo_script, ScriptEntry, Speaker};
    use crate::player::VisibilityEdge;

    fn page() -> DemoPage {
        DemoPage::new(Theme::studio())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ranges_overlap_detects_intersections() {
        assert!(ranges_overlap(0, 10, 5, 3));
        assert!(ranges_overlap(5, 3, 0, 10));
        assert!(!ranges_overlap(0, 5, 5, 3)); // touching is not overlapping
        assert!(!ranges_overlap(8, 4, 0, 5));
        assert!(!ranges_overlap(0, 0, 0, 5)); // empty window sees nothing
    }

    #[test]
    fn clamp_scroll_keeps_window_on_page() {
        assert_eq!(clamp_scroll(0, 40, 20), 0);
        assert_eq!(clamp_scroll(99, 40, 20), 20);
        assert_eq!(clamp_scroll(99, 10, 20), 0); // page fits entirely
    }

    #[test]
    fn poll_timeout_idles_at_tick_rate() {
        let sequencer = Sequencer::new(demo_script());
        let timeout = poll_timeout(&sequencer, Instant::now(), POLL_CADENCE);
        assert_eq!(timeout, POLL_CADENCE);
    }

    #[test]
    fn poll_timeout_shortens_for_imminent_deadlines() {
        let mut sequencer = Sequencer::new(demo_script());
        let t0 = Instant::now();
        sequencer.start(t0);
        // First entry is due immediately: the floor applies, not the cadence.
        let timeout = poll_timeout(&sequencer, t0, POLL_CADENCE);
        assert!(timeout <= Duration::from_millis(10));
    }

    #[test]
    fn poll_timeout_animates_while_typing() {
        let mut sequencer = Sequencer::new(demo_script());
        let t0 = Instant::now();
        sequencer.start(t0);
        sequencer.tick(t0);
        assert!(sequencer.is_typing());
        let timeout = poll_timeout(&sequencer, t0, POLL_CADENCE);
        assert!(timeout <= TYPING_CADENCE);
    }

    #[test]
    fn quit_keys_quit() {
        let mut sequencer = Sequencer::new(demo_script());
        let mut page = page();
        assert_eq!(
            handle_key(key(KeyCode::Char('q')), &mut page, &mut sequencer),
            InputResult::Quit
        );
        assert_eq!(
            handle_key(key(KeyCode::Esc), &mut page, &mut sequencer),
            InputResult::Quit
        );
        assert_eq!(
            handle_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &mut page,
                &mut sequencer
            ),
            InputResult::Quit
        );
    }

    #[test]
    fn arrow_keys_scroll_the_page() {
        let mut sequencer = Sequencer::new(demo_script());
        let mut page = page();
        handle_key(key(KeyCode::Down), &mut page, &mut sequencer);
        handle_key(key(KeyCode::Down), &mut page, &mut sequencer);
        assert_eq!(page.scroll, 2);
        handle_key(key(KeyCode::Up), &mut page, &mut sequencer);
        assert_eq!(page.scroll, 1);
        handle_key(key(KeyCode::Home), &mut page, &mut sequencer);
        assert_eq!(page.scroll, 0);
        // Up at the top stays put.
        handle_key(key(KeyCode::Up), &mut page, &mut sequencer);
        assert_eq!(page.scroll, 0);
    }

    #[test]
    fn replay_cycles_the_gate_through_hidden() {
        let mut sequencer = Sequencer::new(demo_script());
        let mut page = page();
        let t0 = Instant::now();
        sequencer.observe_visibility(true, t0);
        sequencer.tick(t0 + Duration::from_secs(60));
        assert!(sequencer.is_complete());

        handle_key(key(KeyCode::Char('r')), &mut page, &mut sequencer);
        assert_eq!(sequencer.phase(), Phase::Idle);

        // The next visibility sample restarts from scratch.
        assert_eq!(
            sequencer.observe_visibility(true, Instant::now()),
            Some(VisibilityEdge::Entered)
        );
        assert!(sequencer.revealed_indices().is_empty());
    }

    #[test]
    fn page_geometry_places_chat_after_the_intro() {
        let page = page();
        assert_eq!(page.chat_top(), page.intro.len());
        assert_eq!(
            page.total_rows(),
            page.intro.len() + CHAT_PANEL_ROWS + page.outro.len()
        );
    }

    #[test]
    fn compose_renders_the_panel_frame() {
        let mut sequencer = Sequencer::new(Script::new(vec![ScriptEntry::new(
            Speaker::Visitor,
            "Hey",
            0,
        )]).unwrap());
        let t0 = Instant::now();
        sequencer.start(t0);
        sequencer.tick(t0);

        let page = page();
        let buf = page.compose(&sequencer, t0, 60);

        let mut screen = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    screen.push_str(cell.symbol());
                }
            }
            screen.push('\n');
        }
        assert!(screen.contains("live demo"), "page:\n{screen}");
        assert!(screen.contains("ATELIER NORTH"), "page:\n{screen}");
        assert!(screen.contains("Hey"), "page:\n{screen}");
    }
}
