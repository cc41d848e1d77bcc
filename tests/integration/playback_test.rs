//! End-to-end playback tests through the public API
//!
//! Drives the gate -> sequencer -> widget pipeline the way the demo app
//! does, with injected instants instead of sleeping.

use std::time::{Duration, Instant};

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use chatcast::player::render::ConversationWidget;
use chatcast::tui::Theme;
use chatcast::{Phase, Script, ScriptEntry, Sequencer, Speaker, VisibilityEdge};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn reference_script() -> Script {
    Script::new(vec![
        ScriptEntry::new(Speaker::Assistant, "Hi", 0),
        ScriptEntry::new(Speaker::Visitor, "Hey", 800),
        ScriptEntry::new(Speaker::Assistant, "Bye", 1600),
    ])
    .unwrap()
}

#[test]
fn full_run_through_the_visibility_gate() {
    let mut seq = Sequencer::new(reference_script());
    let t0 = Instant::now();

    assert_eq!(seq.observe_visibility(true, t0), Some(VisibilityEdge::Entered));

    seq.tick(t0);
    assert!(seq.is_typing());

    seq.tick(t0 + ms(600));
    assert_eq!(seq.revealed().count(), 1);

    seq.tick(t0 + ms(2200));
    assert_eq!(seq.phase(), Phase::Complete);
    let texts: Vec<&str> = seq.revealed().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["Hi", "Hey", "Bye"]);
}

#[test]
fn scrolling_away_and_back_restarts_playback() {
    let mut seq = Sequencer::new(reference_script());
    let t0 = Instant::now();

    seq.observe_visibility(true, t0);
    seq.tick(t0 + ms(900));
    assert_eq!(seq.revealed().count(), 2);

    // Panel scrolls out of view: the run is cancelled outright.
    seq.observe_visibility(false, t0 + ms(1000));
    assert_eq!(seq.phase(), Phase::Idle);

    // Back into view: a fresh run from its own zero.
    let t1 = t0 + ms(5000);
    assert_eq!(seq.observe_visibility(true, t1), Some(VisibilityEdge::Entered));
    assert_eq!(seq.revealed().count(), 0);
    seq.tick(t1 + ms(600));
    let texts: Vec<&str> = seq.revealed().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["Hi"]);
}

#[test]
fn widget_renders_the_sequencer_state() {
    let mut seq = Sequencer::new(reference_script());
    let t0 = Instant::now();
    seq.observe_visibility(true, t0);
    seq.tick(t0 + ms(900));

    let theme = Theme::studio();
    let backend = TestBackend::new(40, 12);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let widget = ConversationWidget::new(&seq, &theme, t0 + ms(900));
            frame.render_widget(widget, frame.area());
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..12 {
        for x in 0..40 {
            screen.push_str(buffer.cell((x, y)).unwrap().symbol());
        }
        screen.push('\n');
    }
    assert!(screen.contains("Hi"), "screen:\n{screen}");
    assert!(screen.contains("Hey"), "screen:\n{screen}");
    assert!(!screen.contains("Bye"), "screen:\n{screen}");
}
