//! Integration tests for the built-in script data

use chatcast::{demo_script, format_transcript, Speaker};

#[test]
fn demo_script_delays_are_absolute_and_ordered() {
    let script = demo_script();
    let mut previous = 0;
    for entry in &script {
        assert!(
            entry.reveal_delay_ms >= previous,
            "delay went backwards at {:?}",
            entry.text
        );
        previous = entry.reveal_delay_ms;
    }
}

#[test]
fn demo_script_alternates_naturally() {
    // Not a strict alternation requirement; the conversation just has to
    // involve both sides and start with the assistant greeting.
    let script = demo_script();
    assert_eq!(script[0].speaker, Speaker::Assistant);
    assert!(script.iter().any(|e| e.speaker == Speaker::Visitor));
}

#[test]
fn transcript_contains_every_turn() {
    let script = demo_script();
    let transcript = format_transcript(&script, 120);
    for entry in &script {
        let first_line = entry.text.split('\n').next().unwrap_or("");
        let probe: String = first_line.split_whitespace().take(3).collect::<Vec<_>>().join(" ");
        assert!(
            transcript.contains(&probe),
            "transcript is missing {probe:?}"
        );
    }
}
