//! Compiled-in demo conversation
//!
//! The conversation shown by `chatcast play`. Delays are authored as
//! absolute offsets from run start, already sorted; the ordering is still
//! validated in tests so edits here cannot silently break playback.

use super::{Script, ScriptEntry, Speaker};

/// The built-in demo script: a visitor asking a design studio's assistant
/// about a website project.
pub fn demo_script() -> Script {
    let entries = vec![
        ScriptEntry::new(
            Speaker::Assistant,
            "Hi! I'm the studio assistant. Ask me anything about your next website.",
            0,
        ),
        ScriptEntry::new(Speaker::Visitor, "Hey! Do you build online shops?", 1400),
        ScriptEntry::new(
            Speaker::Assistant,
            "We do. Storefront, checkout, inventory sync - the whole stack.",
            2600,
        ),
        ScriptEntry::new(
            Speaker::Visitor,
            "Nice. How long would a small shop take?",
            4400,
        ),
        ScriptEntry::new(
            Speaker::Assistant,
            "Usually four to six weeks:\n- week 1: design\n- weeks 2-4: build\n- final week: launch",
            5600,
        ),
        ScriptEntry::new(Speaker::Visitor, "And what does that cost?", 7800),
        ScriptEntry::new(
            Speaker::Assistant,
            "Small shops start around 3k. I can have a human follow up with a real quote.",
            8800,
        ),
        ScriptEntry::new(Speaker::Visitor, "Yes please!", 10600),
        ScriptEntry::new(
            Speaker::Assistant,
            "Done - leave your email on the contact page and we'll be in touch today.",
            11400,
        ),
    ];

    // The literal above is authored sorted; new() re-checks it.
    Script::new(entries).expect("demo script delays must be non-decreasing")
}
