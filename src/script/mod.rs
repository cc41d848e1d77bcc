//! Conversation script data model
//!
//! A script is the fixed, ordered list of conversation turns that the
//! playback sequencer reveals over time. Scripts are immutable once built:
//! the only operations are read access by index and full iteration.
//!
//! Entries carry their reveal delay as an absolute offset from run start
//! (not relative to the previous entry), and `Script` construction enforces
//! that those offsets are non-decreasing.

mod demo;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use demo::demo_script;

/// Who is speaking in a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The simulated AI assistant. Reveals are preceded by a typing pause.
    Assistant,
    /// The site visitor. Reveals happen at the delay boundary, no pause.
    Visitor,
}

impl Speaker {
    /// Display label used in transcripts and the demo UI.
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::Assistant => "assistant",
            Speaker::Visitor => "visitor",
        }
    }
}

/// A single conversation turn.
///
/// `text` may contain embedded line breaks; they are rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub speaker: Speaker,
    pub text: String,
    /// Offset from run start (milliseconds) at which this entry becomes
    /// eligible for reveal.
    pub reveal_delay_ms: u64,
}

impl ScriptEntry {
    /// Create an entry.
    pub fn new(speaker: Speaker, text: impl Into<String>, reveal_delay_ms: u64) -> Self {
        Self {
            speaker,
            text: text.into(),
            reveal_delay_ms,
        }
    }

    /// The reveal delay as a `Duration`.
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

/// Errors raised while building a script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("entry {index}: reveal delay {found_ms}ms precedes previous entry ({prev_ms}ms)")]
    UnorderedDelay {
        index: usize,
        prev_ms: u64,
        found_ms: u64,
    },
}

/// An ordered, immutable conversation script.
///
/// Invariant: entries are stored in non-decreasing `reveal_delay_ms` order.
/// The sequencer relies on this to reveal entries strictly in script order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ScriptEntry>", into = "Vec<ScriptEntry>")]
pub struct Script {
    entries: Vec<ScriptEntry>,
}

impl Script {
    /// Build a script, validating the delay ordering invariant.
    pub fn new(entries: Vec<ScriptEntry>) -> Result<Self, ScriptError> {
        for (index, pair) in entries.windows(2).enumerate() {
            let prev_ms = pair[0].reveal_delay_ms;
            let found_ms = pair[1].reveal_delay_ms;
            if found_ms < prev_ms {
                return Err(ScriptError::UnorderedDelay {
                    index: index + 1,
                    prev_ms,
                    found_ms,
                });
            }
        }
        Ok(Self { entries })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the script has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ScriptEntry> {
        self.entries.get(index)
    }

    /// Iterate over all entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScriptEntry> {
        self.entries.iter()
    }

    /// All entries as a slice.
    pub fn entries(&self) -> &[ScriptEntry] {
        &self.entries
    }

    /// Delay of the last entry, i.e. when the final reveal becomes eligible.
    ///
    /// Does not include the typing pause of a trailing assistant entry;
    /// that is the sequencer's concern.
    pub fn last_delay(&self) -> Duration {
        self.entries
            .last()
            .map(ScriptEntry::reveal_delay)
            .unwrap_or(Duration::ZERO)
    }
}

impl std::ops::Index<usize> for Script {
    type Output = ScriptEntry;

    fn index(&self, index: usize) -> &ScriptEntry {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a ScriptEntry;
    type IntoIter = std::slice::Iter<'a, ScriptEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl TryFrom<Vec<ScriptEntry>> for Script {
    type Error = ScriptError;

    fn try_from(entries: Vec<ScriptEntry>) -> Result<Self, Self::Error> {
        Script::new(entries)
    }
}

impl From<Script> for Vec<ScriptEntry> {
    fn from(script: Script) -> Self {
        script.entries
    }
}

/// Format a script as a plain-text transcript.
///
/// Each turn becomes a `speaker> text` line; embedded line breaks and wrapped
/// continuations are indented to align under the first text column. `width`
/// is the total line width available.
pub fn format_transcript(script: &Script, width: usize) -> String {
    let mut out = String::new();
    for entry in script {
        let prefix = format!("{:>9}> ", entry.speaker.label());
        let indent = " ".repeat(prefix.len());
        let body_width = width.saturating_sub(prefix.len()).max(1);

        let mut first = true;
        for raw_line in entry.text.split('\n') {
            for wrapped in crate::player::render::wrap_line(raw_line, body_width) {
                if first {
                    out.push_str(&prefix);
                    first = false;
                } else {
                    out.push_str(&indent);
                }
                out.push_str(&wrapped);
                out.push('\n');
            }
        }
    }
    out
}
