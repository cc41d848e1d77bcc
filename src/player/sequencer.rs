//! Playback sequencer
//!
//! Walks a conversation script in order, revealing each entry once its
//! authored delay (an absolute offset from run start) has elapsed, and
//! holding a synthetic typing pause before assistant entries.
//!
//! The sequencer is clock-driven rather than callback-driven: the host event
//! loop calls `tick` with the current instant and sleeps until
//! `next_deadline`. Cancellation is dropping the run state - there is no
//! outstanding timer that could fire into a superseded run, and a tick that
//! arrives late simply catches up on every reveal that became due in the
//! meantime.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::player::gate::{VisibilityEdge, VisibilityGate};
use crate::player::state::{Phase, PlaybackState};
use crate::script::{Script, ScriptEntry, Speaker};

/// Synthetic "thinking" pause shown before each assistant message.
pub const TYPING_PAUSE: Duration = Duration::from_millis(600);

/// Playback speed bounds (multiplier over the authored timeline).
pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 16.0;

/// Deterministic, single-owner playback engine for one conversation panel.
///
/// Each mounted panel owns its own `Sequencer`; there is no shared state
/// between instances.
#[derive(Debug)]
pub struct Sequencer {
    script: Script,
    typing_pause: Duration,
    speed: f64,
    gate: VisibilityGate,
    run: Option<PlaybackState>,
}

impl Sequencer {
    /// Create an idle sequencer over `script` with the default typing pause
    /// and speed 1.0 (the authored timeline).
    pub fn new(script: Script) -> Self {
        Self {
            script,
            typing_pause: TYPING_PAUSE,
            speed: 1.0,
            gate: VisibilityGate::new(),
            run: None,
        }
    }

    /// Override the typing pause (configuration hook; the pause never varies
    /// per entry).
    pub fn with_typing_pause(mut self, pause: Duration) -> Self {
        self.typing_pause = pause;
        self
    }

    /// Set the playback speed multiplier, clamped to 0.1-16x.
    /// Non-finite values fall back to the authored timeline.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = if speed.is_finite() {
            speed.clamp(MIN_SPEED, MAX_SPEED)
        } else {
            1.0
        };
        self
    }

    /// The script being played.
    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match &self.run {
            None => Phase::Idle,
            Some(run) if run.is_typing() => Phase::Typing,
            Some(run) if run.pending < self.script.len() => Phase::Scheduling,
            Some(_) => Phase::Complete,
        }
    }

    /// True while an assistant entry's typing pause is elapsing.
    pub fn is_typing(&self) -> bool {
        self.run.as_ref().is_some_and(PlaybackState::is_typing)
    }

    /// True once every entry has been revealed in the current run.
    pub fn is_complete(&self) -> bool {
        self.phase() == Phase::Complete
    }

    /// Indices of revealed entries, in reveal order.
    pub fn revealed_indices(&self) -> &[usize] {
        self.run.as_ref().map(|r| r.revealed.as_slice()).unwrap_or(&[])
    }

    /// Revealed entries, in reveal order.
    pub fn revealed(&self) -> impl Iterator<Item = &ScriptEntry> {
        self.revealed_indices().iter().map(|&i| &self.script[i])
    }

    /// Time since the current run started, if one is active.
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.run
            .as_ref()
            .map(|run| now.saturating_duration_since(run.started_at))
    }

    /// Begin a fresh run at `now`, discarding any previous run.
    pub fn start(&mut self, now: Instant) {
        debug!(entries = self.script.len(), speed = self.speed, "run start");
        self.run = Some(PlaybackState::new(now));
    }

    /// Cancel the current run and return to idle.
    ///
    /// Clears the revealed list, the pending index, and the typing flag in
    /// one move by dropping the run state. Safe no-op when already idle.
    pub fn reset(&mut self) {
        if self.run.take().is_some() {
            debug!("run cancelled");
        }
    }

    /// Feed a visibility sample from the host.
    ///
    /// A not-visible -> visible edge (including the very first) restarts
    /// playback from scratch; a visible -> not-visible edge cancels the run
    /// so nothing mutates while the panel is off-screen. Redundant samples
    /// are no-ops - in particular, a second "visible" without an intervening
    /// "hidden" never restarts a run in flight.
    pub fn observe_visibility(&mut self, visible: bool, now: Instant) -> Option<VisibilityEdge> {
        let edge = self.gate.observe(visible)?;
        match edge {
            VisibilityEdge::Entered => {
                self.reset();
                self.start(now);
            }
            VisibilityEdge::Left => self.reset(),
        }
        Some(edge)
    }

    /// Apply every reveal that has become due by `now`.
    ///
    /// Returns true when the revealed list or typing flag changed. Idle and
    /// complete sequencers ignore ticks, so a tick scheduled before a reset
    /// or teardown is harmless.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(run) = self.run.as_mut() else {
            return false;
        };

        let mut changed = false;
        loop {
            if let Some(end) = run.typing_until {
                if now < end {
                    break;
                }
                // Typing pause elapsed: the assistant entry appears and the
                // indicator drops in the same step.
                run.typing_until = None;
                trace!(index = run.pending, "reveal (assistant)");
                run.revealed.push(run.pending);
                run.pending += 1;
                changed = true;
                continue;
            }

            let Some(entry) = self.script.get(run.pending) else {
                break;
            };
            let due = run.started_at + scale(entry.reveal_delay(), self.speed);
            if now < due {
                break;
            }

            match entry.speaker {
                Speaker::Assistant => {
                    // Anchored to the entry's own due time, not to when this
                    // tick observed it: late ticks and equal-delay ties stay
                    // deterministic.
                    run.typing_until = Some(due + scale(self.typing_pause, self.speed));
                    trace!(index = run.pending, "typing pause begins");
                    changed = true;
                }
                Speaker::Visitor => {
                    trace!(index = run.pending, "reveal (visitor)");
                    run.revealed.push(run.pending);
                    run.pending += 1;
                    changed = true;
                }
            }
        }

        if changed && run.pending == self.script.len() && run.typing_until.is_none() {
            debug!("run complete");
        }
        changed
    }

    /// The next instant at which `tick` will have work to do, if any.
    ///
    /// `None` when idle or complete - the host loop has nothing to wait for.
    pub fn next_deadline(&self) -> Option<Instant> {
        let run = self.run.as_ref()?;
        if let Some(end) = run.typing_until {
            return Some(end);
        }
        let entry = self.script.get(run.pending)?;
        Some(run.started_at + scale(entry.reveal_delay(), self.speed))
    }
}

/// Scale a duration by the inverse speed multiplier.
///
/// Speed 1.0 is exact (no float round-trip), so the authored timeline is
/// reproduced instant-for-instant in tests.
fn scale(d: Duration, speed: f64) -> Duration {
    if speed == 1.0 {
        d
    } else {
        d.div_f64(speed)
    }
}
