//! Scripted conversation player
//!
//! Plays a fixed conversation script into a terminal panel: entries reveal
//! over time, assistant messages are preceded by a typing indicator, and a
//! visibility gate restarts playback whenever the panel scrolls back into
//! view.
//!
//! # Architecture
//!
//! - `gate`: edge detection over visibility samples from the host
//! - `state`: per-run `PlaybackState` and the `Phase` lifecycle
//! - `sequencer`: the clock-driven engine (`start`/`tick`/`next_deadline`)
//! - `render`: bubble layout and the ratatui `ConversationWidget`
//!
//! # Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use chatcast::player::Sequencer;
//! use chatcast::script::demo_script;
//!
//! let mut seq = Sequencer::new(demo_script());
//! let now = Instant::now();
//! seq.observe_visibility(true, now); // panel scrolled into view
//! seq.tick(now + Duration::from_millis(600));
//! assert_eq!(seq.revealed().count(), 1);
//! ```

pub mod gate;
pub mod render;
pub mod sequencer;
pub mod state;

pub use gate::{VisibilityEdge, VisibilityGate};
pub use sequencer::{Sequencer, MAX_SPEED, MIN_SPEED, TYPING_PAUSE};
pub use state::{Phase, PlaybackState};
