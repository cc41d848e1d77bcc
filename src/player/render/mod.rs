//! Rendering components for the conversation panel.
//!
//! Pure layout (bubbles, scroll math, typing animation) is split from the
//! ratatui widget so the math can be unit-tested without a terminal.

mod bubbles;
mod scroll;
mod typing;
mod widget;

pub use bubbles::{bubble_rows, layout_bubble, wrap_line, wrap_text, Bubble};
pub use scroll::{bottom_offset, visible_rows};
pub use typing::{typing_frame, FRAME_INTERVAL};
pub use widget::ConversationWidget;
