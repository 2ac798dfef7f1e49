//! The focus/break timer.
//!
//! Pomodoro-style countdown alternating between focus and break phases:
//! - Start/pause/reset/skip commands
//! - One-second ticks with automatic phase transitions
//! - Completed focus session tracking

pub mod machine;
pub mod tick;

pub use machine::{
    format_duration_mmss, render_progress_bar, FocusTimer, Phase, PhaseEvent,
    DEFAULT_BREAK_SECONDS, DEFAULT_FOCUS_SECONDS,
};
pub use tick::TickSource;
