//! The focus/break countdown state machine.
//!
//! Alternates between a focus phase and a break phase. The machine itself is
//! pure: it only changes state when `tick()`, `skip()`, or one of the user
//! commands is called. Driving the one-second cadence is the caller's job
//! (see [`super::tick::TickSource`]).

use chrono::Duration;

use crate::config::TimerConfig;

/// Default focus phase length.
pub const DEFAULT_FOCUS_SECONDS: i64 = 25 * 60;
/// Default break phase length.
pub const DEFAULT_BREAK_SECONDS: i64 = 5 * 60;

/// The timer's current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Studying.
    Focus,
    /// Resting between focus sessions.
    Break,
}

impl Phase {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::Break => "Break",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A phase transition reported by the timer.
///
/// `tick()` reports the `*Complete` variants when a phase runs out naturally;
/// `skip()` reports the `*Skipped` variants. Focus transitions carry the new
/// completed-session count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    /// A focus phase counted down to zero.
    FocusComplete { sessions: u32 },
    /// A break phase counted down to zero.
    BreakComplete,
    /// The user skipped out of a focus phase.
    FocusSkipped { sessions: u32 },
    /// The user skipped out of a break phase.
    BreakSkipped,
}

/// The focus/break countdown timer.
///
/// Remaining time always stays within `[0, phase duration]`, and reaching
/// zero immediately transitions into the opposite phase, so an idle timer
/// always has a positive remaining time.
#[derive(Debug, Clone)]
pub struct FocusTimer {
    focus_seconds: i64,
    break_seconds: i64,
    phase: Phase,
    remaining_seconds: i64,
    running: bool,
    completed_focus_sessions: u32,
}

impl FocusTimer {
    /// Create a timer with explicit phase durations.
    #[must_use]
    pub const fn new(focus: Duration, break_: Duration) -> Self {
        Self {
            focus_seconds: focus.num_seconds(),
            break_seconds: break_.num_seconds(),
            phase: Phase::Focus,
            remaining_seconds: focus.num_seconds(),
            running: false,
            completed_focus_sessions: 0,
        }
    }

    /// Create a timer from the configured phase durations.
    #[must_use]
    pub const fn from_config(config: &TimerConfig) -> Self {
        Self::new(
            Duration::minutes(config.focus_minutes as i64),
            Duration::minutes(config.break_minutes as i64),
        )
    }

    /// Start or resume the current phase. No-op while already running.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Pause the countdown, keeping phase and remaining time. No-op while idle.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Advance the countdown by one second.
    ///
    /// Does nothing while the timer is idle. The tick that reaches zero
    /// performs the phase transition: the timer stops, switches phase, and
    /// refills to the new phase's full duration. Finishing a focus phase
    /// increments the completed-session count.
    pub fn tick(&mut self) -> Option<PhaseEvent> {
        if !self.running {
            return None;
        }

        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }

        if self.remaining_seconds == 0 {
            Some(match self.phase {
                Phase::Focus => {
                    self.advance_phase();
                    PhaseEvent::FocusComplete {
                        sessions: self.completed_focus_sessions,
                    }
                }
                Phase::Break => {
                    self.advance_phase();
                    PhaseEvent::BreakComplete
                }
            })
        } else {
            None
        }
    }

    /// Stop the countdown and refill the current phase to its full duration.
    ///
    /// The completed-session count is untouched.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_seconds = self.phase_duration_seconds();
    }

    /// Force the phase transition that expiry would perform.
    ///
    /// Works from any state and always lands idle in the opposite phase.
    /// Skipping out of focus counts the session, skipping out of a break
    /// does not.
    pub fn skip(&mut self) -> PhaseEvent {
        match self.phase {
            Phase::Focus => {
                self.advance_phase();
                PhaseEvent::FocusSkipped {
                    sessions: self.completed_focus_sessions,
                }
            }
            Phase::Break => {
                self.advance_phase();
                PhaseEvent::BreakSkipped
            }
        }
    }

    /// Switch to the opposite phase, stopped, with a full countdown.
    fn advance_phase(&mut self) {
        self.running = false;
        match self.phase {
            Phase::Focus => {
                self.completed_focus_sessions += 1;
                self.phase = Phase::Break;
                self.remaining_seconds = self.break_seconds;
            }
            Phase::Break => {
                self.phase = Phase::Focus;
                self.remaining_seconds = self.focus_seconds;
            }
        }
    }

    /// Get the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Get remaining time in the current phase.
    #[must_use]
    pub const fn remaining(&self) -> Duration {
        Duration::seconds(self.remaining_seconds)
    }

    /// Number of focus sessions finished (or skipped out of) so far.
    #[must_use]
    pub const fn completed_focus_sessions(&self) -> u32 {
        self.completed_focus_sessions
    }

    /// Full duration of the current phase in seconds.
    #[must_use]
    pub const fn phase_duration_seconds(&self) -> i64 {
        match self.phase {
            Phase::Focus => self.focus_seconds,
            Phase::Break => self.break_seconds,
        }
    }

    /// Get progress through the current phase (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let duration = self.phase_duration_seconds();
        if duration == 0 {
            return 1.0;
        }
        let elapsed = (duration - self.remaining_seconds) as f64;
        (elapsed / duration as f64).clamp(0.0, 1.0)
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_duration_mmss(self.remaining())
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(
            Duration::seconds(DEFAULT_FOCUS_SECONDS),
            Duration::seconds(DEFAULT_BREAK_SECONDS),
        )
    }
}

/// Format a duration as MM:SS.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().abs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = (progress * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let timer = FocusTimer::default();
        assert_eq!(timer.phase(), Phase::Focus);
        assert_eq!(timer.remaining().num_seconds(), 1500);
        assert!(!timer.is_running());
        assert_eq!(timer.completed_focus_sessions(), 0);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut timer = FocusTimer::default();
        timer.start();
        timer.start();
        assert!(timer.is_running());

        timer.pause();
        timer.pause();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_tick_noop_while_idle() {
        let mut timer = FocusTimer::default();
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining().num_seconds(), 1500);
    }

    #[test]
    fn test_pause_preserves_remaining() {
        let mut timer = FocusTimer::default();
        timer.start();
        for _ in 0..10 {
            timer.tick();
        }
        timer.pause();
        let remaining = timer.remaining();

        timer.start();
        assert_eq!(timer.remaining(), remaining);
    }

    #[test]
    fn test_each_tick_decrements_by_one() {
        let mut timer = FocusTimer::default();
        timer.start();
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining().num_seconds(), 1499);
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining().num_seconds(), 1498);
    }

    #[test]
    fn test_focus_expiry_transitions_to_break() {
        let mut timer = FocusTimer::default();
        timer.start();

        let mut events = Vec::new();
        for _ in 0..1500 {
            if let Some(event) = timer.tick() {
                events.push(event);
            }
        }

        assert_eq!(events, vec![PhaseEvent::FocusComplete { sessions: 1 }]);
        assert_eq!(timer.phase(), Phase::Break);
        assert_eq!(timer.remaining().num_seconds(), 300);
        assert!(!timer.is_running());
        assert_eq!(timer.completed_focus_sessions(), 1);
    }

    #[test]
    fn test_break_expiry_transitions_to_focus() {
        let mut timer = FocusTimer::new(Duration::seconds(2), Duration::seconds(3));
        timer.start();
        timer.tick();
        assert_eq!(
            timer.tick(),
            Some(PhaseEvent::FocusComplete { sessions: 1 })
        );

        timer.start();
        timer.tick();
        timer.tick();
        assert_eq!(timer.tick(), Some(PhaseEvent::BreakComplete));
        assert_eq!(timer.phase(), Phase::Focus);
        assert_eq!(timer.remaining().num_seconds(), 2);
        // Finishing a break does not count a session.
        assert_eq!(timer.completed_focus_sessions(), 1);
    }

    #[test]
    fn test_remaining_stays_in_range() {
        let mut timer = FocusTimer::new(Duration::seconds(3), Duration::seconds(2));
        timer.start();
        for _ in 0..20 {
            let remaining = timer.remaining().num_seconds();
            assert!(remaining >= 0 && remaining <= timer.phase_duration_seconds());
            if timer.tick().is_some() {
                timer.start();
            }
        }
    }

    #[test]
    fn test_skip_out_of_focus_counts_session() {
        let mut timer = FocusTimer::default();
        assert_eq!(timer.skip(), PhaseEvent::FocusSkipped { sessions: 1 });
        assert_eq!(timer.phase(), Phase::Break);
        assert_eq!(timer.remaining().num_seconds(), 300);
        assert!(!timer.is_running());
        assert_eq!(timer.completed_focus_sessions(), 1);
    }

    #[test]
    fn test_skip_out_of_break_does_not_count() {
        let mut timer = FocusTimer::default();
        timer.skip();
        assert_eq!(timer.skip(), PhaseEvent::BreakSkipped);
        assert_eq!(timer.phase(), Phase::Focus);
        assert_eq!(timer.remaining().num_seconds(), 1500);
        assert_eq!(timer.completed_focus_sessions(), 1);
    }

    #[test]
    fn test_skip_while_running_stops_timer() {
        let mut timer = FocusTimer::default();
        timer.start();
        timer.tick();
        timer.skip();
        assert!(!timer.is_running());
        assert_eq!(timer.phase(), Phase::Break);
    }

    #[test]
    fn test_reset_keeps_phase_and_sessions() {
        let mut timer = FocusTimer::default();
        timer.skip();
        timer.start();
        for _ in 0..30 {
            timer.tick();
        }

        timer.reset();
        assert_eq!(timer.phase(), Phase::Break);
        assert_eq!(timer.remaining().num_seconds(), 300);
        assert!(!timer.is_running());
        assert_eq!(timer.completed_focus_sessions(), 1);
    }

    #[test]
    fn test_progress() {
        let mut timer = FocusTimer::new(Duration::seconds(100), Duration::seconds(10));
        assert!(timer.progress().abs() < f64::EPSILON);

        timer.start();
        for _ in 0..50 {
            timer.tick();
        }
        assert!((timer.progress() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_format_remaining() {
        let timer = FocusTimer::default();
        assert_eq!(timer.format_remaining(), "25:00");

        assert_eq!(format_duration_mmss(Duration::seconds(90)), "01:30");
        assert_eq!(format_duration_mmss(Duration::seconds(0)), "00:00");
    }

    #[test]
    fn test_render_progress_bar() {
        let bar = render_progress_bar(0.5, 10);
        assert!(bar.contains("█████"));
        assert!(bar.contains("░░░░░"));
    }
}
