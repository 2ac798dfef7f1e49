//! Focus timer command implementation.
//!
//! Runs the countdown inline in the terminal, redrawing one status line
//! per tick and announcing phase changes.

use std::io::Write;
use std::time::{Duration, Instant};

use serde_json::json;

use crate::cli::args::{OutputFormat, TimerCommands};
use crate::config::Config;
use crate::core::Notification;
use crate::error::StudyTubeError;
use crate::features::timer::{render_progress_bar, FocusTimer, TickSource};
use crate::output::{format_notification_pretty, to_json};

/// Execute timer subcommands.
pub fn timer(
    config: &Config,
    cmd: TimerCommands,
    format: OutputFormat,
) -> Result<String, StudyTubeError> {
    match cmd {
        TimerCommands::Run {
            focus,
            break_minutes,
            rounds,
        } => run(config, focus, break_minutes, rounds, format),
    }
}

/// Run focus/break cycles until `rounds` focus sessions have completed.
fn run(
    config: &Config,
    focus: Option<u32>,
    break_minutes: Option<u32>,
    rounds: u32,
    format: OutputFormat,
) -> Result<String, StudyTubeError> {
    let focus_minutes = focus.unwrap_or(config.timer.focus_minutes);
    let break_minutes = break_minutes.unwrap_or(config.timer.break_minutes);
    let rounds = rounds.max(1);

    let mut timer = FocusTimer::new(
        chrono::Duration::minutes(i64::from(focus_minutes)),
        chrono::Duration::minutes(i64::from(break_minutes)),
    );
    timer.start();

    let mut tick = TickSource::new(Duration::from_secs(1));
    let mut stdout = std::io::stdout();
    let mut done = false;

    while !done {
        std::thread::sleep(Duration::from_millis(200));

        for _ in 0..tick.poll(Instant::now()) {
            if let Some(event) = timer.tick() {
                let notification = Notification::from(event);
                println!("\r{}", format_notification_pretty(&notification));

                if timer.completed_focus_sessions() >= rounds {
                    // The final break is not worth sitting through.
                    done = true;
                    break;
                }
                timer.start();
            }
        }

        if !done {
            print!(
                "\r  {} {} {} session {}/{}  ",
                timer.phase(),
                timer.format_remaining(),
                render_progress_bar(timer.progress(), 30),
                timer.completed_focus_sessions() + 1,
                rounds,
            );
            stdout.flush()?;
        }
    }

    match format {
        OutputFormat::Json => to_json(&json!({
            "completed_focus_sessions": timer.completed_focus_sessions(),
        })),
        OutputFormat::Pretty => Ok(format!(
            "Done! {} focus session{} completed.",
            timer.completed_focus_sessions(),
            if timer.completed_focus_sessions() == 1 { "" } else { "s" },
        )),
    }
}
