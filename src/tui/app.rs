//! Application state for the TUI.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::core::{Notification, NotificationSink};
use crate::error::StudyTubeError;
use crate::features::notes::{NoteBuffer, NoteExporter};
use crate::features::timer::{FocusTimer, TickSource};
use crate::features::videos::{Subject, VideoRecord, VideoStorage};
use crate::storage::SqliteKvStore;

/// How long a toast stays on screen.
const TOAST_TTL: Duration = Duration::from_secs(4);
/// How many history entries the dashboard shows.
const HISTORY_LIMIT: usize = 50;

/// Which panel has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Timer,
    Notes,
    Videos,
}

impl Pane {
    /// The next pane in Tab order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Timer => Self::Notes,
            Self::Notes => Self::Videos,
            Self::Videos => Self::Timer,
        }
    }
}

/// A notification currently on screen.
pub struct Toast {
    pub notification: Notification,
    raised_at: Instant,
}

/// Bounded queue of on-screen toasts; the dashboard's notification sink.
#[derive(Default)]
pub struct Toasts {
    entries: VecDeque<Toast>,
}

impl Toasts {
    /// The toast to show right now, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&Toast> {
        self.entries.back()
    }

    /// Number of toasts on screen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether anything is on screen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop toasts older than the display window.
    fn expire(&mut self, now: Instant) {
        self.entries
            .retain(|toast| now.duration_since(toast.raised_at) < TOAST_TTL);
    }
}

impl NotificationSink for Toasts {
    fn notify(&mut self, notification: Notification) {
        self.entries.push_back(Toast {
            notification,
            raised_at: Instant::now(),
        });
        while self.entries.len() > 3 {
            self.entries.pop_front();
        }
    }
}

/// Application state.
pub struct App {
    /// The focus/break countdown.
    pub timer: FocusTimer,
    /// One-second tick handle; present only while the countdown runs.
    tick: Option<TickSource>,
    /// Auto-flush handle for the note pad; alive for the whole session.
    flush: TickSource,
    /// The note pad.
    pub notes: NoteBuffer<SqliteKvStore>,
    exporter: NoteExporter,
    videos: VideoStorage,
    /// Video history entries currently shown.
    pub history: Vec<VideoRecord>,
    /// Selected index into `history`.
    pub selected: usize,
    /// Active subject filter; `None` shows everything.
    pub subject_filter: Option<Subject>,
    /// Panel with keyboard focus.
    pub pane: Pane,
    /// Whether keystrokes go into the note pad.
    pub editing: bool,
    /// Toasts on screen.
    pub toasts: Toasts,
    /// Status message to display.
    pub status: Option<String>,
}

impl App {
    /// Create a new app instance.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be opened.
    pub fn new(config: &Config) -> Result<Self, StudyTubeError> {
        Self::with_storage(config, SqliteKvStore::new()?, VideoStorage::new()?)
    }

    /// Create an app instance on explicit storage (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if persisted state cannot be loaded.
    pub fn with_storage(
        config: &Config,
        store: SqliteKvStore,
        videos: VideoStorage,
    ) -> Result<Self, StudyTubeError> {
        let notes = NoteBuffer::load(store)?;
        let history = videos.list(None, HISTORY_LIMIT)?;
        let flush = TickSource::new(Duration::from_secs(u64::from(
            config.notes.autosave_interval_seconds.max(1),
        )));

        Ok(Self {
            timer: FocusTimer::from_config(&config.timer),
            tick: None,
            flush,
            notes,
            exporter: NoteExporter::new(config.export_dir()?),
            videos,
            history,
            selected: 0,
            subject_filter: None,
            pane: Pane::Timer,
            editing: false,
            toasts: Toasts::default(),
            status: Some("Press ? for help".to_string()),
        })
    }

    /// Advance the periodic sources.
    ///
    /// Called once per event-loop iteration. Drains due timer ticks, runs
    /// the note auto-flush, and expires old toasts.
    ///
    /// # Errors
    ///
    /// Returns an error if the auto-flush write fails.
    pub fn on_tick(&mut self, now: Instant) -> Result<(), StudyTubeError> {
        if let Some(tick) = self.tick.as_mut() {
            for _ in 0..tick.poll(now) {
                if let Some(event) = self.timer.tick() {
                    self.toasts.notify(Notification::from(event));
                    break;
                }
            }
            // A completed phase stops the countdown; drop the handle with it.
            if !self.timer.is_running() {
                self.tick = None;
            }
        }

        if self.flush.poll(now) > 0 {
            self.notes.auto_flush()?;
        }

        self.toasts.expire(now);

        Ok(())
    }

    /// Persist the note pad immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn flush_notes(&mut self) -> Result<(), StudyTubeError> {
        self.notes.auto_flush()?;
        Ok(())
    }

    // --- timer panel ---

    /// Start or pause the countdown.
    pub fn toggle_timer(&mut self) {
        if self.timer.is_running() {
            self.timer.pause();
            self.tick = None;
        } else {
            self.timer.start();
            if self.tick.is_none() {
                self.tick = Some(TickSource::new(Duration::from_secs(1)));
            }
        }
    }

    /// Stop the countdown and refill the current phase.
    pub fn reset_timer(&mut self) {
        self.timer.reset();
        self.tick = None;
    }

    /// Jump to the next phase.
    pub fn skip_phase(&mut self) {
        let event = self.timer.skip();
        self.tick = None;
        self.toasts.notify(Notification::from(event));
    }

    // --- notes panel ---

    /// Append a character to the note pad.
    pub fn insert_char(&mut self, c: char) {
        let mut text = self.notes.text().to_string();
        text.push(c);
        self.notes.edit(text);
    }

    /// Remove the last character from the note pad.
    pub fn backspace(&mut self) {
        let mut text = self.notes.text().to_string();
        text.pop();
        self.notes.edit(text);
    }

    /// Save a snapshot of the note pad.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn save_note(&mut self) -> Result<(), StudyTubeError> {
        if let Some(notification) = self.notes.save()? {
            self.toasts.notify(notification);
        }
        Ok(())
    }

    /// Export the note pad to a text file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn export_note(&mut self) -> Result<(), StudyTubeError> {
        if let Some(notification) = self.notes.export(&self.exporter)? {
            self.toasts.notify(notification);
        }
        Ok(())
    }

    /// Clear the note pad.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn clear_note(&mut self) -> Result<(), StudyTubeError> {
        let notification = self.notes.clear()?;
        self.toasts.notify(notification);
        Ok(())
    }

    // --- videos panel ---

    /// Reload the history with the active filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn refresh_videos(&mut self) -> Result<(), StudyTubeError> {
        self.history = self.videos.list(self.subject_filter, HISTORY_LIMIT)?;

        // Adjust selection if it's out of bounds
        if !self.history.is_empty() && self.selected >= self.history.len() {
            self.selected = self.history.len() - 1;
        }

        Ok(())
    }

    /// Get the currently selected video.
    #[must_use]
    pub fn selected_video(&self) -> Option<&VideoRecord> {
        self.history.get(self.selected)
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if !self.history.is_empty() && self.selected < self.history.len() - 1 {
            self.selected += 1;
        }
    }

    /// Mark the selected video watched now.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn open_selected(&mut self) -> Result<(), StudyTubeError> {
        if let Some(video) = self.selected_video() {
            let id = video.id;
            let title = video.title.clone();
            if let Some(id) = id {
                self.videos.touch(id)?;
                self.refresh_videos()?;
                self.toasts
                    .notify(Notification::success("Video loaded!", format!("Playing: {title}")));
            }
        }
        Ok(())
    }

    /// Remove the selected video from the history.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn remove_selected(&mut self) -> Result<(), StudyTubeError> {
        if let Some(video) = self.selected_video() {
            if let Some(id) = video.id {
                self.videos.remove(id)?;
                self.refresh_videos()?;
                self.toasts
                    .notify(Notification::warning("Video removed", "Video removed from history."));
            }
        }
        Ok(())
    }

    /// Step the subject filter: everything, then each subject in turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the reload fails.
    pub fn cycle_filter(&mut self) -> Result<(), StudyTubeError> {
        self.subject_filter = match self.subject_filter {
            None => Some(Subject::ALL[0]),
            Some(current) => Subject::ALL
                .iter()
                .position(|s| *s == current)
                .and_then(|i| Subject::ALL.get(i + 1))
                .copied(),
        };
        self.refresh_videos()
    }
}
