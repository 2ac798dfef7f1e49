//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::error::StudyTubeError;
use crate::tui::app::{App, Pane};

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, StudyTubeError> {
    // Poll for events with a small timeout so periodic work keeps running
    if event::poll(Duration::from_millis(100))
        .map_err(|e| StudyTubeError::Config(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) =
            event::read().map_err(|e| StudyTubeError::Config(format!("Event read failed: {e}")))?
        {
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            if app.editing {
                handle_editing_key(app, key);
                return Ok(None);
            }

            match key.code {
                // Quit
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),

                // Switch panels
                KeyCode::Tab => app.pane = app.pane.next(),

                // Help
                KeyCode::Char('?') => {
                    app.status = Some(help_line(app.pane).to_string());
                }

                _ => return handle_pane_key(app, key),
            }
        }
    }

    Ok(None)
}

/// Keys while the note pad is capturing input.
fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.editing = false,
        KeyCode::Enter => app.insert_char('\n'),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Tab => app.insert_char('\t'),
        KeyCode::Char(c) => app.insert_char(c),
        _ => {}
    }
}

/// Keys scoped to the focused panel.
fn handle_pane_key(app: &mut App, key: KeyEvent) -> Result<Option<Action>, StudyTubeError> {
    match app.pane {
        Pane::Timer => match key.code {
            KeyCode::Char('s' | ' ') => app.toggle_timer(),
            KeyCode::Char('r') => app.reset_timer(),
            KeyCode::Char('n') => app.skip_phase(),
            _ => {}
        },

        Pane::Notes => match key.code {
            KeyCode::Char('i') => app.editing = true,
            KeyCode::Char('s') => app.save_note()?,
            KeyCode::Char('e') => app.export_note()?,
            KeyCode::Char('c') => app.clear_note()?,
            _ => {}
        },

        Pane::Videos => match key.code {
            KeyCode::Char('j') | KeyCode::Down => app.select_next(),
            KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
            KeyCode::Enter => app.open_selected()?,
            KeyCode::Char('x') => app.remove_selected()?,
            KeyCode::Char('f') => app.cycle_filter()?,
            KeyCode::Char('r') => app.refresh_videos()?,
            _ => {}
        },
    }

    Ok(None)
}

/// Help text for the focused panel.
const fn help_line(pane: Pane) -> &'static str {
    match pane {
        Pane::Timer => "s/space:start-pause | r:reset | n:skip | Tab:panel | q:quit",
        Pane::Notes => "i:edit (Esc to stop) | s:save | e:export | c:clear | Tab:panel | q:quit",
        Pane::Videos => "j/k:nav | Enter:play | x:remove | f:filter | r:refresh | Tab:panel | q:quit",
    }
}
