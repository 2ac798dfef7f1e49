//! Note pad command implementation.

use serde_json::json;

use crate::cli::args::{NotesCommands, OutputFormat};
use crate::config::Config;
use crate::error::StudyTubeError;
use crate::features::notes::{NoteBuffer, NoteExporter};
use crate::output::{self, to_json};
use crate::storage::SqliteKvStore;

/// Execute notes subcommands.
pub fn notes(
    config: &Config,
    cmd: NotesCommands,
    format: OutputFormat,
) -> Result<String, StudyTubeError> {
    let store = SqliteKvStore::new()?;
    let mut buffer = NoteBuffer::load(store)?;

    match cmd {
        NotesCommands::Show => output::format_note(buffer.text(), format),

        NotesCommands::Edit { text } => {
            buffer.edit(text);
            let written = buffer.auto_flush()?;
            match format {
                OutputFormat::Json => to_json(&json!({
                    "written": written,
                    "characters": buffer.text().chars().count(),
                })),
                OutputFormat::Pretty => {
                    if written {
                        Ok("Note updated".to_string())
                    } else {
                        Ok("Nothing to write - the text is empty. \
                            Use 'studytube notes clear' to empty the pad."
                            .to_string())
                    }
                }
            }
        }

        NotesCommands::Save { text } => {
            if let Some(text) = text {
                buffer.edit(text);
            }
            let notification = buffer.save()?;
            match format {
                OutputFormat::Json => to_json(&json!({
                    "saved": notification.is_some(),
                    "snapshots": buffer.snapshots().len(),
                })),
                OutputFormat::Pretty => Ok(notification.map_or_else(
                    || "Nothing to save - the note pad is empty.".to_string(),
                    |n| output::format_notification_pretty(&n),
                )),
            }
        }

        NotesCommands::Export { dir } => {
            let dir = match dir {
                Some(dir) => dir,
                None => config.export_dir()?,
            };
            let exporter = NoteExporter::new(dir);
            let notification = buffer.export(&exporter)?;
            match format {
                OutputFormat::Json => to_json(&json!({
                    "exported": notification.is_some(),
                    "directory": exporter.dir(),
                })),
                OutputFormat::Pretty => Ok(notification.map_or_else(
                    || "Nothing to export - the note pad is empty.".to_string(),
                    |n| output::format_notification_pretty(&n),
                )),
            }
        }

        NotesCommands::Clear => {
            let notification = buffer.clear()?;
            match format {
                OutputFormat::Json => to_json(&json!({ "cleared": true })),
                OutputFormat::Pretty => Ok(output::format_notification_pretty(&notification)),
            }
        }

        NotesCommands::Snapshots => output::format_snapshots(buffer.snapshots(), format),
    }
}
