//! Durable study notes.
//!
//! A single edit buffer persisted through the key-value store:
//! - Periodic auto-flush while the dashboard is open
//! - Explicit save into an append-only snapshot list
//! - Plain-text export and clear

pub mod buffer;
pub mod export;

pub use buffer::{NoteBuffer, CURRENT_NOTE_KEY, SNAPSHOTS_KEY};
pub use export::NoteExporter;
