//! The durable note buffer.
//!
//! Holds the text being edited plus the ordered list of saved snapshots,
//! mirrored into a key-value store. The buffer is loaded once at startup and
//! written back on auto-flush, save, and clear.

use crate::core::Notification;
use crate::error::StudyTubeError;
use crate::features::notes::export::NoteExporter;
use crate::storage::KeyValueStore;

/// Storage key for the text currently being edited.
pub const CURRENT_NOTE_KEY: &str = "study-notes";
/// Storage key for the saved snapshot list (a JSON array of strings).
pub const SNAPSHOTS_KEY: &str = "saved-notes";

/// An edit buffer persisted through a [`KeyValueStore`].
pub struct NoteBuffer<S: KeyValueStore> {
    store: S,
    text: String,
    snapshots: Vec<String>,
}

impl<S: KeyValueStore> NoteBuffer<S> {
    /// Load the buffer from persisted state, or start empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the snapshot record
    /// is not a valid JSON array.
    pub fn load(store: S) -> Result<Self, StudyTubeError> {
        let text = store.get(CURRENT_NOTE_KEY)?.unwrap_or_default();
        let snapshots = match store.get(SNAPSHOTS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            store,
            text,
            snapshots,
        })
    }

    /// Replace the current text. No validation, no length limit.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The text currently being edited.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Saved snapshots, oldest first. Duplicates are allowed.
    #[must_use]
    pub fn snapshots(&self) -> &[String] {
        &self.snapshots
    }

    /// Whether the current text has anything besides whitespace.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Persist the current text if it has content.
    ///
    /// Fired periodically while the dashboard is open. Snapshots are never
    /// written here, and a blank buffer writes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn auto_flush(&mut self) -> Result<bool, StudyTubeError> {
        if !self.has_content() {
            return Ok(false);
        }
        self.store.set(CURRENT_NOTE_KEY, &self.text)?;
        Ok(true)
    }

    /// Append the current text to the snapshot list and persist both records.
    ///
    /// A blank buffer is a silent no-op: no snapshot, no notification.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or a store write fails.
    pub fn save(&mut self) -> Result<Option<Notification>, StudyTubeError> {
        if !self.has_content() {
            return Ok(None);
        }

        self.snapshots.push(self.text.clone());
        let serialized = serde_json::to_string(&self.snapshots)?;
        self.store.set(SNAPSHOTS_KEY, &serialized)?;
        self.store.set(CURRENT_NOTE_KEY, &self.text)?;

        Ok(Some(Notification::success(
            "Note saved!",
            "Your note was saved successfully.",
        )))
    }

    /// Write the current text to a date-stamped file via `exporter`.
    ///
    /// A blank buffer is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn export(
        &self,
        exporter: &NoteExporter,
    ) -> Result<Option<Notification>, StudyTubeError> {
        if !self.has_content() {
            return Ok(None);
        }

        let path = exporter.export(&self.text)?;
        let filename = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |f| f.to_string_lossy().into_owned());

        Ok(Some(Notification::success(
            "Notes exported!",
            format!("Saved as {filename}."),
        )))
    }

    /// Empty the current text and drop its persisted record.
    ///
    /// Snapshots are untouched. Notifies even when the buffer was already
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn clear(&mut self) -> Result<Notification, StudyTubeError> {
        self.text.clear();
        self.store.remove(CURRENT_NOTE_KEY)?;

        Ok(Notification::warning(
            "Notes cleared",
            "All notes were removed.",
        ))
    }
}
