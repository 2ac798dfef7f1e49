//! Plain-text note export.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::StudyTubeError;

/// Writes note text to date-stamped `.txt` files in a target directory.
pub struct NoteExporter {
    dir: PathBuf,
}

impl NoteExporter {
    /// Create an exporter targeting `dir`.
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// The target directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `text` to `notes-YYYY-MM-DD.txt`, returning the path.
    ///
    /// Exporting twice on the same day overwrites the earlier file.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn export(&self, text: &str) -> Result<PathBuf, StudyTubeError> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).map_err(StudyTubeError::Io)?;
        }

        let filename = format!("notes-{}.txt", Local::now().format("%Y-%m-%d"));
        let path = self.dir.join(filename);
        std::fs::write(&path, text).map_err(StudyTubeError::Io)?;

        Ok(path)
    }
}
