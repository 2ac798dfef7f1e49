//! Video history persistence.

use chrono::{DateTime, Utc};
use rusqlite::{params, types::Type, OptionalExtension, Row};

use super::record::VideoRecord;
use super::subject::Subject;
use crate::error::StudyTubeError;
use crate::storage::Database;

/// Storage for the watched-video history.
pub struct VideoStorage {
    db: Database,
}

impl VideoStorage {
    /// Create storage against the default database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, StudyTubeError> {
        Ok(Self {
            db: Database::open()?,
        })
    }

    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Add a video to the history.
    ///
    /// A video id already in the history is not added again; the existing
    /// record is returned unchanged instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert or lookup fails.
    pub fn save(&self, record: &mut VideoRecord) -> Result<bool, StudyTubeError> {
        if let Some(existing) = self.get_by_video_id(&record.video_id)? {
            *record = existing;
            return Ok(false);
        }

        let conn = self.db.connection();
        conn.execute(
            r"INSERT INTO videos (video_id, title, url, subject, watched_at)
              VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.video_id,
                record.title,
                record.url,
                record.subject.slug(),
                record.watched_at.to_rfc3339(),
            ],
        )
        .map_err(|e| StudyTubeError::Database(format!("Failed to insert video: {e}")))?;

        record.id = Some(conn.last_insert_rowid());
        Ok(true)
    }

    /// Get a video by database id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<VideoRecord>, StudyTubeError> {
        self.db
            .connection()
            .query_row(
                r"SELECT id, video_id, title, url, subject, watched_at
                  FROM videos WHERE id = ?1",
                [id],
                row_to_record,
            )
            .optional()
            .map_err(|e| StudyTubeError::Database(format!("Failed to query video: {e}")))
    }

    /// Get a video by its YouTube id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_by_video_id(&self, video_id: &str) -> Result<Option<VideoRecord>, StudyTubeError> {
        self.db
            .connection()
            .query_row(
                r"SELECT id, video_id, title, url, subject, watched_at
                  FROM videos WHERE video_id = ?1",
                [video_id],
                row_to_record,
            )
            .optional()
            .map_err(|e| StudyTubeError::Database(format!("Failed to query video: {e}")))
    }

    /// List the history, most recently watched first.
    ///
    /// `subject` narrows the list to one subject; `None` lists everything.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    #[allow(clippy::cast_possible_wrap)]
    pub fn list(
        &self,
        subject: Option<Subject>,
        limit: usize,
    ) -> Result<Vec<VideoRecord>, StudyTubeError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, video_id, title, url, subject, watched_at
                  FROM videos
                  WHERE (?1 IS NULL OR subject = ?1)
                  ORDER BY watched_at DESC LIMIT ?2",
            )
            .map_err(|e| StudyTubeError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(
                params![subject.map(|s| s.slug()), limit as i64],
                row_to_record,
            )
            .map_err(|e| StudyTubeError::Database(format!("Failed to list videos: {e}")))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(|e| {
                StudyTubeError::Database(format!("Failed to read video row: {e}"))
            })?);
        }

        Ok(records)
    }

    /// Refresh a video's watched time to now.
    ///
    /// # Errors
    ///
    /// Returns an error if the video does not exist or the update fails.
    pub fn touch(&self, id: i64) -> Result<VideoRecord, StudyTubeError> {
        let updated = self
            .db
            .connection()
            .execute(
                "UPDATE videos SET watched_at = ?1 WHERE id = ?2",
                params![Utc::now().to_rfc3339(), id],
            )
            .map_err(|e| StudyTubeError::Database(format!("Failed to update video: {e}")))?;

        if updated == 0 {
            return Err(StudyTubeError::NotFound(format!("Video {id}")));
        }

        self.get(id)?
            .ok_or_else(|| StudyTubeError::NotFound(format!("Video {id}")))
    }

    /// Remove a video from the history.
    ///
    /// # Errors
    ///
    /// Returns an error if the video does not exist or the delete fails.
    pub fn remove(&self, id: i64) -> Result<(), StudyTubeError> {
        let deleted = self
            .db
            .connection()
            .execute("DELETE FROM videos WHERE id = ?1", [id])
            .map_err(|e| StudyTubeError::Database(format!("Failed to delete video: {e}")))?;

        if deleted == 0 {
            return Err(StudyTubeError::NotFound(format!("Video {id}")));
        }
        Ok(())
    }
}

/// Map a database row to a video record.
fn row_to_record(row: &Row<'_>) -> rusqlite::Result<VideoRecord> {
    let watched_at: String = row.get(5)?;
    let watched_at = DateTime::parse_from_rfc3339(&watched_at)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?
        .with_timezone(&Utc);

    let subject: String = row.get(4)?;

    Ok(VideoRecord {
        id: Some(row.get(0)?),
        video_id: row.get(1)?,
        title: row.get(2)?,
        url: row.get(3)?,
        subject: Subject::parse(&subject),
        watched_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> VideoStorage {
        VideoStorage::with_database(Database::open_in_memory().unwrap())
    }

    fn record(video_id: &str, subject: Subject) -> VideoRecord {
        VideoRecord::new(
            video_id.to_string(),
            format!("Video {video_id}"),
            format!("https://youtu.be/{video_id}"),
            subject,
        )
    }

    #[test]
    fn test_save_assigns_id() {
        let storage = storage();
        let mut video = record("abc123", Subject::Math);

        assert!(storage.save(&mut video).unwrap());
        assert!(video.id.is_some());
    }

    #[test]
    fn test_save_dedupes_on_video_id() {
        let storage = storage();
        let mut first = record("abc123", Subject::Math);
        storage.save(&mut first).unwrap();

        let mut second = record("abc123", Subject::Physics);
        assert!(!storage.save(&mut second).unwrap());
        // The existing record wins.
        assert_eq!(second.id, first.id);
        assert_eq!(second.subject, Subject::Math);
        assert_eq!(storage.list(None, 10).unwrap().len(), 1);
    }

    #[test]
    fn test_list_filters_by_subject() {
        let storage = storage();
        storage.save(&mut record("a", Subject::Math)).unwrap();
        storage.save(&mut record("b", Subject::History)).unwrap();
        storage.save(&mut record("c", Subject::Math)).unwrap();

        assert_eq!(storage.list(None, 10).unwrap().len(), 3);
        let math = storage.list(Some(Subject::Math), 10).unwrap();
        assert_eq!(math.len(), 2);
        assert!(math.iter().all(|v| v.subject == Subject::Math));
        assert!(storage.list(Some(Subject::Biology), 10).unwrap().is_empty());
    }

    #[test]
    fn test_list_respects_limit() {
        let storage = storage();
        for i in 0..5 {
            storage.save(&mut record(&format!("v{i}"), Subject::General)).unwrap();
        }
        assert_eq!(storage.list(None, 3).unwrap().len(), 3);
    }

    #[test]
    fn test_touch_refreshes_watched_at() {
        let storage = storage();
        let mut video = record("abc", Subject::Math);
        video.watched_at = Utc::now() - chrono::Duration::days(3);
        storage.save(&mut video).unwrap();

        let touched = storage.touch(video.id.unwrap()).unwrap();
        assert!(touched.watched_at > video.watched_at);
    }

    #[test]
    fn test_remove() {
        let storage = storage();
        let mut video = record("abc", Subject::Math);
        storage.save(&mut video).unwrap();
        let id = video.id.unwrap();

        storage.remove(id).unwrap();
        assert!(storage.get(id).unwrap().is_none());
        assert!(matches!(
            storage.remove(id),
            Err(StudyTubeError::NotFound(_))
        ));
    }
}
