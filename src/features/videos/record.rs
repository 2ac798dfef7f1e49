//! The watched-video record.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use super::subject::Subject;

/// A video in the watch history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Database ID (None if not persisted)
    pub id: Option<i64>,
    /// YouTube video id extracted from the URL
    pub video_id: String,
    /// Display title
    pub title: String,
    /// Original URL as entered
    pub url: String,
    /// Subject categorization
    pub subject: Subject,
    /// When the video was last watched
    pub watched_at: DateTime<Utc>,
}

impl VideoRecord {
    /// Create a new, unpersisted record watched now.
    #[must_use]
    pub fn new(video_id: String, title: String, url: String, subject: Subject) -> Self {
        Self {
            id: None,
            video_id,
            title,
            url,
            subject,
            watched_at: Utc::now(),
        }
    }

    /// Get the watch time in the local timezone.
    #[must_use]
    pub fn watched_at_local(&self) -> DateTime<Local> {
        self.watched_at.with_timezone(&Local)
    }

    /// The embeddable player URL.
    #[must_use]
    pub fn embed_url(&self) -> String {
        super::url::embed_url(&self.video_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = VideoRecord::new(
            "dQw4w9WgXcQ".to_string(),
            "Integrals 101".to_string(),
            "https://youtu.be/dQw4w9WgXcQ".to_string(),
            Subject::Math,
        );

        assert_eq!(record.id, None);
        assert_eq!(record.subject, Subject::Math);
        assert_eq!(
            record.embed_url(),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }
}
