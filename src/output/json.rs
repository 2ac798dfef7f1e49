//! JSON output formatting for studytube.

use serde::Serialize;
use serde_json::json;

use crate::error::StudyTubeError;
use crate::features::videos::VideoRecord;

/// Serialize any value as pretty-printed JSON
///
/// # Errors
///
/// Returns `StudyTubeError::Json` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, StudyTubeError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format the video history as JSON
///
/// # Errors
///
/// Returns `StudyTubeError::Json` if serialization fails.
pub fn format_videos_json(videos: &[VideoRecord]) -> Result<String, StudyTubeError> {
    let output = json!({
        "count": videos.len(),
        "items": videos
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the current note text as JSON
///
/// # Errors
///
/// Returns `StudyTubeError::Json` if serialization fails.
pub fn format_note_json(text: &str) -> Result<String, StudyTubeError> {
    let output = json!({
        "text": text,
        "characters": text.chars().count()
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format saved snapshots as JSON
///
/// # Errors
///
/// Returns `StudyTubeError::Json` if serialization fails.
pub fn format_snapshots_json(snapshots: &[String]) -> Result<String, StudyTubeError> {
    let output = json!({
        "count": snapshots.len(),
        "items": snapshots
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::videos::Subject;

    #[test]
    fn test_format_videos_json_shape() {
        let videos = vec![VideoRecord::new(
            "abc".to_string(),
            "Title".to_string(),
            "https://youtu.be/abc".to_string(),
            Subject::Math,
        )];

        let output = format_videos_json(&videos).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["subject"], "math");
    }

    #[test]
    fn test_format_note_json_counts_chars() {
        let output = format_note_json("abc").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["characters"], 3);
    }
}
