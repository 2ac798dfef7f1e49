//! Video history command implementation.

use serde_json::json;

use crate::cli::args::{OutputFormat, VideosCommands};
use crate::error::StudyTubeError;
use crate::features::videos::{extract_video_id, Subject, VideoRecord, VideoStorage};
use crate::output::{self, to_json};

/// Execute videos subcommands.
pub fn videos(cmd: VideosCommands, format: OutputFormat) -> Result<String, StudyTubeError> {
    let storage = VideoStorage::new()?;

    match cmd {
        VideosCommands::Add {
            url,
            title,
            subject,
        } => add_video(&storage, &url, title, &subject, format),

        VideosCommands::List { subject, limit } => {
            let subject = subject.map(|s| Subject::parse(&s));
            let videos = storage.list(subject, limit)?;
            let title = subject.map_or_else(
                || "Watched videos".to_string(),
                |s| format!("Watched videos - {s}"),
            );
            output::format_videos(&videos, &title, format)
        }

        VideosCommands::Open { id } => {
            let video = storage.touch(id)?;
            output::format_video(&video, format)
        }

        VideosCommands::Remove { id } => {
            storage.remove(id)?;
            match format {
                OutputFormat::Json => to_json(&json!({ "removed": id })),
                OutputFormat::Pretty => Ok(format!("Video {id} removed from history")),
            }
        }
    }
}

/// Add a video to the history.
fn add_video(
    storage: &VideoStorage,
    url: &str,
    title: Option<String>,
    subject: &str,
    format: OutputFormat,
) -> Result<String, StudyTubeError> {
    let video_id = extract_video_id(url).ok_or_else(|| {
        StudyTubeError::Parse(format!("'{url}' is not a recognizable YouTube URL"))
    })?;

    let title = title.unwrap_or_else(|| format!("Video {video_id}"));
    let mut record = VideoRecord::new(
        video_id,
        title,
        url.to_string(),
        Subject::parse(subject),
    );

    let inserted = storage.save(&mut record)?;

    match format {
        OutputFormat::Json => to_json(&json!({
            "added": inserted,
            "video": record,
        })),
        OutputFormat::Pretty => {
            if inserted {
                Ok(format!(
                    "Added to history:\n{}",
                    output::format_video_pretty(&record)
                ))
            } else {
                Ok(format!(
                    "Already in history:\n{}",
                    output::format_video_pretty(&record)
                ))
            }
        }
    }
}
