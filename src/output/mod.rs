//! Output formatting for studytube.
//!
//! This module provides formatters for displaying study data in various
//! formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::StudyTubeError;
use crate::features::videos::VideoRecord;

pub use json::*;
pub use pretty::*;

/// Format the video history based on output format
///
/// # Errors
///
/// Returns `StudyTubeError::Json` if JSON serialization fails.
pub fn format_videos(
    videos: &[VideoRecord],
    title: &str,
    format: OutputFormat,
) -> Result<String, StudyTubeError> {
    match format {
        OutputFormat::Pretty => Ok(format_videos_pretty(videos, title)),
        OutputFormat::Json => format_videos_json(videos),
    }
}

/// Format a single video based on output format
///
/// # Errors
///
/// Returns `StudyTubeError::Json` if JSON serialization fails.
pub fn format_video(video: &VideoRecord, format: OutputFormat) -> Result<String, StudyTubeError> {
    match format {
        OutputFormat::Pretty => Ok(format_video_pretty(video)),
        OutputFormat::Json => to_json(video),
    }
}

/// Format the current note text based on output format
///
/// # Errors
///
/// Returns `StudyTubeError::Json` if JSON serialization fails.
pub fn format_note(text: &str, format: OutputFormat) -> Result<String, StudyTubeError> {
    match format {
        OutputFormat::Pretty => Ok(format_note_pretty(text)),
        OutputFormat::Json => format_note_json(text),
    }
}

/// Format saved snapshots based on output format
///
/// # Errors
///
/// Returns `StudyTubeError::Json` if JSON serialization fails.
pub fn format_snapshots(
    snapshots: &[String],
    format: OutputFormat,
) -> Result<String, StudyTubeError> {
    match format {
        OutputFormat::Pretty => Ok(format_snapshots_pretty(snapshots)),
        OutputFormat::Json => format_snapshots_json(snapshots),
    }
}
