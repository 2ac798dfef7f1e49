use colored::{Color, Colorize};

use crate::core::{Notification, Severity};
use crate::features::videos::{Subject, VideoRecord};

/// Render a notification as a single colored line
#[must_use]
pub fn format_notification_pretty(notification: &Notification) -> String {
    let title = match notification.severity {
        Severity::Success => notification.title.green().bold(),
        Severity::Warning => notification.title.yellow().bold(),
        Severity::Info => notification.title.bold(),
    };

    format!("{} {}", title, notification.description)
}

/// Format the video history as a pretty list
#[must_use]
pub fn format_videos_pretty(videos: &[VideoRecord], title: &str) -> String {
    if videos.is_empty() {
        return format!("{} (0 videos)\n  No videos watched yet", title);
    }

    let mut output = format!("{} ({} videos)\n", title, videos.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for video in videos {
        let id = video
            .id
            .map_or_else(|| "-".to_string(), |id| id.to_string());

        let mut line = format!(
            "{} {}",
            format!("[{id}]").dimmed(),
            video.title.bold()
        );
        line.push_str(&format!("  {}", subject_badge(video.subject)));
        line.push_str(&format!(
            "  {}",
            video
                .watched_at_local()
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .yellow()
        ));

        output.push_str(&line);
        output.push('\n');
        output.push_str(&format!("      {}\n", video.url.dimmed()));
    }

    output
}

/// Format a single video as pretty output
#[must_use]
pub fn format_video_pretty(video: &VideoRecord) -> String {
    let mut output = format!("▶ {}\n", video.title.bold());

    if let Some(id) = video.id {
        output.push_str(&format!("  {}: {}\n", "ID".dimmed(), id));
    }
    output.push_str(&format!("  {}: {}\n", "Subject".dimmed(), subject_badge(video.subject)));
    output.push_str(&format!("  {}: {}\n", "URL".dimmed(), video.url));
    output.push_str(&format!("  {}: {}\n", "Embed".dimmed(), video.embed_url()));
    output.push_str(&format!(
        "  {}: {}\n",
        "Watched".dimmed(),
        video.watched_at_local().format("%Y-%m-%d %H:%M")
    ));

    output
}

/// Format the current note text as pretty output
#[must_use]
pub fn format_note_pretty(text: &str) -> String {
    if text.trim().is_empty() {
        return "No notes yet".dimmed().to_string();
    }

    let chars = text.chars().count();
    format!("{}\n\n{}", text, format!("{chars} characters").dimmed())
}

/// Format saved snapshots as a pretty numbered list
#[must_use]
pub fn format_snapshots_pretty(snapshots: &[String]) -> String {
    if snapshots.is_empty() {
        return "Saved notes (0)\n  No saved notes".to_string();
    }

    let mut output = format!("Saved notes ({})\n", snapshots.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for (index, snapshot) in snapshots.iter().enumerate() {
        let number = format!("{:>3}.", index + 1);
        // Show only the first line of each snapshot in the list.
        let first_line = snapshot.lines().next().unwrap_or_default();
        output.push_str(&format!("{} {}\n", number.cyan(), first_line));
    }

    output
}

/// Subject name colored like the dashboard badges.
#[must_use]
pub fn subject_badge(subject: Subject) -> String {
    let color = match subject {
        Subject::Math | Subject::Science => Color::Blue,
        Subject::Portuguese | Subject::Chemistry => Color::Green,
        Subject::History | Subject::English => Color::Yellow,
        Subject::Geography | Subject::Literature => Color::Magenta,
        Subject::Physics => Color::Red,
        Subject::Biology => Color::Cyan,
        Subject::General => Color::White,
    };

    format!("#{}", subject.slug()).color(color).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video() -> VideoRecord {
        VideoRecord::new(
            "abc".to_string(),
            "Cell division".to_string(),
            "https://youtu.be/abc".to_string(),
            Subject::Biology,
        )
    }

    #[test]
    fn test_format_videos_empty() {
        let output = format_videos_pretty(&[], "History");
        assert!(output.contains("0 videos"));
        assert!(output.contains("No videos watched yet"));
    }

    #[test]
    fn test_format_videos_lists_titles() {
        let output = format_videos_pretty(&[video()], "History");
        assert!(output.contains("Cell division"));
        assert!(output.contains("biology"));
    }

    #[test]
    fn test_format_video_includes_embed() {
        let output = format_video_pretty(&video());
        assert!(output.contains("https://www.youtube.com/embed/abc"));
    }

    #[test]
    fn test_format_note_counts_characters() {
        let output = format_note_pretty("hello");
        assert!(output.contains("hello"));
        assert!(output.contains("5 characters"));
    }

    #[test]
    fn test_format_snapshots_shows_first_lines() {
        let snaps = vec!["line one\nline two".to_string(), "second".to_string()];
        let output = format_snapshots_pretty(&snaps);
        assert!(output.contains("line one"));
        assert!(!output.contains("line two"));
        assert!(output.contains("second"));
    }
}
