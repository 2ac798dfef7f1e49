use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "studytube")]
#[command(about = "A terminal study companion: pomodoro timer, notes, and video history")]
#[command(long_about = "studytube - study sessions from the terminal

Run focus/break pomodoro cycles, keep a durable note pad, and track the
YouTube videos you study with, all from one dashboard or from plain
subcommands.

QUICK START:
  studytube tui                 Open the interactive dashboard
  studytube timer run           Run a focus/break cycle in the terminal
  studytube notes save \"...\"    Save a note snapshot
  studytube videos add <url>    Record a watched video

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  studytube <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive study dashboard
    ///
    /// A full-screen terminal dashboard combining the focus timer, the
    /// note pad, and your video history. The note pad auto-saves every
    /// ten seconds while the dashboard is open.
    ///
    /// # Examples
    ///
    ///   studytube tui
    ///   studytube d               Short alias
    #[command(aliases = ["d", "dashboard"])]
    Tui,

    /// Run the focus/break timer in the terminal
    ///
    /// Counts down a focus phase, then a break phase, printing progress
    /// inline. Phase lengths come from the config file unless overridden.
    #[command(alias = "t")]
    Timer(TimerArgs),

    /// Manage the study note pad
    ///
    /// One durable note buffer plus an append-only list of saved
    /// snapshots. The buffer survives between runs; snapshots keep old
    /// versions around.
    #[command(alias = "n")]
    Notes(NotesArgs),

    /// Manage the watched-video history
    ///
    /// Records YouTube videos by URL, categorized by subject. Listing can
    /// be narrowed to a single subject.
    #[command(alias = "v")]
    Videos(VideosArgs),

    /// Shell integration helpers
    Shell(ShellArgs),
}

#[derive(Args)]
pub struct TimerArgs {
    #[command(subcommand)]
    pub command: TimerCommands,
}

#[derive(Subcommand)]
pub enum TimerCommands {
    /// Run focus/break cycles until interrupted
    ///
    /// # Examples
    ///
    ///   studytube timer run                 One 25/5 cycle
    ///   studytube timer run --focus 50      50-minute focus phase
    ///   studytube timer run --rounds 4      Four full cycles
    Run {
        /// Focus phase length in minutes (defaults to config)
        #[arg(long)]
        focus: Option<u32>,

        /// Break phase length in minutes (defaults to config)
        #[arg(long = "break")]
        break_minutes: Option<u32>,

        /// Number of focus sessions to complete before exiting
        #[arg(long, default_value = "1")]
        rounds: u32,
    },
}

#[derive(Args)]
pub struct NotesArgs {
    #[command(subcommand)]
    pub command: NotesCommands,
}

#[derive(Subcommand)]
pub enum NotesCommands {
    /// Show the current note text
    Show,

    /// Replace the current note text
    ///
    /// Overwrites the buffer and persists it. Does not create a snapshot;
    /// use 'save' for that.
    Edit {
        /// The new note text
        text: String,
    },

    /// Save the current text as a snapshot
    ///
    /// Appends the buffer to the saved list. Saving an empty buffer does
    /// nothing. Pass TEXT to replace the buffer first.
    Save {
        /// Replace the buffer with this text before saving
        text: Option<String>,
    },

    /// Export the current note text to a dated .txt file
    Export {
        /// Target directory (defaults to config, then ~/.studytube/exports)
        #[arg(long)]
        dir: Option<std::path::PathBuf>,
    },

    /// Clear the current note text
    ///
    /// Saved snapshots are kept.
    Clear,

    /// List saved snapshots
    #[command(alias = "history")]
    Snapshots,
}

#[derive(Args)]
pub struct VideosArgs {
    #[command(subcommand)]
    pub command: VideosCommands,
}

#[derive(Subcommand)]
pub enum VideosCommands {
    /// Add a YouTube video to the history
    ///
    /// # Examples
    ///
    ///   studytube videos add https://youtu.be/xyz --subject math
    ///   studytube videos add <url> --title "Limits explained"
    Add {
        /// The YouTube URL (watch?v= or youtu.be forms)
        url: String,

        /// Display title (defaults to the video id)
        #[arg(long)]
        title: Option<String>,

        /// Subject tag, e.g. math, history, biology
        #[arg(long, default_value = "general")]
        subject: String,
    },

    /// List watched videos, newest first
    List {
        /// Only show one subject
        #[arg(long)]
        subject: Option<String>,

        /// Maximum number of videos to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Show a video and refresh its watched time
    Open {
        /// Video ID from 'videos list'
        id: i64,
    },

    /// Remove a video from the history
    #[command(alias = "rm")]
    Remove {
        /// Video ID from 'videos list'
        id: i64,
    },
}

#[derive(Args)]
pub struct ShellArgs {
    #[command(subcommand)]
    pub command: ShellCommands,
}

#[derive(Subcommand)]
pub enum ShellCommands {
    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   studytube shell completions bash
    ///   studytube shell completions zsh > ~/.zsh/completions/_studytube
    Completions {
        /// Shell to generate for: bash, zsh, fish, powershell, elvish
        shell: String,
    },
}
