//! Shell integration commands.
//!
//! Generates shell completion scripts for bash, zsh, fish, PowerShell,
//! and elvish.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, ShellCommands};
use crate::error::StudyTubeError;

/// Execute shell subcommands.
pub fn shell(cmd: ShellCommands) -> Result<String, StudyTubeError> {
    match cmd {
        ShellCommands::Completions { shell } => {
            let shell = shell_from_str(&shell).ok_or_else(|| {
                StudyTubeError::Parse(format!("Unknown shell '{shell}'"))
            })?;
            generate_completions(shell)
        }
    }
}

/// Generate the completion script for the specified shell.
fn generate_completions(shell: Shell) -> Result<String, StudyTubeError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "studytube", &mut buf);
    String::from_utf8(buf).map_err(|e| StudyTubeError::Parse(format!("UTF-8 error: {e}")))
}

/// Get shell from string name.
fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}
