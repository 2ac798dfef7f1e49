use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use studytube::cli::args::{Cli, Commands};
use studytube::cli::commands;
use studytube::config::Config;
use studytube::error::StudyTubeError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), StudyTubeError> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let format = cli.output;

    let output = match cli.command {
        Commands::Tui => {
            studytube::tui::run(&config)?;
            String::new()
        }
        Commands::Timer(args) => commands::timer(&config, args.command, format)?,
        Commands::Notes(args) => commands::notes(&config, args.command, format)?,
        Commands::Videos(args) => commands::videos(args.command, format)?,
        Commands::Shell(args) => commands::shell(args.command)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
