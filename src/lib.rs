//! studytube - A terminal study companion
//!
//! This crate provides a pomodoro-style focus timer, a durable note pad,
//! and a YouTube video history, driven either from an interactive terminal
//! dashboard or from plain subcommands.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::StudyTubeError;
