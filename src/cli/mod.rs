//! Command-line interface for studytube.

pub mod args;
pub mod commands;
