//! Local persistence for studytube.

pub mod database;
pub mod kv;
pub mod migrations;

pub use database::Database;
pub use kv::{KeyValueStore, MemoryKvStore, SqliteKvStore};
