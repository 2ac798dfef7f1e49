//! Watched-video history.
//!
//! Tracks the YouTube videos studied with:
//! - URL parsing and embed links
//! - Subject categorization and filtering
//! - Persistent, deduplicated history

pub mod record;
pub mod storage;
pub mod subject;
pub mod url;

pub use record::VideoRecord;
pub use storage::VideoStorage;
pub use subject::Subject;
pub use url::{embed_url, extract_video_id};
