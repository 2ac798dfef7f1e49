//! Configuration and filesystem paths.

pub mod paths;
pub mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, NotesConfig, TimerConfig};
