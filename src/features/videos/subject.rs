//! Study subjects used to categorize videos.

use serde::{Deserialize, Serialize};

/// Subject a video belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Math,
    Portuguese,
    History,
    Geography,
    Science,
    Physics,
    Chemistry,
    Biology,
    English,
    Literature,
    /// Fallback for anything uncategorized.
    General,
}

impl Subject {
    /// All subjects, in display order.
    pub const ALL: [Self; 11] = [
        Self::Math,
        Self::Portuguese,
        Self::History,
        Self::Geography,
        Self::Science,
        Self::Physics,
        Self::Chemistry,
        Self::Biology,
        Self::English,
        Self::Literature,
        Self::General,
    ];

    /// Parse a subject from string. Unknown values fall back to `General`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "math" | "mathematics" => Self::Math,
            "portuguese" | "pt" => Self::Portuguese,
            "history" => Self::History,
            "geography" | "geo" => Self::Geography,
            "science" => Self::Science,
            "physics" => Self::Physics,
            "chemistry" | "chem" => Self::Chemistry,
            "biology" | "bio" => Self::Biology,
            "english" | "en" => Self::English,
            "literature" | "lit" => Self::Literature,
            _ => Self::General,
        }
    }

    /// Stable lowercase identifier, used for storage and CLI values.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Portuguese => "portuguese",
            Self::History => "history",
            Self::Geography => "geography",
            Self::Science => "science",
            Self::Physics => "physics",
            Self::Chemistry => "chemistry",
            Self::Biology => "biology",
            Self::English => "english",
            Self::Literature => "literature",
            Self::General => "general",
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Math => "Math",
            Self::Portuguese => "Portuguese",
            Self::History => "History",
            Self::Geography => "Geography",
            Self::Science => "Science",
            Self::Physics => "Physics",
            Self::Chemistry => "Chemistry",
            Self::Biology => "Biology",
            Self::English => "English",
            Self::Literature => "Literature",
            Self::General => "General",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
