use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Slide extraction failed: {0}")]
    Extraction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Augmentation request failed: {0}")]
    Augment(String),
}

impl DeckGuardError {
    /// Short category label used as the heading of rendered errors.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Extraction(_) => "Extraction",
            Self::Io(_) => "IO",
            Self::Json(_) => "JSON",
            Self::Augment(_) => "Augment",
        }
    }

    /// Actionable hint for the user, if one applies.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Run `deck-guard config validate` to check your .deck-guard.toml")
            }
            Self::FileRead { .. } => Some("Check that the file exists and is readable"),
            Self::Extraction(_) | Self::Json(_) => {
                Some("Re-export the slide data from the presentation and try again")
            }
            Self::Io(_) | Self::Augment(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DeckGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
