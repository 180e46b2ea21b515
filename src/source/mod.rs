//! Slide data input.
//!
//! Extraction from the presentation host happens elsewhere; this module
//! reads the extractor's JSON output behind a single pull operation.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{DeckGuardError, Result};
use crate::model::SlideData;

/// Source of extracted slide data for one QA run.
pub trait SlideSource {
    /// Fetch every slide in presentation order.
    ///
    /// # Errors
    /// Returns an error if the data cannot be obtained or is malformed. The
    /// run is aborted before any check executes.
    fn fetch_slides(&self) -> Result<Vec<SlideData>>;
}

/// Reads slide data as JSON from a file or stdin.
///
/// Accepts either a bare array of slides or an object with a `slides` field.
#[derive(Debug, Clone)]
pub struct JsonSlideSource {
    path: Option<PathBuf>,
}

impl JsonSlideSource {
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    #[must_use]
    pub const fn stdin() -> Self {
        Self { path: None }
    }

    /// `-` selects stdin, anything else is a file path.
    #[must_use]
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            Self::stdin()
        } else {
            Self::from_path(arg)
        }
    }

    fn read_input(&self) -> Result<String> {
        match &self.path {
            Some(path) => {
                std::fs::read_to_string(path).map_err(|source| DeckGuardError::FileRead {
                    path: path.clone(),
                    source,
                })
            }
            None => {
                let mut content = String::new();
                std::io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }
}

impl SlideSource for JsonSlideSource {
    fn fetch_slides(&self) -> Result<Vec<SlideData>> {
        parse_slides(&self.read_input()?)
    }
}

/// Parse extractor JSON into slides and check their indices.
///
/// # Errors
/// Returns an error if the JSON is invalid, has the wrong shape, or a slide
/// index is 0.
pub fn parse_slides(content: &str) -> Result<Vec<SlideData>> {
    let value: Value = serde_json::from_str(content)?;
    let slides_value = match value {
        Value::Object(mut map) => map.remove("slides").ok_or_else(|| {
            DeckGuardError::Extraction(
                "expected an array of slides or an object with a `slides` field".to_string(),
            )
        })?,
        other => other,
    };
    let slides: Vec<SlideData> = serde_json::from_value(slides_value)?;

    if let Some(pos) = slides.iter().position(|s| s.index == 0) {
        return Err(DeckGuardError::Extraction(format!(
            "slide at position {} has index 0; indices are 1-based",
            pos + 1
        )));
    }
    Ok(slides)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
