mod console;
mod error_output;
mod json;
mod text;

pub use console::ConsoleFormatter;
pub use error_output::{ErrorOutput, print_error_full, print_warning};
pub use json::JsonFormatter;
pub use text::{REPORT_HEADER, TextFormatter};

use crate::error::Result;
use crate::model::Issue;
use crate::report::Report;

/// Trait for formatting a report into various output formats.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &Report) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Grouped, optionally colored view for terminals.
    #[default]
    Console,
    /// Canonical plain-text export.
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" | "human" => Ok(Self::Console),
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// `Slide N` / `Slide N, shape` location suffix, if the issue has one.
fn location(issue: &Issue, with_shape: bool) -> Option<String> {
    match (issue.slide, issue.shape.as_deref()) {
        (Some(slide), Some(shape)) if with_shape => Some(format!("Slide {slide}, {shape}")),
        (Some(slide), _) => Some(format!("Slide {slide}")),
        (None, _) => None,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
